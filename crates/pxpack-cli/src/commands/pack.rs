//! Pack command: components -> packed value.

use crate::PackArgs;
use anyhow::Result;
use pxpack_core::AnyPixel;
use tracing::debug;

/// Packs the given components and prints the packed value.
pub fn run(args: PackArgs, verbose: u8) -> Result<()> {
    let format = super::parse_format(&args.format)?;
    let v = super::components_to_vector(&args.components);
    debug!(%format, scaled = args.scaled, ?v, "packing");

    let px = if args.scaled {
        AnyPixel::from_scaled_vector4(format, v)
    } else {
        AnyPixel::from_vector4(format, v)
    };

    println!("{}", super::format_packed(format, px.packed_u64()));
    if verbose > 0 {
        println!("  Pixel:  {px}");
        println!("  Native: {}", super::format_vector(px.to_vector4()));
        println!("  Scaled: {}", super::format_vector(px.to_scaled_vector4()));
    }
    Ok(())
}
