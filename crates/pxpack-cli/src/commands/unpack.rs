//! Unpack command: packed value -> vector.

use crate::UnpackArgs;
use anyhow::{Context, Result};
use pxpack_core::AnyPixel;
use tracing::debug;

/// Decodes a packed value and prints its vector.
pub fn run(args: UnpackArgs, verbose: u8) -> Result<()> {
    let format = super::parse_format(&args.format)?;
    let raw = super::parse_packed(&args.packed)?;
    let px = AnyPixel::from_packed_u64(format, raw)
        .with_context(|| format!("Cannot read {} as {format}", args.packed))?;
    debug!(%format, raw, "unpacking");

    let v = if args.scaled {
        px.to_scaled_vector4()
    } else {
        px.to_vector4()
    };
    println!("{}", super::format_vector(v));

    if verbose > 0 {
        println!("  Pixel:  {px}");
        println!("  Packed: {}", super::format_packed(format, raw));
    }
    Ok(())
}
