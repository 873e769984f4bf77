//! Convert command: packed value in one format -> packed value in another.

use crate::ConvertArgs;
use anyhow::{Context, Result};
use pxpack_core::AnyPixel;
use tracing::{debug, info};

/// Converts a packed value between formats via the scaled vector.
pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    let from = super::parse_format(&args.from)?;
    let to = super::parse_format(&args.to)?;
    let raw = super::parse_packed(&args.packed)?;

    let src = AnyPixel::from_packed_u64(from, raw)
        .with_context(|| format!("Cannot read {} as {from}", args.packed))?;
    let dst = src.convert(to);
    debug!(%from, %to, src = %src, dst = %dst, "converted");

    let back = dst.convert(from);
    if back != src {
        info!(%from, %to, "conversion is lossy for this value");
    }

    println!("{}", super::format_packed(to, dst.packed_u64()));
    if verbose > 0 {
        println!("  Source: {src}");
        println!("  Target: {dst}");
        println!("  Scaled: {}", super::format_vector(dst.to_scaled_vector4()));
        println!(
            "  Back:   {} ({})",
            super::format_packed(from, back.packed_u64()),
            if back == src { "exact" } else { "lossy" }
        );
    }
    Ok(())
}
