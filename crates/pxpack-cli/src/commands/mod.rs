//! CLI command implementations

pub mod convert;
pub mod formats;
pub mod pack;
pub mod unpack;

use anyhow::{Context, Result};
use pxpack_core::{PixelFormat, Vector4};

/// Parse a format name
pub fn parse_format(name: &str) -> Result<PixelFormat> {
    name.parse::<PixelFormat>()
        .context("Run `pxpack formats` for the list of known formats")
}

/// Parse a packed value given as `0x`-prefixed hex or decimal
pub fn parse_packed(s: &str) -> Result<u64> {
    let s = s.trim().replace('_', "");
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse::<u64>(),
    };
    parsed.with_context(|| format!("Invalid packed value: {s}"))
}

/// Build a vector from 1-4 components, defaulting the rest to (0, 0, 0, 1)
pub fn components_to_vector(components: &[f32]) -> Vector4 {
    let mut v = [0.0, 0.0, 0.0, 1.0];
    for (dst, src) in v.iter_mut().zip(components) {
        *dst = *src;
    }
    Vector4::from_array(v)
}

/// Format a packed value as zero-padded hex for the given format's width
pub fn format_packed(format: PixelFormat, value: u64) -> String {
    format!("{:#0width$x}", value, width = format.bytes() * 2 + 2)
}

/// Format a vector as `(x, y, z, w)` with fixed precision
pub fn format_vector(v: Vector4) -> String {
    format!("({:.6}, {:.6}, {:.6}, {:.6})", v.x, v.y, v.z, v.w)
}
