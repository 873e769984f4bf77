//! The capability contract every packed pixel format implements.
//!
//! A pixel is a `Copy` newtype over one storage cell ([`PackedValue`]). It
//! converts to and from the canonical exchange vector ([`Vector4`]) through
//! two bridges:
//!
//! - **native** ([`from_vector4`](Pixel::from_vector4) /
//!   [`to_vector4`](Pixel::to_vector4)) - components in the format's own range,
//!   which may be signed;
//! - **scaled** ([`from_scaled_vector4`](Pixel::from_scaled_vector4) /
//!   [`to_scaled_vector4`](Pixel::to_scaled_vector4)) - every component in
//!   [0, 1].
//!
//! Only the scaled bridge is uniform across formats, so it is the one used for
//! every cross-format conversion ([`from_pixel`](Pixel::from_pixel),
//! [`to_pixel`](Pixel::to_pixel)). No format converts directly to another.
//!
//! # Example
//!
//! ```
//! use pxpack_core::prelude::*;
//!
//! let rg = HalfVector2::new(1.0, -1.0);
//! let rgba: Rgba32 = rg.to_pixel();
//! assert_eq!(rgba.to_array(), [255, 0, 0, 255]);
//!
//! let back = HalfVector2::from_pixel(rgba);
//! assert_eq!(back, rg);
//! ```

use crate::error::Result;
use crate::format::PixelFormat;
use crate::packed::PackedValue;
use crate::Vector4;
use std::fmt;
use std::hash::Hash;

/// How a format represents alpha, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphaRepresentation {
    /// No alpha channel; unpacking reports W = 1.
    None,
    /// Straight (not premultiplied) alpha.
    Unassociated,
}

/// Static description of a pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelTypeInfo {
    /// Width of the storage cell in bits.
    pub bits_per_pixel: u32,
    /// Number of stored components.
    pub component_count: u8,
    /// Alpha representation.
    pub alpha: AlphaRepresentation,
}

impl PixelTypeInfo {
    /// Creates a type description.
    #[inline]
    pub const fn new(bits_per_pixel: u32, component_count: u8, alpha: AlphaRepresentation) -> Self {
        Self {
            bits_per_pixel,
            component_count,
            alpha,
        }
    }
}

/// A packed pixel format.
///
/// Implementors are `#[repr(transparent)]` over [`Pixel::Packed`] and derive
/// equality and hashing from the packed bits, so two values are equal only if
/// their storage cells are bit-identical.
pub trait Pixel:
    Copy + Default + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Storage cell type.
    type Packed: PackedValue;

    /// Run-time tag for this format.
    const FORMAT: PixelFormat;

    /// Static description of this format.
    const TYPE_INFO: PixelTypeInfo;

    /// Wraps a raw packed value.
    fn from_packed(packed: Self::Packed) -> Self;

    /// The raw packed value.
    fn packed(self) -> Self::Packed;

    /// Packs from a vector in this format's native range.
    fn from_vector4(v: Vector4) -> Self;

    /// Unpacks to a vector in this format's native range.
    fn to_vector4(self) -> Vector4;

    /// Packs from a vector whose components are in [0, 1].
    fn from_scaled_vector4(v: Vector4) -> Self;

    /// Unpacks to a vector whose components are in [0, 1].
    fn to_scaled_vector4(self) -> Vector4;

    /// Converts from any other format via the scaled bridge.
    #[inline]
    fn from_pixel<P: Pixel>(source: P) -> Self {
        Self::from_scaled_vector4(source.to_scaled_vector4())
    }

    /// Converts to any other format via the scaled bridge.
    #[inline]
    fn to_pixel<P: Pixel>(self) -> P {
        P::from_scaled_vector4(self.to_scaled_vector4())
    }

    /// Replaces the whole packed value, returning the previous pixel.
    ///
    /// This is the only mutation offered: there is no per-component setter.
    #[inline]
    fn replace_packed(&mut self, packed: Self::Packed) -> Self {
        std::mem::replace(self, Self::from_packed(packed))
    }

    /// Writes the packed value little-endian into `out`.
    #[inline]
    fn write_le_bytes(self, out: &mut [u8]) -> Result<()> {
        self.packed().write_le(out)
    }

    /// Reads a pixel from its little-endian storage bytes.
    #[inline]
    fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        Self::Packed::read_le(bytes).map(Self::from_packed)
    }
}

/// Formats a component for `Display`: at most two fractional digits, trailing
/// zeros dropped.
pub(crate) fn fmt_component(f: &mut fmt::Formatter<'_>, v: f32) -> fmt::Result {
    if !v.is_finite() {
        return write!(f, "{v}");
    }
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" => f.write_str("0"),
        _ => f.write_str(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{HalfVector2, L8, Rgba32};

    struct Component(f32);

    impl fmt::Display for Component {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt_component(f, self.0)
        }
    }

    #[test]
    fn test_fmt_component() {
        assert_eq!(Component(1.0).to_string(), "1");
        assert_eq!(Component(-1.0).to_string(), "-1");
        assert_eq!(Component(0.1).to_string(), "0.1");
        assert_eq!(Component(0.126).to_string(), "0.13");
        assert_eq!(Component(-0.001).to_string(), "0");
        assert_eq!(Component(f32::INFINITY).to_string(), "inf");
        assert_eq!(Component(f32::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_replace_packed() {
        let mut px = HalfVector2::new(0.5, 0.5);
        let old = px.replace_packed(0);
        assert_eq!(old, HalfVector2::new(0.5, 0.5));
        assert_eq!(px.packed(), 0);
    }

    #[test]
    fn test_fan_out_is_scaled_bridge() {
        let src = Rgba32::new(10, 200, 30, 40);
        let direct = L8::from_pixel(src);
        let manual = L8::from_scaled_vector4(src.to_scaled_vector4());
        assert_eq!(direct, manual);
        let to: L8 = src.to_pixel();
        assert_eq!(to, manual);
    }

    #[test]
    fn test_le_bytes() {
        let px = HalfVector2::new(1.0, -1.0);
        let mut buf = [0u8; 4];
        px.write_le_bytes(&mut buf).unwrap();
        assert_eq!(buf, [0x00, 0x3c, 0x00, 0xbc]);
        assert_eq!(HalfVector2::from_le_bytes(&buf).unwrap(), px);
        assert!(HalfVector2::from_le_bytes(&buf[..2]).is_err());
    }
}
