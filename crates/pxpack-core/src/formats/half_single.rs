//! One half-float component in 16 bits.

use crate::codec::{decode_half, encode_half};
use crate::format::PixelFormat;
use crate::pixel::{fmt_component, AlphaRepresentation, Pixel, PixelTypeInfo};
use crate::scale::{signed_to_unit_f32, unit_to_signed_f32};
use crate::Vector4;
use std::fmt;

/// Single half-precision float.
///
/// Native range is signed; the scaled bridge uses `(c + 1) / 2`. Unpacking
/// reports Y = 0, Z = 0, W = 1.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HalfSingle {
    packed: u16,
}

impl HalfSingle {
    /// Packs one float.
    #[inline]
    pub fn new(x: f32) -> Self {
        Self {
            packed: encode_half(x),
        }
    }

    /// Decodes the component.
    #[inline]
    pub fn to_f32(self) -> f32 {
        decode_half(self.packed)
    }
}

impl Pixel for HalfSingle {
    type Packed = u16;
    const FORMAT: PixelFormat = PixelFormat::HalfSingle;
    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(16, 1, AlphaRepresentation::None);

    #[inline]
    fn from_packed(packed: u16) -> Self {
        Self { packed }
    }

    #[inline]
    fn packed(self) -> u16 {
        self.packed
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(v.x)
    }

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::new(self.to_f32(), 0.0, 0.0, 1.0)
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::new(unit_to_signed_f32(v.x))
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        Vector4::new(signed_to_unit_f32(self.to_f32()), 0.0, 0.0, 1.0)
    }
}

impl fmt::Debug for HalfSingle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HalfSingle")
            .field(&format_args!("{:#06x}", self.packed))
            .finish()
    }
}

impl fmt::Display for HalfSingle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HalfSingle(")?;
        fmt_component(f, self.to_f32())?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridges() {
        let px = HalfSingle::from_scaled_vector4(Vector4::new(0.75, 0.2, 0.3, 0.4));
        assert_eq!(px.to_f32(), 0.5);
        assert_eq!(px.to_vector4(), Vector4::new(0.5, 0.0, 0.0, 1.0));
        assert_eq!(px.to_scaled_vector4(), Vector4::new(0.75, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(HalfSingle::new(-2.5).to_string(), "HalfSingle(-2.5)");
        assert_eq!(format!("{:?}", HalfSingle::new(1.0)), "HalfSingle(0x3c00)");
    }
}
