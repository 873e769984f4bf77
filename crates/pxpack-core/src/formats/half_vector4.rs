//! Four half-float components in 64 bits.
//!
//! X occupies bits [0:16), Y [16:32), Z [32:48) and W [48:64).

use crate::codec::{decode_half, encode_half};
use crate::format::PixelFormat;
use crate::pixel::{fmt_component, AlphaRepresentation, Pixel, PixelTypeInfo};
use crate::scale::{signed_to_unit, unit_to_signed};
use crate::Vector4;
use std::fmt;

/// Four packed half-precision floats, W treated as alpha.
///
/// Native range is signed; the scaled bridge rescales all four components.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HalfVector4 {
    packed: u64,
}

impl HalfVector4 {
    /// Packs four floats.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            packed: u64::from(encode_half(x))
                | (u64::from(encode_half(y)) << 16)
                | (u64::from(encode_half(z)) << 32)
                | (u64::from(encode_half(w)) << 48),
        }
    }

    /// Decodes all four components.
    #[inline]
    pub fn unpack(self) -> [f32; 4] {
        [
            decode_half(self.packed as u16),
            decode_half((self.packed >> 16) as u16),
            decode_half((self.packed >> 32) as u16),
            decode_half((self.packed >> 48) as u16),
        ]
    }
}

impl Pixel for HalfVector4 {
    type Packed = u64;
    const FORMAT: PixelFormat = PixelFormat::HalfVector4;
    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(64, 4, AlphaRepresentation::Unassociated);

    #[inline]
    fn from_packed(packed: u64) -> Self {
        Self { packed }
    }

    #[inline]
    fn packed(self) -> u64 {
        self.packed
    }

    #[inline]
    fn from_vector4(v: Vector4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    #[inline]
    fn to_vector4(self) -> Vector4 {
        Vector4::from_array(self.unpack())
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::from_vector4(unit_to_signed(v))
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        signed_to_unit(self.to_vector4())
    }
}

impl fmt::Debug for HalfVector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HalfVector4")
            .field(&format_args!("{:#018x}", self.packed))
            .finish()
    }
}

impl fmt::Display for HalfVector4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HalfVector4(")?;
        for (i, c) in self.unpack().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt_component(f, c)?;
        }
        f.write_str(")")
    }
}
