//! 16-bit packed BGRA with 5-bit color and 1-bit alpha.
//!
//! ```text
//!  15  14   10 9     5 4     0
//! +---+-------+-------+-------+
//! | A |   R   |   G   |   B   |
//! +---+-------+-------+-------+
//! ```

use crate::format::PixelFormat;
use crate::pixel::{AlphaRepresentation, Pixel, PixelTypeInfo};
use crate::scale::{quantize_unorm, unorm_to_f32};
use crate::Vector4;
use std::fmt;

/// 5-5-5-1 packed color.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Bgra5551 {
    packed: u16,
}

impl Bgra5551 {
    /// Packs 5-bit R, G, B and a 1-bit alpha. Higher bits are masked off.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: bool) -> Self {
        Self {
            packed: ((r as u16 & 0x1f) << 10)
                | ((g as u16 & 0x1f) << 5)
                | (b as u16 & 0x1f)
                | ((a as u16) << 15),
        }
    }

    /// 5-bit channels in R, G, B order and the alpha bit.
    #[inline]
    pub const fn to_parts(self) -> ([u8; 3], bool) {
        (
            [
                ((self.packed >> 10) & 0x1f) as u8,
                ((self.packed >> 5) & 0x1f) as u8,
                (self.packed & 0x1f) as u8,
            ],
            self.packed >> 15 == 1,
        )
    }
}

impl Pixel for Bgra5551 {
    type Packed = u16;
    const FORMAT: PixelFormat = PixelFormat::Bgra5551;
    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(16, 4, AlphaRepresentation::Unassociated);

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
        Self::from_scaled_vector4(v)
    }

    #[inline]
    fn to_vector4(self) -> Vector4 {
        self.to_scaled_vector4()
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        let q = |c: f32| quantize_unorm(c, 31) as u8;
        Self::new(q(v.x), q(v.y), q(v.z), quantize_unorm(v.w, 1) == 1)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        let ([r, g, b], a) = self.to_parts();
        Vector4::new(
            unorm_to_f32(r.into(), 31),
            unorm_to_f32(g.into(), 31),
            unorm_to_f32(b.into(), 31),
            if a { 1.0 } else { 0.0 },
        )
    }
}

impl fmt::Debug for Bgra5551 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bgra5551")
            .field(&format_args!("{:#06x}", self.packed))
            .finish()
    }
}

impl fmt::Display for Bgra5551 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ([r, g, b], a) = self.to_parts();
        write!(f, "Bgra5551({r}, {g}, {b}, {})", u8::from(a))
    }
}
