//! Luminance (grayscale) formats, with and without alpha.
//!
//! Packing quantizes R, G and B to the channel width first and then takes the
//! Rec.709 luminance of the quantized values, so a gray input maps to exactly
//! that gray level. Unpacking replicates luminance into X, Y and Z.

use crate::format::PixelFormat;
use crate::pixel::{AlphaRepresentation, Pixel, PixelTypeInfo};
use crate::scale::{luminance_rec709, quantize_unorm, unorm_to_f32};
use crate::Vector4;
use std::fmt;

#[inline]
fn luma(v: Vector4, max: u32) -> u32 {
    luminance_rec709(
        quantize_unorm(v.x, max),
        quantize_unorm(v.y, max),
        quantize_unorm(v.z, max),
    )
    .min(max)
}

#[inline]
fn gray(l: u32, a: u32, max: u32) -> Vector4 {
    let l = unorm_to_f32(l, max);
    Vector4::new(l, l, l, unorm_to_f32(a, max))
}

/// 8-bit luminance.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct L8 {
    packed: u8,
}

impl L8 {
    /// Wraps a luminance level.
    #[inline]
    pub const fn new(l: u8) -> Self {
        Self { packed: l }
    }

    /// Luminance level.
    #[inline]
    pub const fn luminance(self) -> u8 {
        self.packed
    }
}

impl Pixel for L8 {
    type Packed = u8;
    const FORMAT: PixelFormat = PixelFormat::L8;
    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(8, 1, AlphaRepresentation::None);

    #[inline]
    fn from_packed(packed: u8) -> Self {
        Self { packed }
    }

    #[inline]
    fn packed(self) -> u8 {
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
        Self::new(luma(v, 255) as u8)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        gray(self.packed.into(), 255, 255)
    }
}

/// 16-bit luminance.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct L16 {
    packed: u16,
}

impl L16 {
    /// Wraps a luminance level.
    #[inline]
    pub const fn new(l: u16) -> Self {
        Self { packed: l }
    }

    /// Luminance level.
    #[inline]
    pub const fn luminance(self) -> u16 {
        self.packed
    }
}

impl Pixel for L16 {
    type Packed = u16;
    const FORMAT: PixelFormat = PixelFormat::L16;
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
        Self::from_scaled_vector4(v)
    }

    #[inline]
    fn to_vector4(self) -> Vector4 {
        self.to_scaled_vector4()
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::new(luma(v, 65535) as u16)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        gray(self.packed.into(), 65535, 65535)
    }
}

/// 8-bit luminance and alpha; luminance in the low byte.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct La16 {
    packed: u16,
}

impl La16 {
    /// Packs luminance and alpha.
    #[inline]
    pub const fn new(l: u8, a: u8) -> Self {
        Self {
            packed: l as u16 | (a as u16) << 8,
        }
    }

    /// Luminance level.
    #[inline]
    pub const fn luminance(self) -> u8 {
        self.packed as u8
    }

    /// Alpha level.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.packed >> 8) as u8
    }
}

impl Pixel for La16 {
    type Packed = u16;
    const FORMAT: PixelFormat = PixelFormat::La16;
    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(16, 2, AlphaRepresentation::Unassociated);

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
        Self::new(luma(v, 255) as u8, quantize_unorm(v.w, 255) as u8)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        gray(self.luminance().into(), self.alpha().into(), 255)
    }
}

/// 16-bit luminance and alpha; luminance in the low word.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct La32 {
    packed: u32,
}

impl La32 {
    /// Packs luminance and alpha.
    #[inline]
    pub const fn new(l: u16, a: u16) -> Self {
        Self {
            packed: l as u32 | (a as u32) << 16,
        }
    }

    /// Luminance level.
    #[inline]
    pub const fn luminance(self) -> u16 {
        self.packed as u16
    }

    /// Alpha level.
    #[inline]
    pub const fn alpha(self) -> u16 {
        (self.packed >> 16) as u16
    }
}

impl Pixel for La32 {
    type Packed = u32;
    const FORMAT: PixelFormat = PixelFormat::La32;
    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(32, 2, AlphaRepresentation::Unassociated);

    #[inline]
    fn from_packed(packed: u32) -> Self {
        Self { packed }
    }

    #[inline]
    fn packed(self) -> u32 {
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
        Self::new(luma(v, 65535) as u16, quantize_unorm(v.w, 65535) as u16)
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        gray(self.luminance().into(), self.alpha().into(), 65535)
    }
}

macro_rules! impl_fmt {
    ($name:ident, $width:literal, |$px:ident| $display:expr) => {
        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&format_args!("{:#0w$x}", self.packed, w = $width))
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let $px = *self;
                write!(f, "{}({})", stringify!($name), $display)
            }
        }
    };
}

impl_fmt!(L8, 4, |px| px.luminance());
impl_fmt!(L16, 6, |px| px.luminance());
impl_fmt!(La16, 6, |px| format_args!("{}, {}", px.luminance(), px.alpha()));
impl_fmt!(La32, 10, |px| format_args!("{}, {}", px.luminance(), px.alpha()));
