//! Two half-float components packed in 32 bits.
//!
//! # Layout
//!
//! ```text
//!  31            16 15             0
//! +----------------+----------------+
//! |   Y (binary16) |   X (binary16) |
//! +----------------+----------------+
//! ```
//!
//! Stored little-endian that is `[x_lo, x_hi, y_lo, y_hi]`.
//!
//! # Ranges
//!
//! The native range is signed, nominally [-1, 1] (any half value is accepted).
//! The scaled bridge maps it to [0, 1] with `(c + 1) / 2` and back with
//! `c * 2 - 1`. There is no Z or W: unpacking reports Z = 0 and W = 1.

use crate::codec::{decode_half, encode_half};
use crate::format::PixelFormat;
use crate::pixel::{fmt_component, AlphaRepresentation, Pixel, PixelTypeInfo};
use crate::scale::{signed_to_unit_f32, unit_to_signed_f32};
use crate::Vector4;
use glam::Vec2;
use std::fmt;

/// Packed pair of half-precision floats.
///
/// The packed value is the only state; decoding happens on every read.
/// Equality is bit-level, so `+0.0` and `-0.0`, or two NaNs with different
/// payloads, compare unequal.
///
/// # Example
///
/// ```
/// use pxpack_core::prelude::*;
///
/// let px = HalfVector2::new(1.0, -1.0);
/// assert_eq!(px.packed(), 0xbc00_3c00);
/// assert_eq!(px.unpack(), (1.0, -1.0));
/// assert_eq!(px.to_scaled_vector4(), Vector4::new(1.0, 0.0, 0.0, 1.0));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HalfVector2 {
    packed: u32,
}

impl HalfVector2 {
    /// Packs two floats. Values outside the half range saturate to infinity.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            packed: pack(x, y),
        }
    }

    /// Packs the X and Y of a two-component vector.
    #[inline]
    pub fn from_vector2(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Decodes both components.
    #[inline]
    pub fn unpack(self) -> (f32, f32) {
        (
            decode_half(self.packed as u16),
            decode_half((self.packed >> 16) as u16),
        )
    }

    /// Decodes both components into a vector.
    #[inline]
    pub fn to_vector2(self) -> Vec2 {
        let (x, y) = self.unpack();
        Vec2::new(x, y)
    }

    /// Raw binary16 pattern of X.
    #[inline]
    pub const fn x_bits(self) -> u16 {
        self.packed as u16
    }

    /// Raw binary16 pattern of Y.
    #[inline]
    pub const fn y_bits(self) -> u16 {
        (self.packed >> 16) as u16
    }
}

#[inline]
fn pack(x: f32, y: f32) -> u32 {
    u32::from(encode_half(x)) | (u32::from(encode_half(y)) << 16)
}

impl Pixel for HalfVector2 {
    type Packed = u32;
    const FORMAT: PixelFormat = PixelFormat::HalfVector2;
    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(32, 2, AlphaRepresentation::None);

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
        Self::new(v.x, v.y)
    }

    #[inline]
    fn to_vector4(self) -> Vector4 {
        let (x, y) = self.unpack();
        Vector4::new(x, y, 0.0, 1.0)
    }

    #[inline]
    fn from_scaled_vector4(v: Vector4) -> Self {
        Self::new(unit_to_signed_f32(v.x), unit_to_signed_f32(v.y))
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        let (x, y) = self.unpack();
        Vector4::new(signed_to_unit_f32(x), signed_to_unit_f32(y), 0.0, 1.0)
    }
}

impl From<Vec2> for HalfVector2 {
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::from_vector2(v)
    }
}

impl From<HalfVector2> for Vec2 {
    #[inline]
    fn from(px: HalfVector2) -> Self {
        px.to_vector2()
    }
}

impl fmt::Debug for HalfVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HalfVector2")
            .field(&format_args!("{:#010x}", self.packed))
            .finish()
    }
}

impl fmt::Display for HalfVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.unpack();
        f.write_str("HalfVector2(")?;
        fmt_component(f, x)?;
        f.write_str(", ")?;
        fmt_component(f, y)?;
        f.write_str(")")
    }
}
