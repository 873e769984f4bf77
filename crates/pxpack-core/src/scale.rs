//! Scaling contract between native ranges and the canonical scaled box.
//!
//! The scaled form of the canonical vector keeps every component in [0, 1].
//! Formats whose native range is signed ([-1, 1] by convention) map through
//! [`unit_to_signed`] on the way in and [`signed_to_unit`] on the way out.
//! Unsigned normalized integer formats quantize with [`quantize_unorm`] and
//! expand with [`unorm_to_f32`].
//!
//! ```
//! use pxpack_core::scale::{signed_to_unit, unit_to_signed};
//! use pxpack_core::Vector4;
//!
//! let v = Vector4::new(0.0, 0.5, 1.0, 0.25);
//! assert_eq!(unit_to_signed(v), Vector4::new(-1.0, 0.0, 1.0, -0.5));
//! assert_eq!(signed_to_unit(unit_to_signed(v)), v);
//! ```

use glam::Vec4;

// ============================================================================
// Rec.709 Luminance Constants
// ============================================================================

/// Rec.709 luminance coefficient for red channel.
pub const REC709_LUMA_R: f32 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f32 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f32 = 0.0722;

/// Maps a signed [-1, 1] component to the scaled [0, 1] range.
#[inline]
pub fn signed_to_unit_f32(v: f32) -> f32 {
    (v + 1.0) / 2.0
}

/// Maps a scaled [0, 1] component to the signed [-1, 1] range.
#[inline]
pub fn unit_to_signed_f32(v: f32) -> f32 {
    v * 2.0 - 1.0
}

/// Component-wise [`signed_to_unit_f32`].
#[inline]
pub fn signed_to_unit(v: Vec4) -> Vec4 {
    (v + Vec4::ONE) / 2.0
}

/// Component-wise [`unit_to_signed_f32`].
#[inline]
pub fn unit_to_signed(v: Vec4) -> Vec4 {
    v * 2.0 - Vec4::ONE
}

/// Quantizes a [0, 1] component to an integer in `[0, max]`.
///
/// Input is clamped first. Halfway values round away from zero. NaN maps to 0.
#[inline]
pub fn quantize_unorm(v: f32, max: u32) -> u32 {
    // `as` saturates and sends NaN to 0.
    (v.clamp(0.0, 1.0) * max as f32).round() as u32
}

/// Expands an integer in `[0, max]` to a [0, 1] component.
#[inline]
pub fn unorm_to_f32(q: u32, max: u32) -> f32 {
    q as f32 / max as f32
}

/// Rec.709 luminance of integer channels, rounded to the nearest integer.
///
/// `Y = 0.2126*R + 0.7152*G + 0.0722*B`
#[inline]
pub fn luminance_rec709(r: u32, g: u32, b: u32) -> u32 {
    (r as f32 * REC709_LUMA_R + g as f32 * REC709_LUMA_G + b as f32 * REC709_LUMA_B + 0.5) as u32
}
