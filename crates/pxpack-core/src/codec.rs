//! Half-precision codec glue.
//!
//! Thin bit-level wrappers over [`half::f16`]. Encoding rounds to nearest with
//! ties to even, saturates to signed infinity on overflow, keeps the sign of
//! zero and keeps NaN a NaN. Decoding is exact: every binary16 value has an
//! exact `f32` counterpart.
//!
//! # Example
//!
//! ```
//! use pxpack_core::codec::{decode_half, encode_half};
//!
//! assert_eq!(encode_half(1.0), 0x3c00);
//! assert_eq!(decode_half(0xbc00), -1.0);
//! ```

use half::f16;

/// Largest finite binary16 value.
pub const HALF_MAX: f32 = 65504.0;

/// Encodes an `f32` as a binary16 bit pattern.
#[inline]
pub fn encode_half(value: f32) -> u16 {
    f16::from_f32(value).to_bits()
}

/// Decodes a binary16 bit pattern to `f32`.
#[inline]
pub fn decode_half(bits: u16) -> f32 {
    f16::from_bits(bits).to_f32()
}

/// Quantizes `value` to the nearest binary16 value, returned as `f32`.
#[inline]
pub fn round_half(value: f32) -> f32 {
    decode_half(encode_half(value))
}
