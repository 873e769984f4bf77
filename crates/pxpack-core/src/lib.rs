//! # pxpack-core
//!
//! Packed pixel formats that all convert through one canonical exchange
//! vector.
//!
//! Every format in this crate is a small `Copy` newtype over a single unsigned
//! integer (its *packed value*) and implements [`Pixel`]:
//!
//! - [`HalfVector2`] - two half-floats in 32 bits, the reference format
//! - [`HalfSingle`], [`HalfVector4`] - one and four half-floats
//! - [`Rgba32`], [`Bgra32`], [`Argb32`], [`Abgr32`], [`Rgba64`] - unsigned
//!   normalized RGBA
//! - [`L8`], [`L16`], [`La16`], [`La32`] - luminance, with or without alpha
//! - [`Bgra5551`] - 5-5-5-1 packed color
//!
//! ## Conversion Model
//!
//! Formats never convert to each other directly. Each one only knows how to go
//! to and from a [`Vector4`] (a `glam::Vec4`), and any A → B conversion is
//! `B::from_scaled_vector4(a.to_scaled_vector4())`:
//!
//! ```text
//!   Rgba32 ──┐                ┌──> HalfVector2
//!   L8 ──────┼──> Vec4 [0,1] ─┼──> Bgra5551
//!   La32 ────┘                └──> ...
//! ```
//!
//! Adding a format therefore costs two functions, not one per existing format.
//!
//! ```
//! use pxpack_core::prelude::*;
//!
//! let px = HalfVector2::new(0.25, -0.5);
//! let gray: L8 = px.to_pixel();
//! let back = HalfVector2::from_pixel(gray);
//! assert_eq!(back.to_vector4().w, 1.0);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! codec    half-float bit codec (half crate)
//! packed   storage cells and their byte layout
//! scale    signed <-> scaled adapters, unorm quantizers
//! pixel    the Pixel trait
//! formats  concrete formats
//! format   run-time format tags
//! any      run-time tagged pixel values
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod any;
pub mod codec;
pub mod error;
pub mod format;
pub mod formats;
pub mod packed;
pub mod pixel;
pub mod scale;

/// The canonical exchange vector: X, Y, Z, W.
pub type Vector4 = glam::Vec4;

// Re-exports for convenience
pub use any::AnyPixel;
pub use codec::{decode_half, encode_half};
pub use error::{Error, Result};
pub use format::PixelFormat;
pub use formats::*;
pub use packed::PackedValue;
pub use pixel::{AlphaRepresentation, Pixel, PixelTypeInfo};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use pxpack_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::any::AnyPixel;
    pub use crate::error::{Error, Result};
    pub use crate::format::PixelFormat;
    pub use crate::formats::{
        Abgr32, Argb32, Bgra32, Bgra5551, HalfSingle, HalfVector2, HalfVector4, L8, L16, La16,
        La32, Rgba32, Rgba64,
    };
    pub use crate::packed::PackedValue;
    pub use crate::pixel::{AlphaRepresentation, Pixel, PixelTypeInfo};
    pub use crate::Vector4;
}
