//! Pixel values whose format is chosen at run time.
//!
//! [`AnyPixel`] is a closed enum with one variant per catalog format. Each
//! operation matches once on the tag and then calls the statically typed
//! implementation, so conversions still go through the scaled bridge of the
//! concrete types.
//!
//! ```
//! use pxpack_core::prelude::*;
//!
//! let px = AnyPixel::from_packed_u64(PixelFormat::HalfVector2, 0xbc00_3c00).unwrap();
//! let rgba = px.convert(PixelFormat::Rgba32);
//! assert_eq!(rgba, AnyPixel::Rgba32(Rgba32::new(255, 0, 0, 255)));
//! ```

use crate::error::{Error, Result};
use crate::format::PixelFormat;
use crate::formats::{
    Abgr32, Argb32, Bgra32, Bgra5551, HalfSingle, HalfVector2, HalfVector4, L8, L16, La16, La32,
    Rgba32, Rgba64,
};
use crate::packed::PackedValue;
use crate::pixel::Pixel;
use crate::Vector4;
use std::fmt;
use tracing::trace;

macro_rules! any_pixel {
    ($($name:ident),* $(,)?) => {
        /// A pixel of any catalog format.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum AnyPixel {
            $(
                #[allow(missing_docs)]
                $name($name),
            )*
        }

        impl AnyPixel {
            /// Format tag of the wrapped pixel.
            #[inline]
            pub fn format(&self) -> PixelFormat {
                match self {
                    $(Self::$name(_) => PixelFormat::$name,)*
                }
            }

            /// Packed value widened to `u64`.
            #[inline]
            pub fn packed_u64(&self) -> u64 {
                match self {
                    $(Self::$name(px) => px.packed().to_u64(),)*
                }
            }

            /// Wraps a raw packed value of the given format.
            ///
            /// Fails if `value` is wider than the format's storage cell.
            pub fn from_packed_u64(format: PixelFormat, value: u64) -> Result<Self> {
                match format {
                    $(PixelFormat::$name => {
                        let packed = <<$name as Pixel>::Packed as PackedValue>::try_from_u64(value).ok_or(
                            Error::PackedOverflow {
                                format: format.name(),
                                value,
                                bits: format.bits(),
                            },
                        )?;
                        Ok(Self::$name($name::from_packed(packed)))
                    })*
                }
            }

            /// Reads a pixel of the given format from its little-endian bytes.
            pub fn from_le_bytes(format: PixelFormat, bytes: &[u8]) -> Result<Self> {
                match format {
                    $(PixelFormat::$name => $name::from_le_bytes(bytes).map(Self::$name),)*
                }
            }

            /// Writes the packed value little-endian into `out`.
            pub fn write_le_bytes(&self, out: &mut [u8]) -> Result<()> {
                match self {
                    $(Self::$name(px) => px.write_le_bytes(out),)*
                }
            }

            /// Packs a native-range vector into the given format.
            pub fn from_vector4(format: PixelFormat, v: Vector4) -> Self {
                match format {
                    $(PixelFormat::$name => Self::$name($name::from_vector4(v)),)*
                }
            }

            /// Packs a scaled [0, 1] vector into the given format.
            pub fn from_scaled_vector4(format: PixelFormat, v: Vector4) -> Self {
                match format {
                    $(PixelFormat::$name => Self::$name($name::from_scaled_vector4(v)),)*
                }
            }

            /// Unpacks to the native-range vector.
            pub fn to_vector4(&self) -> Vector4 {
                match self {
                    $(Self::$name(px) => px.to_vector4(),)*
                }
            }

            /// Unpacks to the scaled [0, 1] vector.
            pub fn to_scaled_vector4(&self) -> Vector4 {
                match self {
                    $(Self::$name(px) => px.to_scaled_vector4(),)*
                }
            }
        }

        impl fmt::Display for AnyPixel {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$name(px) => fmt::Display::fmt(px, f),)*
                }
            }
        }

        $(
            impl From<$name> for AnyPixel {
                #[inline]
                fn from(px: $name) -> Self {
                    Self::$name(px)
                }
            }
        )*
    };
}

any_pixel!(
    HalfSingle,
    HalfVector2,
    HalfVector4,
    Rgba32,
    Bgra32,
    Argb32,
    Abgr32,
    L8,
    L16,
    La16,
    La32,
    Rgba64,
    Bgra5551,
);

impl AnyPixel {
    /// Converts to another format through the scaled bridge.
    ///
    /// Converting to the pixel's own format returns it unchanged.
    pub fn convert(&self, target: PixelFormat) -> Self {
        if self.format() == target {
            return *self;
        }
        let scaled = self.to_scaled_vector4();
        trace!(from = %self.format(), to = %target, ?scaled, "convert via scaled vector");
        Self::from_scaled_vector4(target, scaled)
    }
}
