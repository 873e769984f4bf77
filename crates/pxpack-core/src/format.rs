//! Run-time pixel format tags.
//!
//! [`PixelFormat`] names every format in the catalog. Generic code uses the
//! concrete types directly; the tag exists for code that only learns the
//! format at run time (command lines, file headers of the surrounding system).
//!
//! # Usage
//!
//! ```rust
//! use pxpack_core::format::PixelFormat;
//!
//! let fmt: PixelFormat = "half-vector2".parse().unwrap();
//! assert_eq!(fmt, PixelFormat::HalfVector2);
//! assert_eq!(fmt.bits(), 32);
//! ```

use crate::error::Error;
use crate::formats::{
    Abgr32, Argb32, Bgra32, Bgra5551, HalfSingle, HalfVector2, HalfVector4, L8, L16, La16, La32,
    Rgba32, Rgba64,
};
use crate::pixel::{Pixel, PixelTypeInfo};
use std::fmt;
use std::str::FromStr;

/// Pixel format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// One half-float component.
    HalfSingle,
    /// Two half-float components (X low, Y high).
    HalfVector2,
    /// Four half-float components.
    HalfVector4,
    /// 8-bit R, G, B, A.
    Rgba32,
    /// 8-bit B, G, R, A.
    Bgra32,
    /// 8-bit A, R, G, B.
    Argb32,
    /// 8-bit A, B, G, R.
    Abgr32,
    /// 8-bit luminance.
    L8,
    /// 16-bit luminance.
    L16,
    /// 8-bit luminance and alpha.
    La16,
    /// 16-bit luminance and alpha.
    La32,
    /// 16-bit R, G, B, A.
    Rgba64,
    /// 5-bit B, G, R and 1-bit alpha.
    Bgra5551,
}

impl PixelFormat {
    /// Every format in the catalog.
    pub const ALL: [PixelFormat; 13] = [
        Self::HalfSingle,
        Self::HalfVector2,
        Self::HalfVector4,
        Self::Rgba32,
        Self::Bgra32,
        Self::Argb32,
        Self::Abgr32,
        Self::L8,
        Self::L16,
        Self::La16,
        Self::La32,
        Self::Rgba64,
        Self::Bgra5551,
    ];

    /// Format name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::HalfSingle => "HalfSingle",
            Self::HalfVector2 => "HalfVector2",
            Self::HalfVector4 => "HalfVector4",
            Self::Rgba32 => "Rgba32",
            Self::Bgra32 => "Bgra32",
            Self::Argb32 => "Argb32",
            Self::Abgr32 => "Abgr32",
            Self::L8 => "L8",
            Self::L16 => "L16",
            Self::La16 => "La16",
            Self::La32 => "La32",
            Self::Rgba64 => "Rgba64",
            Self::Bgra5551 => "Bgra5551",
        }
    }

    /// Static description of the format.
    pub const fn type_info(&self) -> PixelTypeInfo {
        match self {
            Self::HalfSingle => HalfSingle::TYPE_INFO,
            Self::HalfVector2 => HalfVector2::TYPE_INFO,
            Self::HalfVector4 => HalfVector4::TYPE_INFO,
            Self::Rgba32 => Rgba32::TYPE_INFO,
            Self::Bgra32 => Bgra32::TYPE_INFO,
            Self::Argb32 => Argb32::TYPE_INFO,
            Self::Abgr32 => Abgr32::TYPE_INFO,
            Self::L8 => L8::TYPE_INFO,
            Self::L16 => L16::TYPE_INFO,
            Self::La16 => La16::TYPE_INFO,
            Self::La32 => La32::TYPE_INFO,
            Self::Rgba64 => Rgba64::TYPE_INFO,
            Self::Bgra5551 => Bgra5551::TYPE_INFO,
        }
    }

    /// Width of the storage cell in bits.
    #[inline]
    pub const fn bits(&self) -> u32 {
        self.type_info().bits_per_pixel
    }

    /// Width of the storage cell in bytes.
    #[inline]
    pub const fn bytes(&self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Whether the format stores half-float components.
    #[inline]
    pub const fn is_half(&self) -> bool {
        matches!(self, Self::HalfSingle | Self::HalfVector2 | Self::HalfVector4)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelFormat {
    type Err = Error;

    /// Case-insensitive; `-` and `_` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}
