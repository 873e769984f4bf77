//! Error types for pxpack-core.
//!
//! Every value operation on a pixel is total: packing saturates, decoding a
//! NaN or infinity pattern yields that float, and precision loss is not an
//! error. The variants here only cover the boundary where untrusted input
//! enters the crate: byte buffers, raw integers tagged with a run-time format,
//! and format names.
//!
//! # Usage
//!
//! ```rust
//! use pxpack_core::{Error, PixelFormat};
//!
//! let err = "rgb565".parse::<PixelFormat>().unwrap_err();
//! assert!(matches!(err, Error::UnknownFormat(_)));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the byte / name / run-time tag boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A format name did not match any known pixel format.
    #[error("unknown pixel format: {0}")]
    UnknownFormat(String),

    /// A byte buffer did not have exactly the size of one storage cell.
    #[error("expected {expected} bytes for packed value, got {actual}")]
    ByteLength {
        /// Width of the storage cell in bytes
        expected: usize,
        /// Length of the buffer that was provided
        actual: usize,
    },

    /// A raw integer does not fit the storage cell of the target format.
    #[error("packed value {value:#x} does not fit {bits}-bit format {format}")]
    PackedOverflow {
        /// Target format name
        format: &'static str,
        /// Rejected value
        value: u64,
        /// Width of the storage cell in bits
        bits: u32,
    },
}

impl Error {
    /// Creates an [`Error::ByteLength`] error.
    #[inline]
    pub fn byte_length(expected: usize, actual: usize) -> Self {
        Self::ByteLength { expected, actual }
    }

    /// Returns `true` if the error came from parsing a name.
    #[inline]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::UnknownFormat(_))
    }
}
