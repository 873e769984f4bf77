//! Storage cells backing packed pixels.
//!
//! Every pixel format stores all of its components in one unsigned integer,
//! its *packed value*. [`PackedValue`] is implemented for the widths used by
//! the catalog (`u8`, `u16`, `u32`, `u64`) and gives the surrounding system a
//! fixed little-endian byte layout for buffer storage.
//!
//! ```
//! use pxpack_core::PackedValue;
//!
//! let mut bytes = [0u8; 4];
//! 0xbc00_3c00u32.write_le(&mut bytes).unwrap();
//! assert_eq!(bytes, [0x00, 0x3c, 0x00, 0xbc]);
//! assert_eq!(u32::read_le(&bytes).unwrap(), 0xbc00_3c00);
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::hash::Hash;

/// Unsigned integer usable as a pixel storage cell.
pub trait PackedValue:
    Copy + Default + Eq + Hash + fmt::Debug + fmt::LowerHex + Send + Sync + bytemuck::Pod + 'static
{
    /// Width in bits.
    const BITS: u32;

    /// Width in bytes.
    const BYTES: usize;

    /// Writes the value little-endian into `out`, which must be exactly
    /// [`BYTES`](PackedValue::BYTES) long.
    fn write_le(self, out: &mut [u8]) -> Result<()>;

    /// Reads a little-endian value from exactly [`BYTES`](PackedValue::BYTES)
    /// bytes.
    fn read_le(bytes: &[u8]) -> Result<Self>;

    /// Widens to `u64`.
    fn to_u64(self) -> u64;

    /// Narrows from `u64`, returning `None` when the value does not fit.
    fn try_from_u64(value: u64) -> Option<Self>;
}

macro_rules! impl_packed_value {
    ($($t:ty),*) => {$(
        impl PackedValue for $t {
            const BITS: u32 = <$t>::BITS;
            const BYTES: usize = std::mem::size_of::<$t>();

            #[inline]
            fn write_le(self, out: &mut [u8]) -> Result<()> {
                if out.len() != Self::BYTES {
                    return Err(Error::byte_length(Self::BYTES, out.len()));
                }
                out.copy_from_slice(&self.to_le_bytes());
                Ok(())
            }

            #[inline]
            fn read_le(bytes: &[u8]) -> Result<Self> {
                let arr: [u8; std::mem::size_of::<$t>()] = bytes
                    .try_into()
                    .map_err(|_| Error::byte_length(Self::BYTES, bytes.len()))?;
                Ok(<$t>::from_le_bytes(arr))
            }

            #[inline]
            fn to_u64(self) -> u64 {
                u64::from(self)
            }

            #[inline]
            fn try_from_u64(value: u64) -> Option<Self> {
                <$t>::try_from(value).ok()
            }
        }
    )*};
}

impl_packed_value!(u8, u16, u32, u64);
