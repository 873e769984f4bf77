//! Concrete pixel formats.
//!
//! | Format        | Cell  | Components        | Native range |
//! |---------------|-------|-------------------|--------------|
//! | `HalfSingle`  | `u16` | X                 | signed       |
//! | `HalfVector2` | `u32` | X, Y              | signed       |
//! | `HalfVector4` | `u64` | X, Y, Z, W        | signed       |
//! | `Rgba32`      | `u32` | R, G, B, A (8)    | [0, 1]       |
//! | `Bgra32`      | `u32` | B, G, R, A (8)    | [0, 1]       |
//! | `Argb32`      | `u32` | A, R, G, B (8)    | [0, 1]       |
//! | `Abgr32`      | `u32` | A, B, G, R (8)    | [0, 1]       |
//! | `L8`          | `u8`  | L                 | [0, 1]       |
//! | `L16`         | `u16` | L                 | [0, 1]       |
//! | `La16`        | `u16` | L, A (8)          | [0, 1]       |
//! | `La32`        | `u32` | L, A (16)         | [0, 1]       |
//! | `Rgba64`      | `u64` | R, G, B, A (16)   | [0, 1]       |
//! | `Bgra5551`    | `u16` | B, G, R (5), A (1)| [0, 1]       |

mod bgra5551;
mod half_single;
mod half_vector2;
mod half_vector4;
mod luminance;
mod rgba;

pub use bgra5551::Bgra5551;
pub use half_single::HalfSingle;
pub use half_vector2::HalfVector2;
pub use half_vector4::HalfVector4;
pub use luminance::{L8, L16, La16, La32};
pub use rgba::{Abgr32, Argb32, Bgra32, Rgba32, Rgba64};

use crate::pixel::Pixel;

/// `From<Peer> for Target` via the scaled bridge, for each listed peer.
macro_rules! convert_from_peers {
    ($target:ty: $($peer:ty),* $(,)?) => {$(
        impl From<$peer> for $target {
            #[inline]
            fn from(source: $peer) -> Self {
                <$target>::from_pixel(source)
            }
        }
    )*};
}

convert_from_peers!(HalfVector2:
    HalfSingle, HalfVector4, Rgba32, Bgra32, Argb32, Abgr32,
    L8, L16, La16, La32, Rgba64, Bgra5551,
);

convert_from_peers!(Rgba32:
    HalfSingle, HalfVector2, HalfVector4, Bgra32, Argb32, Abgr32,
    L8, L16, La16, La32, Rgba64, Bgra5551,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector4;

    #[test]
    fn test_from_peers() {
        let hv: HalfVector2 = Rgba32::new(255, 0, 0, 255).into();
        assert_eq!(hv.unpack(), (1.0, -1.0));

        let hv: HalfVector2 = L8::new(255).into();
        assert_eq!(hv.unpack(), (1.0, 1.0));

        let rgba: Rgba32 = HalfVector2::new(-1.0, 1.0).into();
        assert_eq!(rgba.to_array(), [0, 255, 0, 255]);
    }

    #[test]
    fn test_half_vector2_to_half_vector4() {
        let hv4 = HalfVector4::from_pixel(HalfVector2::new(0.5, -0.5));
        // Z = 0 scaled becomes -1 native; W = 1 stays 1.
        assert_eq!(hv4.unpack(), [0.5, -0.5, -1.0, 1.0]);
        assert_eq!(
            HalfVector2::from_pixel(hv4).to_vector4(),
            Vector4::new(0.5, -0.5, 0.0, 1.0)
        );
    }
}
