//! Unsigned normalized RGBA formats.
//!
//! Native and scaled ranges coincide ([0, 1] per component), so both bridges
//! quantize the same way: clamp, multiply by the channel maximum, round.
//! The four 8-bit variants differ only in channel order; the name gives the
//! byte order in memory, lowest address first.

use crate::format::PixelFormat;
use crate::pixel::{AlphaRepresentation, Pixel, PixelTypeInfo};
use crate::scale::{quantize_unorm, unorm_to_f32};
use crate::Vector4;
use std::fmt;

macro_rules! rgba8_format {
    (
        $(#[$meta:meta])*
        $name:ident, shifts: [$rs:expr, $gs:expr, $bs:expr, $as_:expr]
    ) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
        pub struct $name {
            packed: u32,
        }

        impl $name {
            /// Packs four 8-bit channels.
            #[inline]
            pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
                Self {
                    packed: (r as u32) << $rs
                        | (g as u32) << $gs
                        | (b as u32) << $bs
                        | (a as u32) << $as_,
                }
            }

            /// Channels in R, G, B, A order.
            #[inline]
            pub const fn to_array(self) -> [u8; 4] {
                [
                    (self.packed >> $rs) as u8,
                    (self.packed >> $gs) as u8,
                    (self.packed >> $bs) as u8,
                    (self.packed >> $as_) as u8,
                ]
            }
        }

        impl Pixel for $name {
            type Packed = u32;
            const FORMAT: PixelFormat = PixelFormat::$name;
            const TYPE_INFO: PixelTypeInfo =
                PixelTypeInfo::new(32, 4, AlphaRepresentation::Unassociated);

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
                let q = |c: f32| quantize_unorm(c, 255) as u8;
                Self::new(q(v.x), q(v.y), q(v.z), q(v.w))
            }

            #[inline]
            fn to_scaled_vector4(self) -> Vector4 {
                let [r, g, b, a] = self.to_array();
                Vector4::new(
                    unorm_to_f32(r.into(), 255),
                    unorm_to_f32(g.into(), 255),
                    unorm_to_f32(b.into(), 255),
                    unorm_to_f32(a.into(), 255),
                )
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&format_args!("{:#010x}", self.packed))
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let [r, g, b, a] = self.to_array();
                write!(f, "{}({}, {}, {}, {})", stringify!($name), r, g, b, a)
            }
        }
    };
}

rgba8_format!(
    /// 8-bit RGBA, red in the low byte.
    Rgba32, shifts: [0, 8, 16, 24]
);

rgba8_format!(
    /// 8-bit BGRA, blue in the low byte.
    Bgra32, shifts: [16, 8, 0, 24]
);

rgba8_format!(
    /// 8-bit ARGB, alpha in the low byte.
    Argb32, shifts: [8, 16, 24, 0]
);

rgba8_format!(
    /// 8-bit ABGR, alpha in the low byte.
    Abgr32, shifts: [24, 16, 8, 0]
);

/// 16-bit RGBA, red in the low word.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba64 {
    packed: u64,
}

impl Rgba64 {
    /// Packs four 16-bit channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self {
            packed: r as u64 | (g as u64) << 16 | (b as u64) << 32 | (a as u64) << 48,
        }
    }

    /// Channels in R, G, B, A order.
    #[inline]
    pub const fn to_array(self) -> [u16; 4] {
        [
            self.packed as u16,
            (self.packed >> 16) as u16,
            (self.packed >> 32) as u16,
            (self.packed >> 48) as u16,
        ]
    }
}

impl Pixel for Rgba64 {
    type Packed = u64;
    const FORMAT: PixelFormat = PixelFormat::Rgba64;
    const TYPE_INFO: PixelTypeInfo = PixelTypeInfo::new(64, 4, AlphaRepresentation::Unassociated);

    #[inline]
    fn from_packed(packed: u64) -> Self {
        Self { packed }
    }

    #[inline]
    fn packed(self) -> u64 {
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
        let q = |c: f32| quantize_unorm(c, 65535) as u16;
        Self::new(q(v.x), q(v.y), q(v.z), q(v.w))
    }

    #[inline]
    fn to_scaled_vector4(self) -> Vector4 {
        let [r, g, b, a] = self.to_array();
        Vector4::new(
            unorm_to_f32(r.into(), 65535),
            unorm_to_f32(g.into(), 65535),
            unorm_to_f32(b.into(), 65535),
            unorm_to_f32(a.into(), 65535),
        )
    }
}

impl fmt::Debug for Rgba64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rgba64")
            .field(&format_args!("{:#018x}", self.packed))
            .finish()
    }
}

impl fmt::Display for Rgba64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_array();
        write!(f, "Rgba64({r}, {g}, {b}, {a})")
    }
}
