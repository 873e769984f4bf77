//! Whole-catalog checks: every format honours the same contract.

use pxpack_core::{
    Abgr32, AnyPixel, Argb32, Bgra32, Bgra5551, HalfSingle, HalfVector2, HalfVector4, L8, L16,
    La16, La32, PackedValue, Pixel, PixelFormat, Rgba32, Rgba64, Vector4,
};

macro_rules! for_each_format {
    ($mac:ident) => {
        $mac!(HalfSingle);
        $mac!(HalfVector2);
        $mac!(HalfVector4);
        $mac!(Rgba32);
        $mac!(Bgra32);
        $mac!(Argb32);
        $mac!(Abgr32);
        $mac!(L8);
        $mac!(L16);
        $mac!(La16);
        $mac!(La32);
        $mac!(Rgba64);
        $mac!(Bgra5551);
    };
}

/// A few scaled vectors covering corners, mid-gray and out-of-range input.
const PROBES: [Vector4; 6] = [
    Vector4::ZERO,
    Vector4::ONE,
    Vector4::new(0.5, 0.5, 0.5, 0.5),
    Vector4::new(0.1, 0.7, 0.3, 0.9),
    Vector4::new(1.0, 0.0, 1.0, 0.0),
    Vector4::new(-4.0, 8.0, 0.25, 2.0),
];

#[test]
fn tags_and_type_info_agree() {
    fn check<P: Pixel>() {
        let info = P::FORMAT.type_info();
        assert_eq!(info, P::TYPE_INFO);
        assert_eq!(info.bits_per_pixel, <P::Packed as PackedValue>::BITS);
        assert_eq!(P::FORMAT.bytes(), std::mem::size_of::<P>());
    }
    macro_rules! run {
        ($t:ident) => {
            check::<$t>();
        };
    }
    for_each_format!(run);
}

#[test]
fn default_is_packed_zero() {
    fn check<P: Pixel>() {
        assert_eq!(P::default(), P::from_packed(<P::Packed>::default()));
    }
    macro_rules! run {
        ($t:ident) => {
            check::<$t>();
        };
    }
    for_each_format!(run);
}

#[test]
fn scaled_output_stays_in_unit_box() {
    fn check<P: Pixel>() {
        // The last probe is out of range and half formats do not clamp.
        for probe in &PROBES[..5] {
            let v = P::from_scaled_vector4(*probe).to_scaled_vector4();
            for c in v.to_array() {
                assert!((0.0..=1.0).contains(&c), "{} produced {c}", P::FORMAT);
            }
        }
    }
    macro_rules! run {
        ($t:ident) => {
            check::<$t>();
        };
    }
    for_each_format!(run);
}

#[test]
fn repacking_scaled_output_is_stable() {
    fn check<P: Pixel>() {
        for probe in PROBES {
            let px = P::from_scaled_vector4(probe);
            assert_eq!(
                P::from_scaled_vector4(px.to_scaled_vector4()),
                px,
                "{} not stable for {probe}",
                P::FORMAT
            );
        }
    }
    macro_rules! run {
        ($t:ident) => {
            check::<$t>();
        };
    }
    for_each_format!(run);
}

#[test]
fn bytes_round_trip() {
    fn check<P: Pixel>() {
        let px = P::from_scaled_vector4(Vector4::new(0.1, 0.7, 0.3, 0.9));
        let mut buf = [0u8; 8];
        let n = P::FORMAT.bytes();
        px.write_le_bytes(&mut buf[..n]).unwrap();
        assert_eq!(P::from_le_bytes(&buf[..n]).unwrap(), px);
        assert!(P::from_le_bytes(&buf[..n - 1]).is_err());
    }
    macro_rules! run {
        ($t:ident) => {
            check::<$t>();
        };
    }
    for_each_format!(run);
}

#[test]
fn dynamic_conversion_matches_scaled_bridge() {
    fn check<A: Pixel>()
    where
        AnyPixel: From<A>,
    {
        for probe in PROBES {
            let a = A::from_scaled_vector4(probe);
            for target in PixelFormat::ALL {
                let actual = AnyPixel::from(a).convert(target);
                assert_eq!(actual.format(), target);
                if target == A::FORMAT {
                    assert_eq!(actual, AnyPixel::from(a));
                } else {
                    let expected = AnyPixel::from_scaled_vector4(target, a.to_scaled_vector4());
                    assert_eq!(actual, expected, "{} -> {target}", A::FORMAT);
                }
            }
        }
    }
    macro_rules! run {
        ($t:ident) => {
            check::<$t>();
        };
    }
    for_each_format!(run);
}

#[test]
fn dynamic_conversion_matches_static() {
    let src = HalfVector2::new(0.3, -0.7);
    assert_eq!(
        AnyPixel::from(src).convert(PixelFormat::Rgba32),
        AnyPixel::Rgba32(src.to_pixel())
    );
    assert_eq!(
        AnyPixel::from(src).convert(PixelFormat::La32),
        AnyPixel::La32(src.to_pixel())
    );
    let gray = L16::new(40000);
    assert_eq!(
        AnyPixel::from(gray).convert(PixelFormat::HalfVector4),
        AnyPixel::HalfVector4(HalfVector4::from_pixel(gray))
    );
}

#[test]
fn packed_u64_round_trip() {
    for fmt in PixelFormat::ALL {
        let px = AnyPixel::from_scaled_vector4(fmt, Vector4::new(0.2, 0.4, 0.6, 0.8));
        let raw = px.packed_u64();
        assert_eq!(AnyPixel::from_packed_u64(fmt, raw).unwrap(), px);
        if fmt.bits() < 64 {
            assert!(AnyPixel::from_packed_u64(fmt, 1u64 << fmt.bits()).is_err());
        }
    }
}
