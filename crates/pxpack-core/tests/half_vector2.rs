//! HalfVector2 conversion contract.
//!
//! Properties are checked with proptest over the whole finite half range;
//! the concrete scenarios pin exact bit patterns.

use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use pxpack_core::codec::{encode_half, round_half, HALF_MAX};
use pxpack_core::{
    Abgr32, Argb32, Bgra32, Bgra5551, HalfSingle, HalfVector2, HalfVector4, Pixel, PixelFormat,
    Rgba32, Rgba64, Vector4,
};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Half rounding error bound: half an ulp relative, plus the subnormal step.
fn half_bound(v: f32) -> f32 {
    v.abs() * 2.0f32.powi(-11) + 2.0f32.powi(-24)
}

fn hash_of<T: Hash>(v: &T) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn exact_components_round_trip() {
    let px = HalfVector2::new(1.0, -1.0);
    assert_eq!(px.packed() & 0xffff, u32::from(encode_half(1.0)));
    assert_eq!(px.packed() >> 16, u32::from(encode_half(-1.0)));
    assert_eq!(px.unpack(), (1.0, -1.0));
}

#[test]
fn inexact_components_stay_close() {
    let (x, y) = HalfVector2::new(0.1, 0.1).unpack();
    assert_ne!((x, y), (0.1, 0.1));
    assert_abs_diff_eq!(x, 0.1, epsilon = half_bound(0.1));
    assert_abs_diff_eq!(y, 0.1, epsilon = half_bound(0.1));
}

#[test]
fn scaled_zero_maps_to_negative_one() {
    let px = HalfVector2::from_scaled_vector4(Vector4::ZERO);
    assert_eq!(px.to_vector4(), Vector4::new(-1.0, -1.0, 0.0, 1.0));
    assert_eq!(px.to_scaled_vector4(), Vector4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn rgba32_round_trip_is_stable() {
    let start = HalfVector2::new(0.3, -0.7);

    let once = HalfVector2::from_pixel(start.to_pixel::<Rgba32>());
    let twice = HalfVector2::from_pixel(once.to_pixel::<Rgba32>());

    // 8-bit quantization is lossy...
    assert_ne!(once, start);
    let (x, y) = once.unpack();
    assert_abs_diff_eq!(x, 0.3, epsilon = 2.0 / 255.0);
    assert_abs_diff_eq!(y, -0.7, epsilon = 2.0 / 255.0);
    // ...but settles after one trip.
    assert_eq!(twice, once);
    assert_eq!(once.to_pixel::<Rgba32>(), start.to_pixel::<Rgba32>());
}

#[test]
fn storage_cell_layout() {
    let px = HalfVector2::new(0.5, 2.0);
    let mut bytes = [0u8; 4];
    px.write_le_bytes(&mut bytes).unwrap();
    let x = encode_half(0.5).to_le_bytes();
    let y = encode_half(2.0).to_le_bytes();
    assert_eq!(bytes, [x[0], x[1], y[0], y[1]]);
    assert_eq!(HalfVector2::TYPE_INFO.bits_per_pixel, 32);
    assert_eq!(PixelFormat::HalfVector2.bytes(), 4);
}

#[test]
fn non_finite_values_are_total() {
    let px = HalfVector2::new(f32::NAN, f32::INFINITY);
    let (x, y) = px.unpack();
    assert!(x.is_nan());
    assert_eq!(y, f32::INFINITY);
    let scaled = px.to_scaled_vector4();
    assert!(scaled.x.is_nan());
    assert_eq!(scaled.y, f32::INFINITY);
    assert_eq!((scaled.z, scaled.w), (0.0, 1.0));
}

// Luminance formats are left out: they drop the blue channel on the way back,
// so every trip through them darkens the pixel again.
#[test]
fn every_peer_round_trip_is_stable() {
    fn check<P: Pixel>() {
        let start = HalfVector2::new(0.62, -0.13);
        let once = HalfVector2::from_pixel(start.to_pixel::<P>());
        let twice = HalfVector2::from_pixel(once.to_pixel::<P>());
        assert_eq!(twice, once, "unstable through {}", P::FORMAT);
    }

    check::<HalfSingle>();
    check::<HalfVector4>();
    check::<Rgba32>();
    check::<Bgra32>();
    check::<Argb32>();
    check::<Abgr32>();
    check::<Rgba64>();
    check::<Bgra5551>();
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_round_trip_bound(x in -HALF_MAX..=HALF_MAX, y in -HALF_MAX..=HALF_MAX) {
        let (ux, uy) = HalfVector2::new(x, y).unpack();
        prop_assert!((ux - x).abs() <= half_bound(x));
        prop_assert!((uy - y).abs() <= half_bound(y));
    }

    #[test]
    fn prop_repack_is_idempotent(x in -HALF_MAX..=HALF_MAX, y in -HALF_MAX..=HALF_MAX) {
        let first = HalfVector2::new(x, y);
        let (ux, uy) = first.unpack();
        prop_assert_eq!(HalfVector2::new(ux, uy), first);
    }

    #[test]
    fn prop_equality_is_bitwise(a in any::<u32>(), b in any::<u32>()) {
        let pa = HalfVector2::from_packed(a);
        let pb = HalfVector2::from_packed(b);
        prop_assert_eq!(pa == pb, a == b);
        prop_assert_eq!(pa, pa);
        if pa == pb {
            prop_assert_eq!(hash_of(&pa), hash_of(&pb));
        }
        prop_assert_eq!(hash_of(&pa), hash_of(&HalfVector2::from_packed(a)));
    }

    #[test]
    fn prop_scaled_bridge_inverse(sx in 0.0f32..=1.0, sy in 0.0f32..=1.0, z in any::<f32>(), w in any::<f32>()) {
        let out = HalfVector2::from_scaled_vector4(Vector4::new(sx, sy, z, w)).to_scaled_vector4();
        prop_assert!((out.x - sx).abs() <= 2.0f32.powi(-12));
        prop_assert!((out.y - sy).abs() <= 2.0f32.powi(-12));
        prop_assert_eq!((out.z, out.w), (0.0, 1.0));
    }

    #[test]
    fn prop_native_maps_to_scaled(x in -1.0f32..=1.0, y in -1.0f32..=1.0) {
        let out = HalfVector2::from_vector4(Vector4::new(x, y, 0.0, 0.0)).to_scaled_vector4();
        prop_assert!((out.x - (x + 1.0) / 2.0).abs() <= 2.0f32.powi(-12));
        prop_assert!((out.y - (y + 1.0) / 2.0).abs() <= 2.0f32.powi(-12));
    }

    #[test]
    fn prop_native_bridge_single_rounding(x in any::<f32>(), y in any::<f32>(), z in any::<f32>(), w in any::<f32>()) {
        prop_assume!(x.is_finite() && y.is_finite());
        let out = HalfVector2::from_vector4(Vector4::new(x, y, z, w)).to_vector4();
        prop_assert_eq!(out.x.to_bits(), round_half(x).to_bits());
        prop_assert_eq!(out.y.to_bits(), round_half(y).to_bits());
        prop_assert_eq!((out.z, out.w), (0.0, 1.0));
    }

    #[test]
    fn prop_defaults_for_any_bits(bits in any::<u32>()) {
        let px = HalfVector2::from_packed(bits);
        let native = px.to_vector4();
        let scaled = px.to_scaled_vector4();
        prop_assert_eq!((native.z, native.w), (0.0, 1.0));
        prop_assert_eq!((scaled.z, scaled.w), (0.0, 1.0));
    }

    #[test]
    fn prop_rgba32_trip_settles(x in -1.0f32..=1.0, y in -1.0f32..=1.0) {
        let once = HalfVector2::from_pixel(HalfVector2::new(x, y).to_pixel::<Rgba32>());
        let twice = HalfVector2::from_pixel(once.to_pixel::<Rgba32>());
        prop_assert_eq!(twice, once);
    }
}
