// Tests for interpolation tracks and easing curves.

use glam::Vec3;
use lustre_core::{AnimError, Ease, Srgb, Track, TrackValue};

fn scalar_track(a: f32, b: f32, ease: Ease) -> Track {
    Track::new("t", TrackValue::Scalar(a), TrackValue::Scalar(b), ease).unwrap()
}

#[test]
fn ease_endpoints_are_exact_for_every_curve() {
    let curves = [
        Ease::Linear,
        Ease::PowerIn(1),
        Ease::PowerOut(4),
        Ease::PowerInOut(4),
        Ease::ExpoOut,
    ];
    for ease in curves {
        assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
        assert_eq!(ease.apply(1.0), 1.0, "{:?}", ease);
        // out-of-range input clamps
        assert_eq!(ease.apply(-0.5), 0.0, "{:?}", ease);
        assert_eq!(ease.apply(1.5), 1.0, "{:?}", ease);
    }
}

#[test]
fn ease_curves_are_monotonic() {
    let curves = [
        Ease::Linear,
        Ease::PowerIn(3),
        Ease::PowerOut(3),
        Ease::PowerInOut(4),
        Ease::ExpoOut,
    ];
    for ease in curves {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let next = ease.apply(i as f32 / 100.0);
            assert!(next >= prev, "{:?} decreased at step {}", ease, i);
            prev = next;
        }
    }
}

#[test]
fn scalar_update_matches_lerp_formula() {
    for ease in [Ease::Linear, Ease::PowerInOut(4)] {
        let track = scalar_track(2.0, 10.0, ease);
        for i in 0..=20 {
            let p = i as f32 / 20.0;
            let expected = 2.0 + (10.0 - 2.0) * ease.apply(p);
            match track.update(p) {
                TrackValue::Scalar(v) => assert!((v - expected).abs() < 1e-6),
                other => panic!("unexpected value {:?}", other),
            }
        }
    }
}

#[test]
fn update_is_exact_at_endpoints() {
    let track = scalar_track(-3.25, 17.5, Ease::PowerOut(4));
    assert_eq!(track.update(0.0), TrackValue::Scalar(-3.25));
    assert_eq!(track.update(1.0), TrackValue::Scalar(17.5));
    // clamped outside the window too
    assert_eq!(track.update(-2.0), TrackValue::Scalar(-3.25));
    assert_eq!(track.update(3.0), TrackValue::Scalar(17.5));
}

#[test]
fn vector_update_interpolates_component_wise() {
    let track = Track::new(
        "cam",
        TrackValue::Vector(Vec3::new(3.0, -0.8, 1.2)),
        TrackValue::Vector(Vec3::new(1.28, -1.7, 5.86)),
        Ease::Linear,
    )
    .unwrap();
    match track.update(0.5) {
        TrackValue::Vector(v) => {
            assert!((v.x - 2.14).abs() < 1e-4);
            assert!((v.y - -1.25).abs() < 1e-4);
            assert!((v.z - 3.53).abs() < 1e-4);
        }
        other => panic!("unexpected value {:?}", other),
    }
}

#[test]
fn mismatched_endpoint_kinds_fail_at_construction() {
    let err = Track::new(
        "bad",
        TrackValue::Scalar(0.0),
        TrackValue::Vector(Vec3::ZERO),
        Ease::Linear,
    )
    .unwrap_err();
    assert!(matches!(err, AnimError::KindMismatch { id: "bad", .. }));
}

#[test]
fn override_wins_until_cleared() {
    let custom = Srgb::hex(0xF70DB1);
    let mut track = Track::new(
        "gems",
        TrackValue::Color(Srgb::WHITE),
        TrackValue::Color(Srgb::hex(0x39CFFE)),
        Ease::Linear,
    )
    .unwrap();
    track.set_override(TrackValue::Color(custom)).unwrap();
    assert!(track.override_active());
    for i in 0..=10 {
        assert_eq!(track.update(i as f32 / 10.0), TrackValue::Color(custom));
    }
    track.clear_override();
    assert_eq!(track.update(0.0), TrackValue::Color(Srgb::WHITE));
}

#[test]
fn override_of_wrong_kind_is_rejected() {
    let mut track = scalar_track(0.0, 1.0, Ease::Linear);
    let err = track.set_override(TrackValue::Vector(Vec3::ONE)).unwrap_err();
    assert!(matches!(err, AnimError::KindMismatch { .. }));
    assert!(!track.override_active());
}
