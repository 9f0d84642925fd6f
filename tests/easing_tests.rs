// Host-side tests for easing curves, tweens and the camera.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::camera::Camera;
use crate::core::easing::{Ease, Tween};
use crate::core::readout::{format_readout, Readouts};
use glam::Vec3;

const ALL: [Ease; 5] = [
    Ease::Linear,
    Ease::Power1InOut,
    Ease::Power2InOut,
    Ease::Power2In,
    Ease::Power2Out,
];

#[test]
fn curves_hit_their_endpoints_and_clamp() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
        assert_eq!(ease.apply(1.0), 1.0, "{:?}", ease);
        assert_eq!(ease.apply(-2.0), 0.0, "{:?}", ease);
        assert_eq!(ease.apply(3.0), 1.0, "{:?}", ease);
    }
}

#[test]
fn curves_are_monotonic() {
    for ease in ALL {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev, "{:?} decreased at {}", ease, i);
            prev = v;
        }
    }
}

#[test]
fn in_out_curves_are_symmetric() {
    for ease in [Ease::Power1InOut, Ease::Power2InOut] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-6);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((ease.apply(t) + ease.apply(1.0 - t) - 1.0).abs() < 1e-5);
        }
    }
    // In is slow to start, out is quick to start.
    assert!(Ease::Power2In.apply(0.25) < 0.25);
    assert!(Ease::Power2Out.apply(0.25) > 0.25);
}

#[test]
fn tween_reports_overshoot() {
    let mut tw = Tween::new(10.0, 20.0, 0.5, Ease::Linear);
    assert_eq!(tw.advance(0.25), 0.0);
    assert!((tw.value() - 15.0).abs() < 1e-5);
    assert!(!tw.finished());
    let over = tw.advance(0.5);
    assert!((over - 0.25).abs() < 1e-6);
    assert!(tw.finished());
    assert_eq!(tw.value(), 20.0);
}

#[test]
fn zero_length_tween_is_immediately_done() {
    let tw = Tween::new(0.0, 1.0, 0.0, Ease::Power2Out);
    assert!(tw.finished());
    assert_eq!(tw.value(), 1.0);
}

#[test]
fn camera_projects_origin_to_screen_centre() {
    let cam = Camera::new(Vec3::new(8.31, 2.18, -0.31), 16.0 / 9.0);
    let clip = cam.view_proj() * Vec3::ZERO.extend(1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn readouts_use_two_decimals() {
    assert_eq!(format_readout(3.14159), "3.14");
    let r = Readouts {
        camera: Vec3::new(0.0, 3.5, 16.0),
        rotation: Vec3::ZERO,
        distance: 16.378,
    };
    let entries = r.entries();
    assert_eq!(entries[1], ("posY", "3.50".to_string()));
    assert_eq!(entries[6], ("camDist", "16.38".to_string()));
}
