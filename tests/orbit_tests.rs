// Host-side tests for the direct manipulation controller.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::camera::Camera;
use crate::core::orbit::{DragKind, OrbitController, OrbitSettings};
use glam::Vec3;

fn settle(ctrl: &mut OrbitController, cam: &mut Camera) {
    for _ in 0..400 {
        ctrl.update(cam);
    }
}

#[test]
fn disabled_controller_ignores_input() {
    let mut ctrl = OrbitController::new(OrbitSettings::default(), false);
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
    assert!(!ctrl.begin(DragKind::Rotate, 0.0, 0.0));
    assert!(!ctrl.dolly(-100.0));
    assert!(!ctrl.update(&mut cam));
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 10.0));
}

#[test]
fn rotate_drag_orbits_at_constant_distance() {
    let mut ctrl = OrbitController::new(OrbitSettings::default(), true);
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
    assert!(ctrl.begin(DragKind::Rotate, 100.0, 100.0));
    ctrl.drag_to(200.0, 100.0, 1000.0, &cam);
    assert!(ctrl.end());
    assert!(ctrl.update(&mut cam));
    settle(&mut ctrl, &mut cam);
    assert!((cam.eye.length() - 10.0).abs() < 1e-3);
    assert!(cam.eye.x < -1.0);
    assert!(cam.eye.y.abs() < 1e-3);
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn damping_spreads_motion_over_frames() {
    let mut ctrl = OrbitController::new(OrbitSettings::default(), true);
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
    ctrl.begin(DragKind::Rotate, 0.0, 0.0);
    ctrl.drag_to(100.0, 0.0, 1000.0, &cam);
    ctrl.end();
    ctrl.update(&mut cam);
    let first = cam.eye;
    ctrl.update(&mut cam);
    assert_ne!(first, cam.eye);
}

#[test]
fn dolly_respects_distance_limits() {
    let settings = OrbitSettings {
        min_distance: 8.0,
        max_distance: 25.0,
        ..OrbitSettings::default()
    };
    let mut ctrl = OrbitController::new(settings, true);
    let mut cam = Camera::new(Vec3::new(0.0, 3.5, 16.0), 1.0);
    for _ in 0..100 {
        assert!(ctrl.dolly(-120.0));
        ctrl.update(&mut cam);
    }
    assert!((ctrl.distance(&cam) - 8.0).abs() < 1e-3);
    for _ in 0..100 {
        ctrl.dolly(120.0);
        ctrl.update(&mut cam);
    }
    assert!((ctrl.distance(&cam) - 25.0).abs() < 1e-3);
}

#[test]
fn single_wheel_step_scales_distance() {
    let mut ctrl = OrbitController::new(OrbitSettings::default(), true);
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
    ctrl.dolly(-1.0);
    ctrl.update(&mut cam);
    assert!((ctrl.distance(&cam) - 9.5).abs() < 1e-4);
    assert!(!ctrl.dolly(0.0));
}

#[test]
fn pan_moves_target_when_enabled() {
    let settings = OrbitSettings {
        enable_pan: true,
        ..OrbitSettings::default()
    };
    let mut ctrl = OrbitController::new(settings, true);
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
    ctrl.begin(DragKind::Pan, 0.0, 0.0);
    ctrl.drag_to(100.0, 0.0, 1000.0, &cam);
    ctrl.end();
    settle(&mut ctrl, &mut cam);
    assert!(ctrl.target.x < -0.1);
    assert!(((cam.eye - ctrl.target).length() - 10.0).abs() < 1e-3);
}

#[test]
fn pan_press_is_refused_when_disabled() {
    let mut ctrl = OrbitController::new(OrbitSettings::default(), true);
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
    assert!(!ctrl.begin(DragKind::Pan, 0.0, 0.0));
    assert!(!ctrl.is_dragging());
    ctrl.drag_to(100.0, 0.0, 1000.0, &cam);
    settle(&mut ctrl, &mut cam);
    assert_eq!(ctrl.target, Vec3::ZERO);
    assert!(cam.eye.distance(Vec3::new(0.0, 0.0, 10.0)) < 1e-4);
}

#[test]
fn middle_drag_dollies_like_the_wheel() {
    let mut ctrl = OrbitController::new(OrbitSettings::default(), true);
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
    assert!(ctrl.begin(DragKind::Dolly, 0.0, 0.0));
    // Upwards: one step closer.
    ctrl.drag_to(0.0, -10.0, 1000.0, &cam);
    ctrl.update(&mut cam);
    assert!((ctrl.distance(&cam) - 9.5).abs() < 1e-4);
    // Sideways only: no change.
    ctrl.drag_to(40.0, -10.0, 1000.0, &cam);
    ctrl.update(&mut cam);
    assert!((ctrl.distance(&cam) - 9.5).abs() < 1e-4);
    // Downwards: one step away.
    ctrl.drag_to(40.0, 5.0, 1000.0, &cam);
    ctrl.update(&mut cam);
    assert!(ctrl.end());
    assert!((ctrl.distance(&cam) - 10.0).abs() < 1e-3);
    assert_eq!(cam.eye.x, 0.0);
}

#[test]
fn disabling_drops_gesture_and_inertia() {
    let mut ctrl = OrbitController::new(OrbitSettings::default(), true);
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
    ctrl.begin(DragKind::Rotate, 0.0, 0.0);
    ctrl.drag_to(300.0, 0.0, 1000.0, &cam);
    ctrl.set_enabled(false);
    assert!(!ctrl.is_dragging());
    ctrl.set_enabled(true);
    let before = cam.eye;
    ctrl.update(&mut cam);
    assert!(cam.eye.distance(before) < 1e-4);
}

#[test]
fn polar_angle_is_clamped_at_the_poles() {
    let mut ctrl = OrbitController::new(OrbitSettings::default(), true);
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
    ctrl.begin(DragKind::Rotate, 0.0, 0.0);
    ctrl.drag_to(0.0, 5000.0, 1000.0, &cam);
    ctrl.end();
    settle(&mut ctrl, &mut cam);
    assert!(cam.eye.is_finite());
    assert!((cam.eye.length() - 10.0).abs() < 1e-3);
    assert!(cam.eye.y > 9.9);
}
