// Host-side tests for the tour path planner.
// The main crate is wasm-only, so we compile the platform-free core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::constants::{Viewpoint, SLIDES};
use crate::core::path::{planar_radius, polar_angle, zoomed_out, CameraPath, Motion, PathError};
use glam::Vec3;

const EPS: f32 = 1e-4;

fn plan_from_first() -> CameraPath {
    CameraPath::plan(SLIDES[0].to_vec3(), &SLIDES).expect("authored slides plan")
}

#[test]
fn six_slides_give_eight_segments() {
    let path = plan_from_first();
    let labels: String = path.segments().iter().map(|s| s.label).collect();
    assert_eq!(labels, "ABCDEFGH");
    assert!((path.total_duration() - 6.2).abs() < EPS);
}

#[test]
fn path_starts_at_camera_and_ends_on_first_slide() {
    let start = Vec3::new(1.0, 2.0, 3.0);
    let path = CameraPath::plan(start, &SLIDES).unwrap();
    assert!(path.sample(0.0).distance(start) < EPS);
    assert!(path.sample(1.0).distance(SLIDES[0].to_vec3()) < EPS);
}

#[test]
fn opening_pass_visits_zoomed_out_first_slide() {
    let path = plan_from_first();
    let a = path.segments()[0];
    assert!(a.motion.end().distance(zoomed_out(SLIDES[0].to_vec3())) < EPS);
    // End of segment A on the timeline: 0.6 / 6.2.
    let p = 0.6 / path.total_duration();
    assert!(path.sample(p).distance(zoomed_out(SLIDES[0].to_vec3())) < 1e-3);
}

#[test]
fn hops_pass_through_each_slide_in_order() {
    let path = plan_from_first();
    // Segment B lands on slide 1; each hop lands on the next slide.
    for (seg, slide) in path.segments()[1..6].iter().zip(&SLIDES[1..]) {
        assert!(seg.motion.end().distance(slide.to_vec3()) < EPS);
    }
}

#[test]
fn closing_orbit_keeps_radius_and_height() {
    let path = plan_from_first();
    let g = path.segments()[6];
    let last = SLIDES[5].to_vec3();
    match g.motion {
        Motion::Orbit {
            radius,
            height,
            angle_from,
            angle_to,
        } => {
            assert!((radius - planar_radius(last)).abs() < EPS);
            assert!((height - last.y).abs() < EPS);
            assert!((angle_from - polar_angle(last)).abs() < EPS);
            assert!((angle_to - polar_angle(SLIDES[0].to_vec3())).abs() < EPS);
        }
        other => panic!("segment G should orbit, got {:?}", other),
    }
    for i in 0..=20 {
        let p = g.position_at(i as f32 / 20.0);
        assert!((planar_radius(p) - planar_radius(last)).abs() < 1e-3);
        assert!((p.y - last.y).abs() < EPS);
    }
}

#[test]
fn closing_segment_joins_orbit_end_to_first_slide() {
    let path = plan_from_first();
    let (g, h) = (path.segments()[6], path.segments()[7]);
    assert!(g.motion.end().distance(h.motion.start()) < EPS);
    assert!(h.motion.end().distance(SLIDES[0].to_vec3()) < EPS);
}

#[test]
fn locate_maps_progress_onto_segment_shares() {
    let path = plan_from_first();
    assert_eq!(path.locate(0.0), (0, 0.0));
    let (i, local) = path.locate(1.0);
    assert_eq!(i, 7);
    assert!((local - 1.0).abs() < EPS);
    // Halfway through the first hop (C): 1.0 + 0.5 of 6.2.
    let (i, local) = path.locate(1.5 / 6.2);
    assert_eq!(i, 2);
    assert!((local - 0.5).abs() < 1e-3);
}

#[test]
fn out_of_range_progress_is_clamped() {
    let path = plan_from_first();
    assert_eq!(path.sample(-3.0), path.sample(0.0));
    assert_eq!(path.sample(7.0), path.sample(1.0));
}

#[test]
fn rejects_degenerate_input() {
    let one = [Viewpoint::new(1.0, 1.0, 1.0)];
    assert_eq!(
        CameraPath::plan(Vec3::ZERO, &one).unwrap_err(),
        PathError::TooFewViewpoints(1)
    );
    let bad = [Viewpoint::new(1.0, 1.0, 1.0), Viewpoint::new(f32::NAN, 0.0, 0.0)];
    assert_eq!(
        CameraPath::plan(Vec3::ZERO, &bad).unwrap_err(),
        PathError::NonFinite(1)
    );
}

#[test]
fn two_slides_skip_hops() {
    let slides = [Viewpoint::new(5.0, 1.0, 0.0), Viewpoint::new(0.0, 2.0, 5.0)];
    let path = CameraPath::plan(Vec3::new(5.0, 1.0, 0.0), &slides).unwrap();
    assert_eq!(path.segments().len(), 4);
    assert!((path.total_duration() - 2.2).abs() < EPS);
}
