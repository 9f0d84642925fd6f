//! Scripted camera path over the authored slides.
//!
//! The path is a chain of timed segments laid end to end on one timeline.
//! Scroll progress in [0, 1] maps onto the whole timeline; sampling returns
//! the camera position of whichever segment is active at that time.

use super::constants::*;
use super::easing::Ease;
use glam::Vec3;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("camera path needs at least 2 viewpoints, got {0}")]
    TooFewViewpoints(usize),
    #[error("viewpoint {0} is not finite")]
    NonFinite(usize),
}

/// How a segment moves the camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Straight line between two positions.
    Linear { from: Vec3, to: Vec3 },
    /// Constant radius and height sweep around the Y axis.
    Orbit {
        radius: f32,
        height: f32,
        angle_from: f32,
        angle_to: f32,
    },
}

impl Motion {
    /// Position at eased fraction `k` (0 = start, 1 = end).
    pub fn at(&self, k: f32) -> Vec3 {
        match *self {
            Motion::Linear { from, to } => from.lerp(to, k),
            Motion::Orbit {
                radius,
                height,
                angle_from,
                angle_to,
            } => {
                let a = angle_from + (angle_to - angle_from) * k;
                orbit_point(radius, height, a)
            }
        }
    }

    pub fn start(&self) -> Vec3 {
        self.at(0.0)
    }

    pub fn end(&self) -> Vec3 {
        self.at(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub label: char,
    pub motion: Motion,
    pub duration: f32,
    pub ease: Ease,
}

impl Segment {
    /// Position at local time fraction `t` in [0, 1], eased.
    #[inline]
    pub fn position_at(&self, t: f32) -> Vec3 {
        self.motion.at(self.ease.apply(t))
    }
}

/// Point on the horizontal circle of `radius` at `height`, polar angle measured from +Z towards +X.
#[inline]
pub fn orbit_point(radius: f32, height: f32, angle: f32) -> Vec3 {
    Vec3::new(radius * angle.sin(), height, radius * angle.cos())
}

/// Polar angle of a position in the XZ plane, matching `orbit_point`.
#[inline]
pub fn polar_angle(p: Vec3) -> f32 {
    p.x.atan2(p.z)
}

#[inline]
pub fn planar_radius(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

/// Zoomed-out version of a viewpoint used for the opening pass.
#[inline]
pub fn zoomed_out(p: Vec3) -> Vec3 {
    Vec3::new(
        p.x * ZOOM_OUT_HORIZONTAL,
        p.y * ZOOM_OUT_VERTICAL,
        p.z * ZOOM_OUT_HORIZONTAL,
    )
}

#[derive(Clone, Debug)]
pub struct CameraPath {
    segments: SmallVec<[Segment; 8]>,
    total: f32,
}

impl CameraPath {
    /// Plan the tour from the camera's resting position through `slides` and back to the first.
    pub fn plan(start: Vec3, slides: &[Viewpoint]) -> Result<Self, PathError> {
        if slides.len() < 2 {
            return Err(PathError::TooFewViewpoints(slides.len()));
        }
        if let Some(i) = slides
            .iter()
            .position(|s| !s.to_vec3().is_finite())
        {
            return Err(PathError::NonFinite(i));
        }
        let pts: SmallVec<[Vec3; 8]> = slides.iter().map(|s| s.to_vec3()).collect();
        let first = pts[0];
        let last = pts[pts.len() - 1];

        let mut segments: SmallVec<[Segment; 8]> = SmallVec::new();
        let mut label = 'A';
        let mut push = |motion: Motion, duration: f32, ease: Ease| {
            segments.push(Segment {
                label,
                motion,
                duration,
                ease,
            });
            label = char::from_u32(label as u32 + 1).unwrap_or('?');
        };

        let wide = zoomed_out(first);
        push(
            Motion::Linear {
                from: start,
                to: wide,
            },
            ZOOM_OUT_SHARE,
            Ease::Power2InOut,
        );
        push(
            Motion::Linear {
                from: wide,
                to: pts[1],
            },
            ZOOM_SETTLE_SHARE,
            Ease::Power2InOut,
        );
        for pair in pts[1..].windows(2) {
            push(
                Motion::Linear {
                    from: pair[0],
                    to: pair[1],
                },
                HOP_SHARE,
                Ease::Power1InOut,
            );
        }

        // Close the loop on the last slide's circle instead of cutting a chord through the model.
        let orbit = Motion::Orbit {
            radius: planar_radius(last),
            height: last.y,
            angle_from: polar_angle(last),
            angle_to: polar_angle(first),
        };
        push(orbit, ORBIT_SHARE, Ease::Power2InOut);
        push(
            Motion::Linear {
                from: orbit.end(),
                to: first,
            },
            ZOOM_IN_SHARE,
            Ease::Power2InOut,
        );

        let total = segments.iter().map(|s| s.duration).sum();
        log::debug!(
            "[tour] planned {} segments, total duration {:.2}",
            segments.len(),
            total
        );
        Ok(Self { segments, total })
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    pub fn total_duration(&self) -> f32 {
        self.total
    }

    /// Active segment index and its local time fraction for overall `progress`.
    pub fn locate(&self, progress: f32) -> (usize, f32) {
        let time = progress.clamp(0.0, 1.0) * self.total;
        let mut start = 0.0;
        for (i, seg) in self.segments.iter().enumerate() {
            let end = start + seg.duration;
            if time < end || i + 1 == self.segments.len() {
                let local = if seg.duration > 0.0 {
                    ((time - start) / seg.duration).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                return (i, local);
            }
            start = end;
        }
        (0, 0.0)
    }

    /// Camera position at overall `progress` in [0, 1].
    pub fn sample(&self, progress: f32) -> Vec3 {
        let (i, local) = self.locate(progress);
        self.segments[i].position_at(local)
    }
}
