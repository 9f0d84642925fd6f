//! Direct camera manipulation: orbit by drag, dolly by wheel or middle drag,
//! optional pan.
//!
//! The controller keeps no pose of its own. Each `update` reads the camera's
//! current offset from the orbit target, applies the pending (damped) deltas
//! and writes the result back, so taking over from the scripted path starts
//! exactly where the path left the camera.

use super::camera::Camera;
use super::constants::{ORBIT_DAMPING, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

const POLAR_EPS: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSettings {
    pub damping: f32,
    pub rotate_speed: f32,
    pub zoom_step: f32,
    pub enable_pan: bool,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            damping: ORBIT_DAMPING,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_step: ORBIT_ZOOM_STEP,
            enable_pan: false,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    Rotate,
    Pan,
    Dolly,
}

#[derive(Clone, Debug)]
pub struct OrbitController {
    pub settings: OrbitSettings,
    pub target: Vec3,
    enabled: bool,
    drag: Option<(DragKind, f32, f32)>,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
    pan_offset: Vec3,
}

impl OrbitController {
    pub fn new(settings: OrbitSettings, enabled: bool) -> Self {
        Self {
            settings,
            target: Vec3::ZERO,
            enabled,
            drag: None,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            pan_offset: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Disabling drops any gesture in progress and its leftover inertia.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.drag = None;
            self.reset_deltas();
        }
    }

    /// Start a gesture at pointer position `(x, y)`. Returns whether it started;
    /// a pan press is refused while panning is off.
    pub fn begin(&mut self, kind: DragKind, x: f32, y: f32) -> bool {
        if !self.enabled || (kind == DragKind::Pan && !self.settings.enable_pan) {
            return false;
        }
        self.drag = Some((kind, x, y));
        true
    }

    pub fn drag_to(&mut self, x: f32, y: f32, viewport_height: f32, camera: &Camera) {
        let Some((kind, px, py)) = self.drag else {
            return;
        };
        let h = viewport_height.max(1.0);
        let (dx, dy) = (x - px, y - py);
        match kind {
            DragKind::Rotate => {
                self.delta_theta -= TAU * dx / h * self.settings.rotate_speed;
                self.delta_phi -= TAU * dy / h * self.settings.rotate_speed;
            }
            DragKind::Pan => {
                let offset = camera.eye - self.target;
                let target_distance = offset.length() * (camera.fovy_radians * 0.5).tan();
                let forward = (self.target - camera.eye).normalize_or_zero();
                let right = forward.cross(camera.up).normalize_or_zero();
                let up = right.cross(forward);
                self.pan_offset += right * (-2.0 * dx * target_distance / h);
                self.pan_offset += up * (2.0 * dy * target_distance / h);
            }
            // Dragging down moves away, like scrolling the wheel down.
            DragKind::Dolly => self.step_scale(dy),
        }
        self.drag = Some((kind, x, y));
    }

    /// Finish the current gesture. Returns true when one was in progress.
    pub fn end(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// One wheel step. Negative `delta_y` moves closer. Returns whether it was applied.
    pub fn dolly(&mut self, delta_y: f32) -> bool {
        if !self.enabled || delta_y == 0.0 {
            return false;
        }
        self.step_scale(delta_y);
        true
    }

    fn step_scale(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.scale *= self.settings.zoom_step;
        } else if delta_y > 0.0 {
            self.scale /= self.settings.zoom_step;
        }
    }

    /// Apply pending motion to `camera`. Returns true when the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if !self.enabled {
            return false;
        }
        let damping = self.settings.damping.clamp(0.0, 1.0);
        let offset = camera.eye - self.target;
        let mut radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        theta += self.delta_theta * damping;
        phi += self.delta_phi * damping;
        phi = phi.clamp(POLAR_EPS, PI - POLAR_EPS);
        radius = (radius * self.scale).clamp(self.settings.min_distance, self.settings.max_distance);

        self.target += self.pan_offset * damping;

        let sin_phi = phi.sin();
        let new_offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        let eye = self.target + new_offset;
        let moved = eye.distance_squared(camera.eye) > 1e-12 || camera.target != self.target;
        camera.eye = eye;
        camera.target = self.target;

        self.delta_theta *= 1.0 - damping;
        self.delta_phi *= 1.0 - damping;
        self.pan_offset *= 1.0 - damping;
        self.scale = 1.0;
        moved
    }

    #[inline]
    pub fn distance(&self, camera: &Camera) -> f32 {
        camera.eye.distance(self.target)
    }

    fn reset_deltas(&mut self) {
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
        self.pan_offset = Vec3::ZERO;
    }
}
