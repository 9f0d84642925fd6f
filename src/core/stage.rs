//! The viewer's state, independent of the browser and the GPU.
//!
//! One `Stage` exists per page. Input handlers and the frame loop borrow it
//! mutably; nothing here touches the DOM, so the whole flow can be driven
//! from tests.

use super::arbiter::{CameraDrivers, ControlMode, ModeArbiter};
use super::camera::Camera;
use super::config::{Variant, ViewerConfig};
use super::constants::{MODEL_SCALE, SLIDES};
use super::model::{MeshData, ModelTransform};
use super::orbit::{DragKind, OrbitController};
use super::path::{CameraPath, PathError};
use super::readout::Readouts;
use super::scroll::{ScrollDriver, SectionRect, SectionTriggers};
use super::sequencer::{CaptionSequencer, CaptionStyle};
use std::f32::consts::TAU;
use std::time::Duration;

struct Drivers<'a> {
    scroll: &'a mut ScrollDriver,
    orbit: &'a mut OrbitController,
}

impl CameraDrivers for Drivers<'_> {
    fn set_scroll_driver_enabled(&mut self, enabled: bool) {
        self.scroll.set_enabled(enabled);
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.orbit.set_enabled(enabled);
    }
}

pub struct Stage {
    pub config: ViewerConfig,
    pub camera: Camera,
    pub orbit: OrbitController,
    pub scroll: ScrollDriver,
    pub arbiter: ModeArbiter,
    sections: SectionTriggers,
    path: Option<CameraPath>,
    captions: Option<CaptionSequencer>,
    model: Option<ModelTransform>,
}

impl Stage {
    pub fn new(config: ViewerConfig, aspect: f32) -> Self {
        let camera = Camera::new(config.initial_eye, aspect);
        let orbit = OrbitController::new(config.controls, config.controls_always_on);
        let mut scroll = ScrollDriver::new(config.scrub_sec);
        if config.variant == Variant::Inspect {
            scroll.set_enabled(false);
        }
        Self {
            config,
            camera,
            orbit,
            scroll,
            arbiter: ModeArbiter::default(),
            sections: SectionTriggers::default(),
            path: None,
            captions: None,
            model: None,
        }
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    #[inline]
    pub fn mode(&self) -> ControlMode {
        self.arbiter.mode()
    }

    #[inline]
    pub fn path(&self) -> Option<&CameraPath> {
        self.path.as_ref()
    }

    #[inline]
    pub fn captions(&self) -> Option<&CaptionSequencer> {
        self.captions.as_ref()
    }

    pub fn caption_styles(&self) -> &[CaptionStyle] {
        self.captions.as_ref().map(|c| c.styles()).unwrap_or(&[])
    }

    #[inline]
    pub fn model(&self) -> Option<&ModelTransform> {
        self.model.as_ref()
    }

    /// Place the decoded model. Input and scroll handling stay inert until this runs.
    pub fn attach_model(&mut self, mesh: &MeshData) {
        self.model = Some(ModelTransform::centered(mesh, MODEL_SCALE));
    }

    /// Plan the slide tour from the camera's current resting position.
    pub fn attach_path(&mut self) -> Result<(), PathError> {
        if self.config.variant != Variant::Tour {
            return Ok(());
        }
        self.path = Some(CameraPath::plan(self.camera.eye, &SLIDES)?);
        Ok(())
    }

    /// Start caption sequencing over `count` caption/section pairs.
    pub fn attach_captions(&mut self, count: usize) {
        if self.config.variant != Variant::Tour || count == 0 {
            return;
        }
        self.sections = SectionTriggers::new(count);
        self.captions = Some(CaptionSequencer::new(count));
    }

    fn drivers(&mut self) -> (&mut ModeArbiter, Drivers<'_>) {
        (
            &mut self.arbiter,
            Drivers {
                scroll: &mut self.scroll,
                orbit: &mut self.orbit,
            },
        )
    }

    /// Pointer pressed on the render surface. Returns whether a gesture started.
    pub fn pointer_down(&mut self, kind: DragKind, x: f32, y: f32) -> bool {
        if !self.is_ready() {
            return false;
        }
        if self.config.variant == Variant::Tour {
            let (arbiter, mut drivers) = self.drivers();
            arbiter.pointer_down(&mut drivers);
        }
        let started = self.orbit.begin(kind, x, y);
        if !started {
            // A refused press still took the camera; it ends at once so the tour resumes.
            self.manipulation_ended();
        }
        started
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, viewport_height: f32) {
        self.orbit.drag_to(x, y, viewport_height, &self.camera);
    }

    pub fn pointer_up(&mut self) {
        if self.orbit.end() {
            self.manipulation_ended();
        }
    }

    /// Wheel step over the canvas. Returns whether the controller consumed it.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        if !self.is_ready() || !self.orbit.dolly(delta_y) {
            return false;
        }
        // A wheel step is a complete gesture on its own.
        self.manipulation_ended();
        true
    }

    fn manipulation_ended(&mut self) {
        if self.config.variant == Variant::Tour {
            let (arbiter, mut drivers) = self.drivers();
            arbiter.manipulation_end(&mut drivers);
        }
    }

    /// New scroll state: container progress plus the section rects for caption triggers.
    pub fn scroll_to(&mut self, progress: f32, sections: &[SectionRect], viewport_height: f32) {
        if !self.is_ready() {
            return;
        }
        self.scroll.set_target(progress);
        let entered = self.sections.update(sections, viewport_height);
        if let Some(captions) = self.captions.as_mut() {
            for index in entered {
                captions.switch_text(index);
            }
        }
    }

    /// Per-frame update with one step for both clocks.
    #[inline]
    pub fn tick(&mut self, dt: Duration) {
        self.advance(dt, dt);
    }

    /// Per-frame update, in fixed order: resume timer, manipulation controller,
    /// path playhead, captions. Rendering follows in the caller.
    ///
    /// `elapsed` is wall-clock time since the previous frame and drives the
    /// resume timer; `dt` is the animation step, which the caller may cap.
    pub fn advance(&mut self, elapsed: Duration, dt: Duration) {
        let dt_sec = dt.as_secs_f32();
        if self.config.variant == Variant::Tour {
            let (arbiter, mut drivers) = self.drivers();
            arbiter.tick(elapsed, &mut drivers);
        }

        self.orbit.update(&mut self.camera);

        if let Some(progress) = self.scroll.advance(dt_sec) {
            match self.config.variant {
                Variant::Tour => {
                    if let Some(path) = &self.path {
                        self.camera.eye = path.sample(progress);
                        self.camera.look_at_origin();
                    }
                }
                Variant::Turntable => {
                    if let Some(model) = self.model.as_mut() {
                        model.rotation.y = progress * TAU;
                    }
                }
                Variant::Inspect => {}
            }
        }

        if let Some(captions) = self.captions.as_mut() {
            captions.tick(dt_sec);
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_viewport(width, height);
    }

    pub fn readouts(&self) -> Option<Readouts> {
        if !self.config.readouts {
            return None;
        }
        let model = self.model.as_ref()?;
        Some(Readouts {
            camera: self.camera.eye,
            rotation: model.rotation,
            distance: self.orbit.distance(&self.camera),
        })
    }
}
