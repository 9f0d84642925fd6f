//! Autoplay/manual camera ownership.
//!
//! The scroll-driven path and the pointer-driven orbit controller never move
//! the camera in the same frame. `transition` is the whole state machine; the
//! arbiter only owns the resume timer and forwards effects to the drivers.

use super::constants::QUIET_RESUME_MS;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ControlMode {
    #[default]
    Autoplay,
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArbiterEvent {
    PointerDown,
    ManipulationEnd,
    QuietElapsed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    DisableScrollDriver,
    EnableScrollDriver,
    EnableControls,
    DisableControls,
    ArmResumeTimer,
    CancelResumeTimer,
}

const TAKE_OVER: &[Effect] = &[
    Effect::DisableScrollDriver,
    Effect::EnableControls,
    Effect::CancelResumeTimer,
];
const WAIT_QUIET: &[Effect] = &[Effect::ArmResumeTimer];
const HAND_BACK: &[Effect] = &[Effect::DisableControls, Effect::EnableScrollDriver];

/// Transition table. `None` means the event is ignored in that mode.
pub fn transition(mode: ControlMode, event: ArbiterEvent) -> Option<(ControlMode, &'static [Effect])> {
    use ArbiterEvent::*;
    use ControlMode::*;
    match (mode, event) {
        (Autoplay | Manual, PointerDown) => Some((Manual, TAKE_OVER)),
        (Manual, ManipulationEnd) => Some((Manual, WAIT_QUIET)),
        (Manual, QuietElapsed) => Some((Autoplay, HAND_BACK)),
        (Autoplay, ManipulationEnd | QuietElapsed) => None,
    }
}

/// Whatever moves the camera: the scroll-linked progress driver and the direct manipulation controller.
pub trait CameraDrivers {
    fn set_scroll_driver_enabled(&mut self, enabled: bool);
    fn set_controls_enabled(&mut self, enabled: bool);
}

#[derive(Debug)]
pub struct ModeArbiter {
    mode: ControlMode,
    quiet: Duration,
    // Time left before handing the camera back, when armed.
    resume_in: Option<Duration>,
}

impl Default for ModeArbiter {
    fn default() -> Self {
        Self::new(Duration::from_millis(QUIET_RESUME_MS))
    }
}

impl ModeArbiter {
    pub fn new(quiet: Duration) -> Self {
        Self {
            mode: ControlMode::Autoplay,
            quiet,
            resume_in: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    #[inline]
    pub fn resume_pending(&self) -> bool {
        self.resume_in.is_some()
    }

    pub fn pointer_down(&mut self, drivers: &mut impl CameraDrivers) {
        self.dispatch(ArbiterEvent::PointerDown, drivers);
    }

    pub fn manipulation_end(&mut self, drivers: &mut impl CameraDrivers) {
        self.dispatch(ArbiterEvent::ManipulationEnd, drivers);
    }

    /// Advance the resume timer; hands the camera back once the quiet period has elapsed.
    pub fn tick(&mut self, dt: Duration, drivers: &mut impl CameraDrivers) {
        let Some(left) = self.resume_in else {
            return;
        };
        match left.checked_sub(dt) {
            Some(rest) if !rest.is_zero() => self.resume_in = Some(rest),
            _ => {
                self.resume_in = None;
                self.dispatch(ArbiterEvent::QuietElapsed, drivers);
            }
        }
    }

    pub fn dispatch(&mut self, event: ArbiterEvent, drivers: &mut impl CameraDrivers) {
        let Some((next, effects)) = transition(self.mode, event) else {
            log::debug!("[arbiter] {:?} ignored in {:?}", event, self.mode);
            return;
        };
        if next != self.mode {
            log::info!("[arbiter] {:?} -> {:?} on {:?}", self.mode, next, event);
        }
        self.mode = next;
        for effect in effects {
            match effect {
                Effect::DisableScrollDriver => drivers.set_scroll_driver_enabled(false),
                Effect::EnableScrollDriver => drivers.set_scroll_driver_enabled(true),
                Effect::EnableControls => drivers.set_controls_enabled(true),
                Effect::DisableControls => drivers.set_controls_enabled(false),
                Effect::ArmResumeTimer => self.resume_in = Some(self.quiet),
                Effect::CancelResumeTimer => self.resume_in = None,
            }
        }
    }
}
