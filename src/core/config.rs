//! Per-page viewer configuration.
//!
//! The page picks a variant and optionally a model URL through `data-*`
//! attributes on the canvas; everything else comes from constants.

use super::constants::*;
use super::orbit::OrbitSettings;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Variant {
    /// Scroll-driven slide tour; pointer input temporarily takes over.
    #[default]
    Tour,
    /// Free orbit with pan and a live readout panel.
    Inspect,
    /// Free orbit; scroll spins the model once around its vertical axis.
    Turntable,
}

impl Variant {
    /// Parse a `data-variant` value. Unknown values fall back to `Tour`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "tour" => Variant::Tour,
            "inspect" | "manual" => Variant::Inspect,
            "turntable" | "spin" => Variant::Turntable,
            other => {
                log::warn!("unknown viewer variant {:?}; using tour", other);
                Variant::Tour
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Tour => "tour",
            Variant::Inspect => "inspect",
            Variant::Turntable => "turntable",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub variant: Variant,
    pub model_url: String,
    pub initial_eye: Vec3,
    pub controls: OrbitSettings,
    /// Whether the orbit controller is live from the start (no arbitration).
    pub controls_always_on: bool,
    pub scrub_sec: f32,
    pub readouts: bool,
}

impl ViewerConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Tour => Self {
                variant,
                model_url: "model/apple_vision_pro-2.glb".to_string(),
                initial_eye: SLIDES[0].to_vec3(),
                controls: OrbitSettings::default(),
                controls_always_on: false,
                scrub_sec: TOUR_SCRUB_SEC,
                readouts: false,
            },
            Variant::Inspect => Self {
                variant,
                model_url: "model/apple_vision_pro.glb".to_string(),
                initial_eye: INSPECT_CAMERA_EYE,
                controls: OrbitSettings {
                    enable_pan: true,
                    min_distance: INSPECT_MIN_DISTANCE,
                    max_distance: INSPECT_MAX_DISTANCE,
                    ..OrbitSettings::default()
                },
                controls_always_on: true,
                scrub_sec: 0.0,
                readouts: true,
            },
            Variant::Turntable => Self {
                variant,
                model_url: "/static/models/apple_vision_pro.glb".to_string(),
                initial_eye: TURNTABLE_CAMERA_EYE,
                controls: OrbitSettings {
                    min_distance: TURNTABLE_MIN_DISTANCE,
                    max_distance: TURNTABLE_MAX_DISTANCE,
                    ..OrbitSettings::default()
                },
                controls_always_on: true,
                scrub_sec: TURNTABLE_SCRUB_SEC,
                readouts: false,
            },
        }
    }

    /// Build from raw `data-variant` / `data-model` attribute values.
    pub fn from_attributes(variant: Option<&str>, model: Option<&str>) -> Self {
        let mut cfg = Self::for_variant(variant.map(Variant::parse).unwrap_or_default());
        if let Some(url) = model.map(str::trim).filter(|u| !u.is_empty()) {
            cfg.model_url = url.to_string();
        }
        cfg
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::for_variant(Variant::Tour)
    }
}
