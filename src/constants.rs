//! Page wiring and rendering constants for the web front-end.
//!
//! Element ids and selectors must match the host page markup.

// DOM hooks
pub const CANVAS_ID: &str = "app-canvas";
pub const SCROLL_CONTAINER_ID: &str = "scroll-container";
pub const SECTION_SELECTOR: &str = ".section";
pub const CAPTION_SELECTOR: &str = ".fade-text";
pub const STATUS_OVERLAY_ID: &str = "status-overlay";

// Canvas backing store
pub const MAX_PIXEL_RATIO: f64 = 2.0; // cap for high-DPI screens

// Tone mapping
pub const TONE_EXPOSURE: f32 = 1.2;

// Scene colours, sRGB hex
pub const BACKGROUND_HEX: u32 = 0x07080d;

// Light rig: (sRGB hex, intensity, position)
pub const AMBIENT_LIGHT: (u32, f32) = (0xffffff, 0.4);
pub const KEY_LIGHT: (u32, f32, [f32; 3]) = (0xfff4e0, 2.8, [4.0, 6.0, 5.0]);
pub const FILL_LIGHT: (u32, f32, [f32; 3]) = (0xc8e0ff, 0.9, [-5.0, 2.0, 3.0]);
pub const RIM_LIGHT: (u32, f32, [f32; 3]) = (0xe2c97e, 1.2, [-2.0, -1.0, -6.0]);
pub const BOUNCE_LIGHT: (u32, f32, [f32; 3]) = (0x3a8ef6, 0.6, [0.0, -3.0, 2.0]);
pub const BOUNCE_LIGHT_RANGE: f32 = 20.0;
