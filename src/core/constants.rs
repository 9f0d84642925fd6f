use glam::Vec3;

// Authored tour data and timing constants shared by the core modules.

/// A fixed camera position on the authored tour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewpoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Viewpoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

// Slides in traversal order; the tour closes the loop back to slide 0.
pub const SLIDES: [Viewpoint; 6] = [
    Viewpoint::new(8.31, 2.18, -0.31),
    Viewpoint::new(16.34, 1.10, 0.06),
    Viewpoint::new(9.93, 9.97, 8.48),
    Viewpoint::new(0.15, 18.90, -0.08),
    Viewpoint::new(8.32, 14.84, -8.45),
    Viewpoint::new(-12.44, 12.24, 7.46),
];

// Camera
pub const CAMERA_FOV_DEG: f32 = 55.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const INSPECT_CAMERA_EYE: Vec3 = Vec3::new(0.0, 3.5, 16.0);
pub const TURNTABLE_CAMERA_EYE: Vec3 = Vec3::new(0.0, 3.5, 18.0);

// Zoom-out pass before the first hop: horizontal axes pushed out, height lowered
pub const ZOOM_OUT_HORIZONTAL: f32 = 1.8;
pub const ZOOM_OUT_VERTICAL: f32 = 0.8;

// Segment duration shares on the tour timeline
pub const ZOOM_OUT_SHARE: f32 = 0.6;
pub const ZOOM_SETTLE_SHARE: f32 = 0.4;
pub const HOP_SHARE: f32 = 1.0;
pub const ORBIT_SHARE: f32 = 0.6;
pub const ZOOM_IN_SHARE: f32 = 0.6;

// Mode arbitration
pub const QUIET_RESUME_MS: u64 = 2000;

// Scroll scrub lag (seconds)
pub const TOUR_SCRUB_SEC: f32 = 2.2;
pub const TURNTABLE_SCRUB_SEC: f32 = 1.0;

// Caption fades (seconds / CSS px)
pub const CAPTION_INTRO_SEC: f32 = 0.8;
pub const CAPTION_FADE_OUT_SEC: f32 = 0.5;
pub const CAPTION_FADE_IN_SEC: f32 = 0.7;
pub const CAPTION_REST_OFFSET_PX: f32 = 30.0;
pub const CAPTION_EXIT_OFFSET_PX: f32 = -30.0;

// Direct manipulation
pub const ORBIT_DAMPING: f32 = 0.06;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // per wheel notch
pub const INSPECT_MIN_DISTANCE: f32 = 8.0;
pub const INSPECT_MAX_DISTANCE: f32 = 25.0;
pub const TURNTABLE_MIN_DISTANCE: f32 = 8.0;
pub const TURNTABLE_MAX_DISTANCE: f32 = 30.0;

// Model placement
pub const MODEL_SCALE: f32 = 18.0;
