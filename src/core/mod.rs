//! Platform-free viewer logic. Nothing in here touches `web_sys` or `wgpu`,
//! so the host-side tests compile this tree directly.

pub mod arbiter;
pub mod camera;
pub mod config;
pub mod constants;
pub mod easing;
pub mod model;
pub mod orbit;
pub mod path;
pub mod readout;
pub mod ready;
pub mod scroll;
pub mod sequencer;
pub mod stage;

pub use arbiter::{ControlMode, ModeArbiter};
pub use camera::Camera;
pub use config::{Variant, ViewerConfig};
pub use model::{MeshData, ModelTransform};
pub use orbit::DragKind;
pub use ready::ReadySignal;
pub use scroll::{scroll_progress, SectionRect};
pub use sequencer::CaptionStyle;
pub use stage::Stage;
