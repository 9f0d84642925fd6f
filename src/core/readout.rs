use glam::Vec3;

// Element ids of the live inspection panel, in display order.
pub const READOUT_IDS: [&str; 7] = ["posX", "posY", "posZ", "rotX", "rotY", "rotZ", "camDist"];

/// Snapshot of the values shown by the inspection panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readouts {
    pub camera: Vec3,
    pub rotation: Vec3,
    pub distance: f32,
}

impl Readouts {
    /// Formatted values paired with their element ids.
    pub fn entries(&self) -> [(&'static str, String); 7] {
        let values = [
            self.camera.x,
            self.camera.y,
            self.camera.z,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.distance,
        ];
        std::array::from_fn(|i| (READOUT_IDS[i], format_readout(values[i])))
    }
}

#[inline]
pub fn format_readout(v: f32) -> String {
    format!("{:.2}", v)
}
