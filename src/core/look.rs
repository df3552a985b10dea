/// Pitch is kept inside this range (degrees) after every update
pub const PITCH_LIMIT: f32 = 90.0;

/// Accumulated mouse-look angles in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookState {
    yaw: f32,
    pitch: f32,
}

impl LookState {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: clamp_pitch(pitch),
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Apply a mouse delta in pixels scaled by `sensitivity` degrees per pixel
    pub fn apply_delta(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw += dx * sensitivity;
        self.pitch = clamp_pitch(self.pitch + dy * sensitivity);
    }
}

fn clamp_pitch(pitch: f32) -> f32 {
    if pitch.is_nan() {
        return 0.0;
    }
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}
