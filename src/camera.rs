use glam::{Mat4, Quat, Vec3};

use crate::traits::CameraSink;

/// Left-handed camera axes: +Z forward, +X right, +Y up
pub const FORWARD: Vec3 = Vec3::Z;
pub const RIGHT: Vec3 = Vec3::X;
pub const UP: Vec3 = Vec3::Y;

pub const START_POSITION: Vec3 = Vec3::new(0.0, 3.0, -20.0);
pub const DEFAULT_FAR_CLIP: f32 = 300.0;

/// Camera transform written by the frame controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
    pub far_clip: f32,
}

impl CameraPose {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            far_clip: DEFAULT_FAR_CLIP,
        }
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * FORWARD
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * RIGHT
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * UP
    }

    /// Yaw and pitch in degrees recovered from the current forward vector
    pub fn yaw_pitch(&self) -> (f32, f32) {
        let forward = self.forward();
        let yaw = forward.x.atan2(forward.z).to_degrees();
        let pitch = (-forward.y).clamp(-1.0, 1.0).asin().to_degrees();
        (yaw, pitch)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_lh(self.position, self.forward(), self.up())
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(START_POSITION)
    }
}

impl CameraSink for CameraPose {
    fn translate(&mut self, local_offset: Vec3) {
        self.position += self.rotation * local_offset;
    }

    fn set_orientation_from_yaw_pitch(&mut self, yaw_degrees: f32, pitch_degrees: f32) {
        let yaw = Quat::from_axis_angle(UP, yaw_degrees.to_radians());
        let pitch = Quat::from_axis_angle(RIGHT, pitch_degrees.to_radians());
        self.rotation = (yaw * pitch).normalize();
    }
}
