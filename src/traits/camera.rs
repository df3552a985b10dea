use glam::Vec3;

/// Camera pose sink - the controller writes through this, the host owns the storage
pub trait CameraSink {
    /// Move by an offset expressed in the camera's local axes
    fn translate(&mut self, local_offset: Vec3);

    /// Reset to the forward reference, then yaw about world up and pitch about local right
    fn set_orientation_from_yaw_pitch(&mut self, yaw_degrees: f32, pitch_degrees: f32);
}
