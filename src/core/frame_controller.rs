use glam::Vec3;
use log::debug;

use super::controller::{Button, Controller};
use super::frame_stats::{FrameCounter, FrameReport};
use super::look::LookState;
use crate::config::ControllerConfig;
use crate::traits::{CameraSink, Lifecycle, Logger, SceneGraph};

/// Per-frame statistics and fly-camera control.
///
/// Driven by the host loop: `on_tick` once per rendered frame and
/// `on_key_toggle` once per fresh key press, both on the same thread.
/// Owns the frame counter and the look angles; the camera, input state,
/// scene and logger are borrowed collaborators.
#[derive(Debug, Clone)]
pub struct FrameController {
    config: ControllerConfig,
    counter: FrameCounter,
    look: LookState,
}

impl FrameController {
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            counter: FrameCounter::new(),
            look: LookState::default(),
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn counter(&self) -> &FrameCounter {
        &self.counter
    }

    pub fn look(&self) -> &LookState {
        &self.look
    }

    /// Seed the look angles, e.g. from the camera's starting orientation
    pub fn reset_look(&mut self, yaw: f32, pitch: f32) {
        self.look = LookState::new(yaw, pitch);
    }

    /// Advance one frame of `delta` seconds. Returns the statistics report
    /// if this frame closed a reporting interval.
    pub fn on_tick<I, C, L>(
        &mut self,
        delta: f64,
        input: &I,
        camera: &mut C,
        logger: &L,
    ) -> Option<FrameReport>
    where
        I: Controller + ?Sized,
        C: CameraSink + ?Sized,
        L: Logger + ?Sized,
    {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };

        let report = self.counter.tick(delta, self.config.report_interval);
        if let Some(report) = &report {
            logger.info(&report.to_string());
        }

        self.apply_movement(delta as f32, input, camera);

        if input.is_pointer_captured() {
            let (dx, dy) = input.mouse_delta();
            self.look.apply_delta(dx, dy, self.config.sensitivity);
            camera.set_orientation_from_yaw_pitch(self.look.yaw(), self.look.pitch());
        }

        report
    }

    fn apply_movement<I, C>(&self, delta: f32, input: &I, camera: &mut C)
    where
        I: Controller + ?Sized,
        C: CameraSink + ?Sized,
    {
        let mut speed = self.config.base_speed;
        if input.is_down(Button::SPEED_MODIFIER) {
            speed *= self.config.boost_multiplier;
        }
        let step = speed * delta;

        for (button, axis) in Button::MOVEMENT {
            if input.is_down(button) {
                camera.translate(Vec3::from_array(axis) * step);
            }
        }
    }

    /// React to a fresh key press
    pub fn on_key_toggle<I, H, S>(&self, key: Button, input: &mut I, lifecycle: &mut H, scene: &mut S)
    where
        I: Controller + ?Sized,
        H: Lifecycle + ?Sized,
        S: SceneGraph + ?Sized,
    {
        match key {
            Button::Escape => lifecycle.request_exit(),
            Button::Tab => {
                let captured = !input.is_pointer_captured();
                input.set_pointer_captured(captured);
                debug!("Pointer captured: {}", captured);
            }
            Button::KeyL => match scene.node_mut(&self.config.aux_light) {
                Some(node) => {
                    node.enabled = !node.enabled;
                    debug!("{} enabled: {}", node.name, node.enabled);
                }
                None => debug!(
                    "No node named {} in {}, ignoring light toggle",
                    self.config.aux_light,
                    scene.name()
                ),
            },
            _ => {}
        }
    }
}

impl Default for FrameController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}
