use std::cell::RefCell;

use first_app::camera::CameraPose;
use first_app::config::ControllerConfig;
use first_app::core::{Button, Controller, FrameController};
use first_app::scene::{Scene, AUX_LIGHT};
use first_app::traits::{CameraSink, Lifecycle, Logger, SceneGraph};
use glam::Vec3;

/// Mock input with fixed key and mouse state
#[derive(Default)]
struct MockInput {
    pressed: Vec<Button>,
    delta: (f32, f32),
    captured: bool,
    capture_writes: usize,
}

impl MockInput {
    fn holding(buttons: &[Button]) -> Self {
        Self {
            pressed: buttons.to_vec(),
            ..Default::default()
        }
    }

    fn looking(dx: f32, dy: f32) -> Self {
        Self {
            delta: (dx, dy),
            captured: true,
            ..Default::default()
        }
    }
}

impl Controller for MockInput {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.delta
    }

    fn is_pointer_captured(&self) -> bool {
        self.captured
    }

    fn set_pointer_captured(&mut self, captured: bool) {
        self.captured = captured;
        self.capture_writes += 1;
    }
}

/// Mock camera recording every call
#[derive(Default)]
struct MockCamera {
    translations: Vec<Vec3>,
    orientations: Vec<(f32, f32)>,
}

impl CameraSink for MockCamera {
    fn translate(&mut self, local_offset: Vec3) {
        self.translations.push(local_offset);
    }

    fn set_orientation_from_yaw_pitch(&mut self, yaw_degrees: f32, pitch_degrees: f32) {
        self.orientations.push((yaw_degrees, pitch_degrees));
    }
}

#[derive(Default)]
struct MockLogger {
    lines: RefCell<Vec<String>>,
}

impl Logger for MockLogger {
    fn info(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
struct MockLifecycle {
    exit_requests: usize,
}

impl Lifecycle for MockLifecycle {
    fn request_exit(&mut self) {
        self.exit_requests += 1;
    }
}

// ============================================================================
// Frame statistics
// ============================================================================

#[test]
fn test_sixty_frames_at_sixty_hz_report_once() {
    let mut controller = FrameController::default();
    let input = MockInput::default();
    let mut camera = MockCamera::default();
    let logger = MockLogger::default();

    let mut reports = Vec::new();
    for _ in 0..60 {
        if let Some(report) = controller.on_tick(1.0 / 60.0, &input, &mut camera, &logger) {
            reports.push(report);
        }
    }

    assert_eq!(reports.len(), 1);
    let report = reports[0];
    assert_eq!(report.frames, 60);
    assert!((report.elapsed - 1.0).abs() < 1e-9);
    assert!((report.fps - 60.0).abs() < 1e-6);
    assert_eq!(logger.lines.borrow().as_slice(), ["frames: 60 time: 1.00 fps: 60.00"]);

    assert_eq!(controller.counter().frames(), 0);
    assert_eq!(controller.counter().elapsed(), 0.0);
}

#[test]
fn test_no_report_before_one_second() {
    let mut controller = FrameController::default();
    let input = MockInput::default();
    let mut camera = MockCamera::default();
    let logger = MockLogger::default();

    for i in 1..60 {
        assert!(controller.on_tick(1.0 / 60.0, &input, &mut camera, &logger).is_none());
        assert_eq!(controller.counter().frames(), i);
    }
    assert!(logger.lines.borrow().is_empty());
}

#[test]
fn test_reset_happens_exactly_at_crossing() {
    let deltas = [0.3, 0.0, 0.45, 0.2, 0.05, 0.7, 0.29, 2.0, 0.0, 0.999];
    let mut controller = FrameController::default();
    let input = MockInput::default();
    let mut camera = MockCamera::default();
    let logger = MockLogger::default();

    let mut frames = 0u64;
    let mut elapsed = 0.0f64;
    for dt in deltas {
        frames += 1;
        elapsed += dt;
        let report = controller.on_tick(dt, &input, &mut camera, &logger);

        if elapsed >= 1.0 {
            let report = report.expect("report at crossing");
            assert_eq!(report.frames, frames);
            assert_eq!(report.elapsed, elapsed);
            assert_eq!(report.fps, frames as f64 / elapsed);
            frames = 0;
            elapsed = 0.0;
        } else {
            assert!(report.is_none());
        }
        assert_eq!(controller.counter().frames(), frames);
        assert_eq!(controller.counter().elapsed(), elapsed);
    }
    assert_eq!(logger.lines.borrow().len(), 2);
}

#[test]
fn test_custom_report_interval() {
    let config = ControllerConfig {
        report_interval: 0.5,
        ..Default::default()
    };
    let mut controller = FrameController::new(config);
    let input = MockInput::default();
    let mut camera = MockCamera::default();
    let logger = MockLogger::default();

    assert!(controller.on_tick(0.25, &input, &mut camera, &logger).is_none());
    let report = controller.on_tick(0.25, &input, &mut camera, &logger).unwrap();
    assert_eq!(report.frames, 2);
    assert_eq!(report.fps, 4.0);
}

#[test]
fn test_zero_delta_frames_never_report() {
    let mut controller = FrameController::default();
    let input = MockInput::default();
    let mut camera = MockCamera::default();
    let logger = MockLogger::default();

    for _ in 0..1000 {
        assert!(controller.on_tick(0.0, &input, &mut camera, &logger).is_none());
    }
    assert_eq!(controller.counter().frames(), 1000);
    assert!(logger.lines.borrow().is_empty());
}

// ============================================================================
// Movement
// ============================================================================

#[test]
fn test_forward_at_base_speed() {
    let mut controller = FrameController::default();
    let input = MockInput::holding(&[Button::KeyW]);
    let mut camera = MockCamera::default();

    controller.on_tick(0.25, &input, &mut camera, &MockLogger::default());
    assert_eq!(camera.translations, vec![Vec3::new(0.0, 0.0, 2.5)]);
}

#[test]
fn test_forward_with_modifier() {
    let mut controller = FrameController::default();
    let input = MockInput::holding(&[Button::KeyW, Button::Shift]);
    let mut camera = MockCamera::default();

    controller.on_tick(0.25, &input, &mut camera, &MockLogger::default());
    assert_eq!(camera.translations, vec![Vec3::new(0.0, 0.0, 25.0)]);
}

#[test]
fn test_each_held_key_translates_once() {
    let mut controller = FrameController::default();
    let input = MockInput::holding(&[Button::KeyW, Button::KeyA, Button::KeyS, Button::KeyD]);
    let mut camera = MockCamera::default();

    controller.on_tick(0.5, &input, &mut camera, &MockLogger::default());
    assert_eq!(camera.translations.len(), 4);
    let total: Vec3 = camera.translations.iter().copied().sum();
    assert_eq!(total, Vec3::ZERO);
}

#[test]
fn test_no_keys_no_translation() {
    let mut controller = FrameController::default();
    let mut camera = MockCamera::default();

    controller.on_tick(0.5, &MockInput::default(), &mut camera, &MockLogger::default());
    assert!(camera.translations.is_empty());
    assert!(camera.orientations.is_empty());
}

#[test]
fn test_forward_moves_real_camera_along_view() {
    let mut controller = FrameController::default();
    let mut camera = CameraPose::new(Vec3::ZERO);
    let logger = MockLogger::default();

    // Turn 90 degrees right, then walk forward for half a second
    controller.on_tick(0.0, &MockInput::looking(900.0, 0.0), &mut camera, &logger);
    controller.on_tick(0.5, &MockInput::holding(&[Button::KeyW]), &mut camera, &logger);

    assert!(camera.position.abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), 1e-4));
}

// ============================================================================
// Mouse look
// ============================================================================

#[test]
fn test_large_delta_clamps_pitch() {
    let mut controller = FrameController::default();
    let mut camera = MockCamera::default();

    controller.on_tick(0.016, &MockInput::looking(1000.0, 1000.0), &mut camera, &MockLogger::default());

    assert!((controller.look().yaw() - 100.0).abs() < 1e-4);
    assert_eq!(controller.look().pitch(), 90.0);
    assert_eq!(camera.orientations.len(), 1);
    assert_eq!(camera.orientations[0].1, 90.0);
}

#[test]
fn test_pitch_stays_in_range_for_adversarial_deltas() {
    let deltas = [
        (0.0, 100_000.0),
        (5.0, -3.0),
        (0.0, -100_000.0),
        (-1e9, 1e9),
        (0.0, f32::MAX),
        (0.0, f32::MIN),
        (3.0, 450.0),
    ];
    let mut controller = FrameController::default();
    let mut camera = MockCamera::default();
    let logger = MockLogger::default();

    for (dx, dy) in deltas {
        controller.on_tick(0.016, &MockInput::looking(dx, dy), &mut camera, &logger);
        let pitch = controller.look().pitch();
        assert!((-90.0..=90.0).contains(&pitch), "pitch {} out of range", pitch);
    }
}

#[test]
fn test_look_persists_across_frames() {
    let mut controller = FrameController::default();
    let mut camera = MockCamera::default();
    let logger = MockLogger::default();

    controller.on_tick(0.016, &MockInput::looking(100.0, 50.0), &mut camera, &logger);
    controller.on_tick(0.016, &MockInput::looking(100.0, 50.0), &mut camera, &logger);

    assert!((controller.look().yaw() - 20.0).abs() < 1e-4);
    assert!((controller.look().pitch() - 10.0).abs() < 1e-4);
}

#[test]
fn test_no_look_when_pointer_free() {
    let mut controller = FrameController::default();
    let mut camera = MockCamera::default();
    let input = MockInput {
        delta: (500.0, 500.0),
        captured: false,
        ..Default::default()
    };

    controller.on_tick(0.016, &input, &mut camera, &MockLogger::default());
    assert_eq!(controller.look().yaw(), 0.0);
    assert!(camera.orientations.is_empty());
}

// ============================================================================
// Key toggles
// ============================================================================

#[test]
fn test_escape_requests_exit_only() {
    let controller = FrameController::default();
    let mut input = MockInput::default();
    let mut lifecycle = MockLifecycle::default();
    let mut scene = Scene::demo();
    let nodes_before = scene.nodes().to_vec();

    controller.on_key_toggle(Button::Escape, &mut input, &mut lifecycle, &mut scene);

    assert_eq!(lifecycle.exit_requests, 1);
    assert_eq!(input.capture_writes, 0);
    assert!(!input.captured);
    assert_eq!(scene.nodes(), nodes_before.as_slice());
    assert_eq!(controller.counter().frames(), 0);
}

#[test]
fn test_tab_toggles_capture() {
    let controller = FrameController::default();
    let mut input = MockInput::default();
    let mut lifecycle = MockLifecycle::default();
    let mut scene = Scene::demo();

    controller.on_key_toggle(Button::Tab, &mut input, &mut lifecycle, &mut scene);
    assert!(input.captured);
    controller.on_key_toggle(Button::Tab, &mut input, &mut lifecycle, &mut scene);
    assert!(!input.captured);
    assert_eq!(lifecycle.exit_requests, 0);
}

#[test]
fn test_light_toggle_flips_aux_light() {
    let controller = FrameController::default();
    let mut input = MockInput::default();
    let mut lifecycle = MockLifecycle::default();
    let mut scene = Scene::demo();

    controller.on_key_toggle(Button::KeyL, &mut input, &mut lifecycle, &mut scene);
    assert!(!scene.node(AUX_LIGHT).unwrap().enabled);
    assert!(scene.node("Sun").unwrap().enabled);
}

#[test]
fn test_light_toggle_missing_node_is_noop() {
    let controller = FrameController::default();
    let mut input = MockInput::default();
    let mut lifecycle = MockLifecycle::default();
    let mut scene = Scene::demo().without(AUX_LIGHT);
    let nodes_before = scene.nodes().to_vec();

    controller.on_key_toggle(Button::KeyL, &mut input, &mut lifecycle, &mut scene);

    assert_eq!(scene.nodes(), nodes_before.as_slice());
    assert_eq!(lifecycle.exit_requests, 0);
}

#[test]
fn test_configured_light_name() {
    let config = ControllerConfig {
        aux_light: "Sun".to_string(),
        ..Default::default()
    };
    let controller = FrameController::new(config);
    let mut input = MockInput::default();
    let mut lifecycle = MockLifecycle::default();
    let mut scene = Scene::demo();

    controller.on_key_toggle(Button::KeyL, &mut input, &mut lifecycle, &mut scene);
    assert!(!scene.node("Sun").unwrap().enabled);
    assert!(scene.node(AUX_LIGHT).unwrap().enabled);
}
