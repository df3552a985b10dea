use std::collections::HashSet;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// All pressed buttons as a vec (for efficient get_down_keys)
    pressed_vec: Vec<Button>,
    /// Raw mouse motion since last reset, only collected while captured
    mouse_delta: (f32, f32),
    pointer_captured: bool,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new(pointer_captured: bool) -> Self {
        Self {
            pressed_keys: HashSet::new(),
            pressed_vec: Vec::new(),
            mouse_delta: (0.0, 0.0),
            pointer_captured,
        }
    }

    /// Process a Winit WindowEvent and update internal state.
    /// Returns the button if this event is a fresh (non-repeat) press.
    pub fn process_event(&mut self, event: &WindowEvent) -> Option<Button> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let button = Self::keycode_to_button(keycode)?;
                match event.state {
                    ElementState::Pressed => self.press(button, event.repeat),
                    ElementState::Released => {
                        self.release(button);
                        None
                    }
                }
            }
            WindowEvent::Focused(false) => {
                self.clear_keys();
                None
            }
            _ => None,
        }
    }

    /// Process a raw device event (relative mouse motion)
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.add_mouse_motion(delta.0 as f32, delta.1 as f32);
        }
    }

    /// Reset per-frame state (mouse delta)
    /// Call this at the end of each frame after processing input
    pub fn reset_deltas(&mut self) {
        self.mouse_delta = (0.0, 0.0);
    }

    /// Forget every held key, e.g. when the window loses focus
    pub fn clear_keys(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    fn press(&mut self, button: Button, repeat: bool) -> Option<Button> {
        let fresh = self.pressed_keys.insert(button);
        if fresh {
            self.pressed_vec.push(button);
        }
        (fresh && !repeat).then_some(button)
    }

    fn release(&mut self, button: Button) {
        if self.pressed_keys.remove(&button) {
            self.pressed_vec.retain(|&b| b != button);
        }
    }

    fn add_mouse_motion(&mut self, dx: f32, dy: f32) {
        if self.pointer_captured {
            self.mouse_delta.0 += dx;
            self.mouse_delta.1 += dy;
        }
    }

    /// Map Winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyL => Some(Button::KeyL),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            KeyCode::Escape => Some(Button::Escape),
            KeyCode::Tab => Some(Button::Tab),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }

    fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    fn is_pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    fn set_pointer_captured(&mut self, captured: bool) {
        self.pointer_captured = captured;
        if !captured {
            self.mouse_delta = (0.0, 0.0);
        }
    }
}
