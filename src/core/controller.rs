/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Shift,
    Escape,
    Tab,
    KeyL,
}

impl Button {
    /// Buttons that drive camera translation, paired with the local axis they move along
    pub const MOVEMENT: [(Button, [f32; 3]); 4] = [
        (Button::KeyW, [0.0, 0.0, 1.0]),
        (Button::KeyS, [0.0, 0.0, -1.0]),
        (Button::KeyA, [-1.0, 0.0, 0.0]),
        (Button::KeyD, [1.0, 0.0, 0.0]),
    ];

    /// Held to multiply movement speed
    pub const SPEED_MODIFIER: Button = Button::Shift;
}

/// Controller - key and mouse state provider sampled once per frame
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Mouse movement accumulated during the current frame, in pixels
    fn mouse_delta(&self) -> (f32, f32);

    /// Whether mouse movement is being interpreted as look input
    fn is_pointer_captured(&self) -> bool;

    /// Enter or leave pointer capture
    fn set_pointer_captured(&mut self, captured: bool);
}
