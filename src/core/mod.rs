pub mod clock;
pub mod controller;
pub mod frame_controller;
pub mod frame_stats;
pub mod input_adapter;
pub mod look;

pub use clock::Clock;
pub use controller::{Button, Controller};
pub use frame_controller::FrameController;
pub use frame_stats::{FrameCounter, FrameReport};
pub use input_adapter::WinitController;
pub use look::{LookState, PITCH_LIMIT};
