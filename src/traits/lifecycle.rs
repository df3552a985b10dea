/// Application lifecycle hooks available to input handlers
pub trait Lifecycle {
    /// Ask the host loop to terminate after the current event
    fn request_exit(&mut self);
}

/// Lifecycle that records the request for the event loop to poll
#[derive(Debug, Default, Clone, Copy)]
pub struct ExitFlag {
    requested: bool,
}

impl ExitFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_requested(&self) -> bool {
        self.requested
    }
}

impl Lifecycle for ExitFlag {
    fn request_exit(&mut self) {
        self.requested = true;
    }
}
