/// Log target used for periodic frame statistics
pub const STATS_TARGET: &str = "first_app::stats";

/// Logging sink for human-readable reports
pub trait Logger {
    fn info(&self, message: &str);
}

/// Forwards to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl Logger for LogSink {
    fn info(&self, message: &str) {
        log::info!(target: STATS_TARGET, "{}", message);
    }
}
