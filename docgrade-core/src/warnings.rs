//! Warning sink abstraction for non-fatal scoring diagnostics.

/// Abstraction over warning emission for testability.
#[cfg_attr(test, mockall::automock)]
pub trait WarningSink {
    /// Emit a single warning message.
    fn warn(&self, message: &str);
}

/// Default sink that forwards warnings to the `log` facade.
#[derive(Debug, Default, Clone)]
pub struct LogSink;

impl LogSink {
    /// Create a new log-backed sink.
    pub fn new() -> Self {
        Self
    }
}

impl WarningSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::{LogSink, WarningSink};

    #[test]
    fn log_sink_accepts_messages() {
        // Smoke test: emitting through the facade must not panic even
        // when no logger is installed.
        LogSink::new().warn("unknown doc type");
    }
}
