use std::io::Write;

use crate::log::{log_level::LogLevel, log_sink::LogSink};

/// Writes diagnostics to stderr as `[LEVEL] target | message`.
///
/// Messages below `min_level` are discarded at runtime, on top of whatever the
/// `log-*` features already compiled out.
#[derive(Debug, Clone)]
pub struct StderrLogSink {
    min_level: LogLevel,
}

impl StderrLogSink {
    #[must_use]
    pub const fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }
}

impl Default for StderrLogSink {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl LogSink for StderrLogSink {
    fn log(&self, level: LogLevel, msg: &str, target: &'static str) {
        if level < self.min_level {
            return;
        }
        // Diagnostics must never fail the caller.
        let _ = writeln!(std::io::stderr().lock(), "[{level}] {target} | {msg}");
    }
}
