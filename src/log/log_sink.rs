use crate::log::log_level::LogLevel;

/// Destination for the crate's diagnostic output.
///
/// `target` is the module that emitted the line, as given by `module_path!()`
/// in the `sink_*!` macros.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str, target: &'static str);
}

/// Discards everything. The default diagnostics sink of a
/// [`JobLogger`](crate::job_logger::JobLogger).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSink for NoopLogSink {
    #[inline]
    fn log(&self, _level: LogLevel, _msg: &str, _target: &'static str) {}
}
