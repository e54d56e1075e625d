//! Internal diagnostics: the crate reports its own activity through a
//! [`LogSink`] handed to it by the embedding application.

pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod stderr_log_sink;
pub use log_level::LogLevel;
pub use log_sink::{LogSink, NoopLogSink};
pub use stderr_log_sink::StderrLogSink;
