use std::fmt;

/// Severity levels for the crate's own diagnostic output.
///
/// These are not the severities of the messages being dispatched; those are
/// [`Severity`](crate::job_logger::Severity).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Very fine-grained events, such as each settings key consulted.
    Trace,
    /// Per-destination progress of a dispatch.
    Debug,
    /// Coarse-grained progress.
    Info,
    /// A destination write failed and the error is being returned.
    Warn,
    /// Something the crate could not report through a `Result`.
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
