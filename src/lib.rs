//! JobLogger writes dated, severity-tagged messages to any combination of the
//! console, a log file and a database table.
//!
//! Each call is validated up front (message text, destinations, severity and
//! the configuration of every selected destination) and then written to the
//! selected destinations in a fixed order: file, console, database. The first
//! failing write is returned to the caller as a [`LoggerError`].
//!
//! ```rust,ignore
//! use joblogger::{Destinations, DestinationConfig, FileConfig, JobLogger, Severity};
//!
//! let logger = JobLogger::default();
//! let config = DestinationConfig::new().with_file(FileConfig::new("/var/log/jobs"));
//! logger.log(Some("export done"), Destinations::FILE, Some(Severity::Info), Some(&config))?;
//! ```

/// Flat key/value settings for destinations.
pub mod config;
/// Message validation and destination fan-out.
pub mod job_logger;
/// Diagnostics of the crate itself.
pub mod log;

pub use config::{SettingValue, Settings};
pub use job_logger::*;
