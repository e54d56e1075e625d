use std::sync::Arc;

use chrono::Local;

use crate::{
    config::Settings,
    job_logger::{
        console_sink::{ConsoleSink, WriterConsole},
        database_writer::{DatabaseDriver, DatabaseWriter},
        destination_config::DestinationConfig,
        destinations::Destinations,
        file_appender::FileAppender,
        log_record::LogRecord,
        log_request::LogRequest,
        logger_error::LoggerError,
        severity::Severity,
    },
    log::{LogSink, NoopLogSink},
    sink_debug, sink_trace, sink_warn,
};

/// Name of the default stderr console.
pub const DEFAULT_CONSOLE_NAME: &str = "joblogger";

/// Validates logging requests and writes them to the selected destinations.
///
/// A `JobLogger` holds no per-call state: destination configuration travels
/// with each call. It is `Send + Sync`; share one behind an `Arc` so that
/// file appends from every thread go through the same per-path locks.
///
/// # Example
///
/// ```rust,ignore
/// let logger = JobLogger::default();
/// let config = DestinationConfig::new().with_file(FileConfig::new("/var/log/jobs"));
/// logger.log(
///     Some("nightly export finished"),
///     Destinations::FILE | Destinations::CONSOLE,
///     Some(Severity::Info),
///     Some(&config),
/// )?;
/// ```
pub struct JobLogger {
    console: Arc<dyn ConsoleSink>,
    files: FileAppender,
    database: DatabaseWriter,
    diag: Arc<dyn LogSink>,
}

impl Default for JobLogger {
    fn default() -> Self {
        Self::new(Arc::new(WriterConsole::stderr(DEFAULT_CONSOLE_NAME)))
    }
}

impl JobLogger {
    /// Creates a dispatcher writing console output to `console`, with the
    /// SQLite driver registered and diagnostics discarded.
    pub fn new(console: Arc<dyn ConsoleSink>) -> Self {
        Self {
            console,
            files: FileAppender::new(),
            database: DatabaseWriter::default(),
            diag: Arc::new(NoopLogSink),
        }
    }

    /// Routes the dispatcher's own diagnostics to `diag`.
    #[must_use]
    pub fn with_diagnostics(mut self, diag: Arc<dyn LogSink>) -> Self {
        self.diag = diag;
        self
    }

    /// Registers an additional database driver, replacing one with the same id.
    #[must_use]
    pub fn with_database_driver(mut self, driver: Arc<dyn DatabaseDriver>) -> Self {
        self.database.register(driver);
        self
    }

    #[must_use]
    pub fn console(&self) -> &Arc<dyn ConsoleSink> {
        &self.console
    }

    /// Validates and writes one message.
    ///
    /// # Errors
    ///
    /// Validation faults are returned before any destination is touched.
    /// After that, the first failing destination write is returned and the
    /// remaining destinations are skipped; earlier writes stay in place.
    pub fn log(
        &self,
        text: Option<&str>,
        destinations: Destinations,
        severity: Option<Severity>,
        config: Option<&DestinationConfig>,
    ) -> Result<(), LoggerError> {
        let request = LogRequest::new(text, destinations, severity)?;
        self.dispatch(&request, config)
    }

    /// Like [`log`](Self::log), with configuration given as untyped settings.
    /// Only the keys of the selected destinations are validated.
    pub fn log_with_settings(
        &self,
        text: Option<&str>,
        destinations: Destinations,
        severity: Option<Severity>,
        settings: Option<&Settings>,
    ) -> Result<(), LoggerError> {
        let request = LogRequest::new(text, destinations, severity)?;
        let config = DestinationConfig::from_settings(settings, request.destinations())?;
        self.dispatch(&request, Some(&config))
    }

    /// Writes an already validated request: file, then console, then database.
    pub fn dispatch(
        &self,
        request: &LogRequest,
        config: Option<&DestinationConfig>,
    ) -> Result<(), LoggerError> {
        let targets = request.destinations();

        // Resolve every destination's configuration before the first write.
        let file = if targets.contains(Destinations::FILE) {
            Some(DestinationConfig::require_file(config)?)
        } else {
            None
        };
        let database = if targets.contains(Destinations::DATABASE) {
            Some(DestinationConfig::require_database(config)?)
        } else {
            None
        };

        let record = LogRecord::new(request.severity(), request.text(), Local::now().date_naive());
        sink_trace!(self.diag, "dispatching {:?} to {:?}", record.text, targets);

        if let Some(file) = file {
            let path = self
                .files
                .append(&file.log_directory, &record)
                .inspect_err(|e| sink_warn!(self.diag, "file write failed: {e}"))?;
            sink_debug!(self.diag, "appended to {}", path.display());
        }

        if targets.contains(Destinations::CONSOLE) {
            self.console
                .publish(&record)
                .inspect_err(|e| sink_warn!(self.diag, "console write failed: {e}"))?;
            sink_debug!(self.diag, "published to console {}", self.console.name());
        }

        if let Some(database) = database {
            self.database
                .insert(database, request.text(), request.severity())
                .inspect_err(|e| sink_warn!(self.diag, "database write failed: {e}"))?;
            sink_debug!(
                self.diag,
                "inserted into {} database at {}",
                database.driver,
                database.host
            );
        }

        Ok(())
    }
}
