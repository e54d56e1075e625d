use std::{
    io::{self, Write},
    sync::{Mutex, PoisonError},
};

use crate::job_logger::{log_record::LogRecord, logger_error::LoggerError};

/// Console destination owned by a [`JobLogger`](crate::job_logger::JobLogger).
///
/// Implementations must be safe to share across threads; the dispatcher
/// never synchronizes calls to `publish` itself.
pub trait ConsoleSink: Send + Sync {
    /// Name printed in front of every line.
    fn name(&self) -> &str;
    fn publish(&self, record: &LogRecord) -> Result<(), LoggerError>;
}

/// Console sink over any writer, stderr by default.
///
/// Lines look like `<name> <LABEL>: <record text>`.
#[derive(Debug)]
pub struct WriterConsole<W: Write + Send> {
    name: String,
    out: Mutex<W>,
}

impl WriterConsole<io::Stderr> {
    pub fn stderr(name: impl Into<String>) -> Self {
        Self::new(name, io::stderr())
    }
}

impl<W: Write + Send> WriterConsole<W> {
    pub fn new(name: impl Into<String>, out: W) -> Self {
        Self {
            name: name.into(),
            out: Mutex::new(out),
        }
    }

    /// Consumes the sink and returns the writer, e.g. to inspect a buffer.
    pub fn into_inner(self) -> Result<W, LoggerError> {
        self.out
            .into_inner()
            .map_err(|_| LoggerError::ConsoleAccessDenied("console lock poisoned".into()))
    }
}

impl<W: Write + Send> ConsoleSink for WriterConsole<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn publish(&self, record: &LogRecord) -> Result<(), LoggerError> {
        // A panic mid-write may have left a partial line behind; refuse the sink.
        let mut out = self
            .out
            .lock()
            .map_err(|_| LoggerError::ConsoleAccessDenied("console lock poisoned".into()))?;
        writeln!(out, "{} {}: {}", self.name, record.severity.label(), record.text)
            .and_then(|()| out.flush())
            .map_err(|e| LoggerError::ConsoleAccessDenied(e.to_string()))
    }
}

/// Console sink that keeps every published record in memory.
///
/// Useful in tests and for embedding applications that render the console
/// themselves.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    name: String,
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingConsole {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn last(&self) -> Option<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl ConsoleSink for RecordingConsole {
    fn name(&self) -> &str {
        &self.name
    }

    fn publish(&self, record: &LogRecord) -> Result<(), LoggerError> {
        self.records
            .lock()
            .map_err(|_| LoggerError::ConsoleAccessDenied("console lock poisoned".into()))?
            .push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::job_logger::severity::Severity;
    use chrono::NaiveDate;

    fn record(severity: Severity, msg: &str) -> LogRecord {
        LogRecord::new(
            severity,
            msg,
            NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid date"),
        )
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writer_console_prefixes_name_and_label() {
        let console = WriterConsole::new("MyLog", Vec::new());
        console
            .publish(&record(Severity::Warning, "careful"))
            .expect("publish");
        console
            .publish(&record(Severity::Info, "fine"))
            .expect("publish");

        let out = String::from_utf8(console.into_inner().unwrap()).unwrap();
        assert_eq!(
            out,
            "MyLog WARNING: warning January 2, 2025 careful\nMyLog INFO: message January 2, 2025 fine\n"
        );
    }

    #[test]
    fn write_fault_is_console_access_denied() {
        let console = WriterConsole::new("MyLog", BrokenPipe);
        match console.publish(&record(Severity::Error, "x")) {
            Err(LoggerError::ConsoleAccessDenied(_)) => {}
            other => panic!("expected ConsoleAccessDenied, got {other:?}"),
        }
    }

    #[test]
    fn poisoned_console_is_refused() {
        let console = std::sync::Arc::new(WriterConsole::new("MyLog", Vec::new()));
        let c = std::sync::Arc::clone(&console);
        let _ = std::thread::spawn(move || {
            let _g = c.out.lock().unwrap();
            panic!("poison the console lock");
        })
        .join();

        match console.publish(&record(Severity::Info, "after panic")) {
            Err(LoggerError::ConsoleAccessDenied(reason)) => assert!(reason.contains("poisoned")),
            other => panic!("expected ConsoleAccessDenied, got {other:?}"),
        }
    }

    #[test]
    fn recording_console_keeps_order() {
        let console = RecordingConsole::new("MyLog");
        console.publish(&record(Severity::Info, "a")).unwrap();
        console.publish(&record(Severity::Error, "b")).unwrap();

        let records = console.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].severity, Severity::Info);
        assert_eq!(console.last().unwrap().text, "error January 2, 2025 b");
        assert_eq!(console.name(), "MyLog");
    }
}
