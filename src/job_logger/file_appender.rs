use std::{
    borrow::Cow,
    collections::HashMap,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use crate::job_logger::{log_record::LogRecord, logger_error::LoggerError};

/// Name of the file created inside the configured log directory.
pub const LOG_FILE_NAME: &str = "logFile.txt";

/// Appends records to `<dir>/logFile.txt`, one line each. Line breaks inside
/// a message are written as `\r` / `\n`.
///
/// Appends to the same file are serialized through a lock keyed by path, and
/// every line goes out in a single `write_all` on a file opened in append
/// mode, so concurrent callers never interleave partial lines.
///
/// The lock key is the canonicalized directory, resolved on every append.
/// One lock is kept per distinct directory for the life of the appender and
/// is never pruned; a logger is expected to write to a handful of directories.
#[derive(Debug, Default)]
pub struct FileAppender {
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl FileAppender {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the log file for `dir`.
    #[must_use]
    pub fn log_file_path(dir: &Path) -> PathBuf {
        dir.join(LOG_FILE_NAME)
    }

    /// Appends `record` and returns the path written. The file is created if
    /// absent; the directory never is.
    pub fn append(&self, dir: &Path, record: &LogRecord) -> Result<PathBuf, LoggerError> {
        let path = Self::log_file_path(dir);
        let line = format!(
            "[{}] {}\n",
            record.severity.label(),
            single_line(&record.text)
        );

        let lock = self.lock_for(&path);
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::from_file_io(path.clone(), e))?;
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| LoggerError::from_file_io(path.clone(), e))?;

        Ok(path)
    }

    /// Number of distinct directories holding a lock.
    #[must_use]
    pub fn tracked_paths(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        // Different spellings of one directory must share a lock.
        let key = path
            .parent()
            .and_then(|dir| fs::canonicalize(dir).ok())
            .map_or_else(|| path.to_path_buf(), |dir| dir.join(LOG_FILE_NAME));

        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(key).or_default())
    }
}

fn single_line(text: &str) -> Cow<'_, str> {
    if text.contains(['\r', '\n']) {
        Cow::Owned(text.replace('\r', "\\r").replace('\n', "\\n"))
    } else {
        Cow::Borrowed(text)
    }
}
