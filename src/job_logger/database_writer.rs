use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use rusqlite::{Connection, ErrorCode, params};

use crate::job_logger::{
    destination_config::DatabaseConfig, logger_error::LoggerError, severity::Severity,
};

/// Table every driver writes into.
pub const LOG_TABLE: &str = "log_entries";

/// A database backend able to store one `(message, severity code)` row.
///
/// Implementations acquire and release their connection inside `insert`;
/// nothing is kept open between calls.
pub trait DatabaseDriver: Send + Sync {
    /// Id matched (case-insensitively) against [`DatabaseConfig::driver`].
    fn id(&self) -> &str;
    fn insert(
        &self,
        config: &DatabaseConfig,
        message: &str,
        severity_code: i64,
    ) -> Result<(), LoggerError>;
}

/// SQLite driver. The database file is `<host>/<database>`; `user`,
/// `password` and `port` are accepted but SQLite has no use for them.
#[derive(Debug, Clone)]
pub struct SqliteDriver {
    busy_timeout: Duration,
}

impl Default for SqliteDriver {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl SqliteDriver {
    pub const ID: &'static str = "sqlite";

    #[must_use]
    pub const fn new(busy_timeout: Duration) -> Self {
        Self { busy_timeout }
    }

    #[must_use]
    pub fn database_path(config: &DatabaseConfig) -> PathBuf {
        Path::new(&config.host).join(&config.database)
    }
}

impl DatabaseDriver for SqliteDriver {
    fn id(&self) -> &str {
        Self::ID
    }

    fn insert(
        &self,
        config: &DatabaseConfig,
        message: &str,
        severity_code: i64,
    ) -> Result<(), LoggerError> {
        let conn = Connection::open(Self::database_path(config)).map_err(classify)?;
        conn.busy_timeout(self.busy_timeout).map_err(classify)?;
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {LOG_TABLE} (message TEXT NOT NULL, severity INTEGER NOT NULL);"
        ))
        .map_err(classify)?;
        {
            let mut stmt = conn
                .prepare(&format!(
                    "INSERT INTO {LOG_TABLE} (message, severity) VALUES (?1, ?2)"
                ))
                .map_err(classify)?;
            stmt.execute(params![message, severity_code])
                .map_err(classify)?;
        }
        conn.close().map_err(|(_, e)| classify(e))
    }
}

fn classify(err: rusqlite::Error) -> LoggerError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if matches!(e.code, ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) =>
        {
            LoggerError::DatabaseTimeout(err.to_string())
        }
        _ => LoggerError::DatabaseConnection(err.to_string()),
    }
}

/// Routes inserts to the driver named by the configuration.
pub struct DatabaseWriter {
    drivers: Vec<Arc<dyn DatabaseDriver>>,
}

impl Default for DatabaseWriter {
    fn default() -> Self {
        let mut writer = Self::empty();
        writer.register(Arc::new(SqliteDriver::default()));
        writer
    }
}

impl fmt::Debug for DatabaseWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.drivers.iter().map(|d| d.id()))
            .finish()
    }
}

impl DatabaseWriter {
    /// A writer with no drivers registered.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            drivers: Vec::new(),
        }
    }

    /// Registers `driver`, replacing any driver with the same id.
    pub fn register(&mut self, driver: Arc<dyn DatabaseDriver>) {
        self.drivers
            .retain(|d| !d.id().eq_ignore_ascii_case(driver.id()));
        self.drivers.push(driver);
    }

    #[must_use]
    pub fn driver(&self, id: &str) -> Option<&Arc<dyn DatabaseDriver>> {
        self.drivers
            .iter()
            .find(|d| d.id().eq_ignore_ascii_case(id.trim()))
    }

    pub fn insert(
        &self,
        config: &DatabaseConfig,
        message: &str,
        severity: Severity,
    ) -> Result<(), LoggerError> {
        let driver = self.driver(&config.driver).ok_or_else(|| {
            LoggerError::DatabaseConnection(format!(
                "no driver registered for `{}`",
                config.driver
            ))
        })?;
        driver.insert(config, message, severity.code())
    }
}
