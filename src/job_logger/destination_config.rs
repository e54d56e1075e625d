use std::path::{Path, PathBuf};

use crate::{
    config::{SettingValue, Settings},
    job_logger::{
        destinations::Destinations,
        logger_error::{DatabaseConfigFault, FileConfigFault, LoggerError},
    },
};

/// Settings keys, canonical name first.
pub mod keys {
    pub const LOG_DIRECTORY: &[&str] = &["logDirectory", "logFileFolder"];
    pub const USER: &[&str] = &["user", "userName"];
    pub const PASSWORD: &[&str] = &["password"];
    pub const DRIVER: &[&str] = &["driverId", "dbms"];
    pub const HOST: &[&str] = &["host", "serverName"];
    pub const PORT: &[&str] = &["port"];
    pub const DATABASE: &[&str] = &["database"];
}

/// Database name used when the settings don't carry one.
pub const DEFAULT_DATABASE: &str = "joblogger.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    pub log_directory: PathBuf,
}

impl FileConfig {
    pub fn new(log_directory: impl Into<PathBuf>) -> Self {
        Self {
            log_directory: log_directory.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, LoggerError> {
        match settings.lookup(keys::LOG_DIRECTORY) {
            None | Some(SettingValue::Null) => {
                Err(LoggerError::InvalidFileConfig(FileConfigFault::Missing))
            }
            Some(SettingValue::Text(dir)) if is_blank_path(Path::new(dir)) => {
                Err(LoggerError::InvalidFileConfig(FileConfigFault::Missing))
            }
            Some(SettingValue::Text(dir)) => Ok(Self::new(dir)),
            Some(_) => Err(LoggerError::InvalidFileConfig(FileConfigFault::WrongType)),
        }
    }
}

// An empty directory would resolve against the working directory.
fn is_blank_path(dir: &Path) -> bool {
    dir.to_string_lossy().trim().is_empty()
}

#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    /// Id of the registered driver, e.g. `sqlite`.
    pub driver: String,
    /// Server name, or the directory holding the database file for
    /// file-based drivers.
    pub host: String,
    pub port: Option<u16>,
    pub database: String,
}

// Keep the password out of debug output.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"***")
            .field("driver", &self.driver)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

impl DatabaseConfig {
    pub fn new(
        driver: impl Into<String>,
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
            driver: driver.into(),
            host: host.into(),
            port: None,
            database: DEFAULT_DATABASE.to_string(),
        }
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// First required key whose value is blank text. The password may be empty.
    fn blank_key(&self) -> Option<&'static str> {
        [
            (keys::USER[0], &self.user),
            (keys::DRIVER[0], &self.driver),
            (keys::HOST[0], &self.host),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(key, _)| key)
    }

    fn check(&self) -> Result<(), LoggerError> {
        if let Some(key) = self.blank_key() {
            return Err(LoggerError::InvalidDatabaseConfig(
                DatabaseConfigFault::Missing(key),
            ));
        }
        if self.database.trim().is_empty() {
            return Err(LoggerError::InvalidDatabaseConfig(
                DatabaseConfigFault::WrongType(keys::DATABASE[0]),
            ));
        }
        Ok(())
    }

    /// Every required key must be present before any of them is type-checked,
    /// so a missing key is reported even when another one has a bad type.
    /// Blank text counts as missing for user, driver and host.
    pub fn from_settings(settings: &Settings) -> Result<Self, LoggerError> {
        const REQUIRED: [&[&str]; 4] = [keys::USER, keys::PASSWORD, keys::DRIVER, keys::HOST];

        for key in REQUIRED {
            let absent = match settings.lookup(key) {
                None | Some(SettingValue::Null) => true,
                Some(SettingValue::Text(value)) => {
                    key != keys::PASSWORD && value.trim().is_empty()
                }
                Some(_) => false,
            };
            if absent {
                return Err(LoggerError::InvalidDatabaseConfig(
                    DatabaseConfigFault::Missing(key[0]),
                ));
            }
        }

        let text = |key: &'static [&'static str]| -> Result<String, LoggerError> {
            settings
                .lookup(key)
                .and_then(SettingValue::as_text)
                .map(str::to_string)
                .ok_or(LoggerError::InvalidDatabaseConfig(
                    DatabaseConfigFault::WrongType(key[0]),
                ))
        };

        let user = text(keys::USER)?;
        let password = text(keys::PASSWORD)?;
        let driver = text(keys::DRIVER)?;
        let host = text(keys::HOST)?;

        let port = match settings.lookup(keys::PORT) {
            None | Some(SettingValue::Null) => None,
            Some(SettingValue::Text(p)) => Some(p.trim().parse::<u16>().map_err(|_| {
                LoggerError::InvalidDatabaseConfig(DatabaseConfigFault::WrongType(keys::PORT[0]))
            })?),
            Some(SettingValue::Integer(p)) => Some(u16::try_from(*p).map_err(|_| {
                LoggerError::InvalidDatabaseConfig(DatabaseConfigFault::WrongType(keys::PORT[0]))
            })?),
            Some(SettingValue::Bool(_)) => {
                return Err(LoggerError::InvalidDatabaseConfig(
                    DatabaseConfigFault::WrongType(keys::PORT[0]),
                ));
            }
        };

        let database = match settings.lookup(keys::DATABASE) {
            None | Some(SettingValue::Null) => DEFAULT_DATABASE.to_string(),
            Some(SettingValue::Text(name)) => name.clone(),
            Some(_) => {
                return Err(LoggerError::InvalidDatabaseConfig(
                    DatabaseConfigFault::WrongType(keys::DATABASE[0]),
                ));
            }
        };

        let config = Self {
            user,
            password,
            driver,
            host,
            port,
            database,
        };
        config.check()?;
        Ok(config)
    }
}

/// Typed configuration for the destinations that need one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationConfig {
    pub file: Option<FileConfig>,
    pub database: Option<DatabaseConfig>,
}

impl DestinationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, file: FileConfig) -> Self {
        self.file = Some(file);
        self
    }

    #[must_use]
    pub fn with_database(mut self, database: DatabaseConfig) -> Self {
        self.database = Some(database);
        self
    }

    /// Converts `settings` for the selected destinations only; keys belonging
    /// to unselected destinations are never looked at.
    pub fn from_settings(
        settings: Option<&Settings>,
        destinations: Destinations,
    ) -> Result<Self, LoggerError> {
        let mut config = Self::default();

        if destinations.contains(Destinations::FILE) {
            let s = settings.ok_or(LoggerError::InvalidFileConfig(FileConfigFault::Blank))?;
            config.file = Some(FileConfig::from_settings(s)?);
        }
        if destinations.contains(Destinations::DATABASE) {
            let s = settings.ok_or(LoggerError::InvalidDatabaseConfig(
                DatabaseConfigFault::Blank,
            ))?;
            config.database = Some(DatabaseConfig::from_settings(s)?);
        }

        Ok(config)
    }

    pub(crate) fn require_file(config: Option<&Self>) -> Result<&FileConfig, LoggerError> {
        let config = config.ok_or(LoggerError::InvalidFileConfig(FileConfigFault::Blank))?;
        match &config.file {
            Some(file) if !is_blank_path(&file.log_directory) => Ok(file),
            _ => Err(LoggerError::InvalidFileConfig(FileConfigFault::Missing)),
        }
    }

    pub(crate) fn require_database(
        config: Option<&Self>,
    ) -> Result<&DatabaseConfig, LoggerError> {
        let config = config.ok_or(LoggerError::InvalidDatabaseConfig(
            DatabaseConfigFault::Blank,
        ))?;
        let database = config
            .database
            .as_ref()
            .ok_or(LoggerError::InvalidDatabaseConfig(
                DatabaseConfigFault::Blank,
            ))?;
        database.check()?;
        Ok(database)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    fn full_db_settings() -> Settings {
        Settings::new()
            .with("userName", "information")
            .with("password", "information")
            .with("dbms", "sqlite")
            .with("serverName", "/tmp")
    }

    fn db_fault(settings: &Settings) -> DatabaseConfigFault {
        match DatabaseConfig::from_settings(settings) {
            Err(LoggerError::InvalidDatabaseConfig(f)) => f,
            other => panic!("expected InvalidDatabaseConfig, got {other:?}"),
        }
    }

    #[test]
    fn file_directory_missing_null_or_mistyped() {
        let missing = Settings::new();
        let null = Settings::new().with_null("logDirectory");
        let number = Settings::new().with("logDirectory", 1_i64);
        let flag = Settings::new().with("logFileFolder", true);

        for (s, want) in [
            (&missing, FileConfigFault::Missing),
            (&null, FileConfigFault::Missing),
            (&number, FileConfigFault::WrongType),
            (&flag, FileConfigFault::WrongType),
        ] {
            match FileConfig::from_settings(s) {
                Err(LoggerError::InvalidFileConfig(f)) => assert_eq!(f, want),
                other => panic!("expected {want:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn file_directory_accepts_alias() {
        let s = Settings::new().with("logFileFolder", "/var/log");
        let cfg = FileConfig::from_settings(&s).unwrap();
        assert_eq!(cfg.log_directory, PathBuf::from("/var/log"));
    }

    #[test]
    fn each_required_database_key_is_reported_when_missing() {
        for (alias, canonical) in [
            ("userName", "user"),
            ("password", "password"),
            ("dbms", "driverId"),
            ("serverName", "host"),
        ] {
            let mut s = full_db_settings();
            s.remove(alias);
            assert_eq!(db_fault(&s), DatabaseConfigFault::Missing(canonical));

            let mut s = full_db_settings();
            s.insert(alias, SettingValue::Null);
            assert_eq!(db_fault(&s), DatabaseConfigFault::Missing(canonical));
        }
    }

    #[test]
    fn missing_wins_over_wrong_type() {
        let mut s = full_db_settings().with("userName", 7_i64);
        s.remove("password");
        assert_eq!(db_fault(&s), DatabaseConfigFault::Missing("password"));
    }

    #[test]
    fn wrong_typed_database_values_are_rejected() {
        assert_eq!(
            db_fault(&full_db_settings().with("userName", 7_i64)),
            DatabaseConfigFault::WrongType("user")
        );
        assert_eq!(
            db_fault(&full_db_settings().with("serverName", false)),
            DatabaseConfigFault::WrongType("host")
        );
        assert_eq!(
            db_fault(&full_db_settings().with("port", "http")),
            DatabaseConfigFault::WrongType("port")
        );
        assert_eq!(
            db_fault(&full_db_settings().with("port", 70_000_i64)),
            DatabaseConfigFault::WrongType("port")
        );
        assert_eq!(
            db_fault(&full_db_settings().with("database", 3_i64)),
            DatabaseConfigFault::WrongType("database")
        );
    }

    #[test]
    fn port_accepts_text_or_integer() {
        let text = DatabaseConfig::from_settings(&full_db_settings().with("port", "5432")).unwrap();
        assert_eq!(text.port, Some(5432));
        let int = DatabaseConfig::from_settings(&full_db_settings().with("port", 9092_i64)).unwrap();
        assert_eq!(int.port, Some(9092));
        let none = DatabaseConfig::from_settings(&full_db_settings()).unwrap();
        assert_eq!(none.port, None);
        assert_eq!(none.database, DEFAULT_DATABASE);
    }

    #[test]
    fn unselected_destinations_are_not_validated() {
        let s = Settings::new().with("logDirectory", 5_i64);
        let cfg = DestinationConfig::from_settings(Some(&s), Destinations::CONSOLE).unwrap();
        assert_eq!(cfg, DestinationConfig::default());
    }

    #[test]
    fn absent_settings_are_blank_for_each_destination() {
        match DestinationConfig::from_settings(None, Destinations::FILE) {
            Err(LoggerError::InvalidFileConfig(FileConfigFault::Blank)) => {}
            other => panic!("expected file Blank, got {other:?}"),
        }
        match DestinationConfig::from_settings(None, Destinations::DATABASE) {
            Err(LoggerError::InvalidDatabaseConfig(DatabaseConfigFault::Blank)) => {}
            other => panic!("expected database Blank, got {other:?}"),
        }
    }

    #[test]
    fn blank_file_directory_is_missing() {
        for dir in ["", "   "] {
            match FileConfig::from_settings(&Settings::new().with("logDirectory", dir)) {
                Err(LoggerError::InvalidFileConfig(FileConfigFault::Missing)) => {}
                other => panic!("expected Missing for {dir:?}, got {other:?}"),
            }

            let typed = DestinationConfig::new().with_file(FileConfig::new(dir));
            match DestinationConfig::require_file(Some(&typed)) {
                Err(LoggerError::InvalidFileConfig(FileConfigFault::Missing)) => {}
                other => panic!("expected Missing for typed {dir:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn blank_database_values_are_missing() {
        for (alias, canonical) in [
            ("userName", "user"),
            ("dbms", "driverId"),
            ("serverName", "host"),
        ] {
            assert_eq!(
                db_fault(&full_db_settings().with(alias, "  ")),
                DatabaseConfigFault::Missing(canonical)
            );
        }
        assert_eq!(
            db_fault(&full_db_settings().with("database", "")),
            DatabaseConfigFault::WrongType("database")
        );

        let empty_password = full_db_settings().with("password", "");
        assert!(DatabaseConfig::from_settings(&empty_password).is_ok());
    }

    #[test]
    fn typed_database_config_is_checked_too() {
        let no_host =
            DestinationConfig::new().with_database(DatabaseConfig::new("sqlite", "", "u", "p"));
        match DestinationConfig::require_database(Some(&no_host)) {
            Err(LoggerError::InvalidDatabaseConfig(DatabaseConfigFault::Missing("host"))) => {}
            other => panic!("expected missing host, got {other:?}"),
        }

        match DestinationConfig::require_database(Some(&DestinationConfig::new())) {
            Err(LoggerError::InvalidDatabaseConfig(DatabaseConfigFault::Blank)) => {}
            other => panic!("expected Blank, got {other:?}"),
        }
    }

    #[test]
    fn debug_output_hides_password() {
        let cfg = DatabaseConfig::new("sqlite", "/tmp", "jobs", "hunter2");
        let shown = format!("{cfg:?}");
        assert!(!shown.contains("hunter2"), "{shown}");
    }
}
