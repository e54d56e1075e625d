use std::{fmt, io, path::PathBuf};

/// Why the message text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFault {
    Null,
    Blank,
}

/// Why the request as a whole was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationFault {
    NoDestination,
    NoSeverity,
}

/// Why the file destination settings were rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileConfigFault {
    /// No settings at all.
    Blank,
    /// Directory key absent, null or blank.
    Missing,
    /// Directory value is not text.
    WrongType,
}

/// Why the database destination settings were rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseConfigFault {
    /// No database settings at all.
    Blank,
    /// A required key is absent, null or blank.
    Missing(&'static str),
    /// A key holds a value of the wrong type.
    WrongType(&'static str),
}

/// Every way a [`JobLogger`](crate::job_logger::JobLogger) call can fail.
#[derive(Debug)]
pub enum LoggerError {
    InvalidMessage(MessageFault),
    InvalidConfiguration(ConfigurationFault),
    InvalidFileConfig(FileConfigFault),
    InvalidDatabaseConfig(DatabaseConfigFault),
    FileIo { path: PathBuf, source: io::Error },
    FileAccessDenied { path: PathBuf, source: io::Error },
    ConsoleAccessDenied(String),
    DatabaseConnection(String),
    DatabaseTimeout(String),
}

impl LoggerError {
    /// Maps an I/O fault on `path` to the file variant matching its kind.
    pub(crate) fn from_file_io(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::FileAccessDenied { path, source }
        } else {
            Self::FileIo { path, source }
        }
    }
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use LoggerError::*;
        match self {
            InvalidMessage(MessageFault::Null) => write!(f, "The message cannot be null"),
            InvalidMessage(MessageFault::Blank) => {
                write!(f, "The message cannot contain only white space")
            }
            InvalidConfiguration(ConfigurationFault::NoDestination) => {
                write!(f, "Invalid configuration: no destination selected")
            }
            InvalidConfiguration(ConfigurationFault::NoSeverity) => {
                write!(f, "Error or Warning or Message must be specified")
            }
            InvalidFileConfig(FileConfigFault::Blank) => {
                write!(f, "File parameter cannot be blank")
            }
            InvalidFileConfig(FileConfigFault::Missing) => {
                write!(f, "File parameter has not been specified")
            }
            InvalidFileConfig(FileConfigFault::WrongType) => {
                write!(f, "File parameter must be a valid location")
            }
            InvalidDatabaseConfig(DatabaseConfigFault::Blank) => {
                write!(f, "Database parameters cannot be blank")
            }
            InvalidDatabaseConfig(DatabaseConfigFault::Missing(key)) => write!(
                f,
                "Not all the required database parameters have been specified (missing `{key}`)"
            ),
            InvalidDatabaseConfig(DatabaseConfigFault::WrongType(key)) => {
                write!(f, "Database parameters must be valid data (bad `{key}`)")
            }
            FileIo { path, source } => write!(
                f,
                "An error has occurred trying to create, open a file {}: {source}",
                path.display()
            ),
            FileAccessDenied { path, source } => write!(
                f,
                "A security error has occurred with the file {}: {source}",
                path.display()
            ),
            ConsoleAccessDenied(reason) => {
                write!(f, "There was an error trying to access the console: {reason}")
            }
            DatabaseConnection(reason) => write!(
                f,
                "Cannot create database connection or perform DML instruction: {reason}"
            ),
            DatabaseTimeout(reason) => write!(
                f,
                "Timeout occurred when attempting to use the DB connection: {reason}"
            ),
        }
    }
}

impl std::error::Error for LoggerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileIo { source, .. } | Self::FileAccessDenied { source, .. } => Some(source),
            _ => None,
        }
    }
}
