//! Validation and fan-out of log messages to the file, console and database
//! destinations.

pub mod console_sink;
pub mod database_writer;
pub mod destination_config;
pub mod destinations;
pub mod dispatcher;
pub mod file_appender;
pub mod log_record;
pub mod log_request;
pub mod logger_error;
pub mod severity;

pub use console_sink::{ConsoleSink, RecordingConsole, WriterConsole};
pub use database_writer::{DatabaseDriver, DatabaseWriter, LOG_TABLE, SqliteDriver};
pub use destination_config::{DatabaseConfig, DestinationConfig, FileConfig};
pub use destinations::Destinations;
pub use dispatcher::JobLogger;
pub use file_appender::{FileAppender, LOG_FILE_NAME};
pub use log_record::{LogRecord, long_date};
pub use log_request::LogRequest;
pub use logger_error::{
    ConfigurationFault, DatabaseConfigFault, FileConfigFault, LoggerError, MessageFault,
};
pub use severity::Severity;
