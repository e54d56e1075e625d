use chrono::NaiveDate;

use crate::job_logger::severity::Severity;

/// The line actually written: `<prefix> <long date> <text>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    /// Fully formatted text.
    pub text: String,
}

impl LogRecord {
    #[must_use]
    pub fn new(severity: Severity, message: &str, date: NaiveDate) -> Self {
        Self {
            severity,
            text: format!("{} {} {}", severity.prefix(), long_date(date), message),
        }
    }
}

/// Long-form date, e.g. `October 17, 2026`.
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
