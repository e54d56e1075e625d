use crate::job_logger::{
    destinations::Destinations,
    logger_error::{ConfigurationFault, LoggerError, MessageFault},
    severity::Severity,
};

/// A validated logging request. Can only be built through [`LogRequest::new`],
/// so holding one means the text, destination and severity checks passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRequest {
    text: String,
    severity: Severity,
    destinations: Destinations,
}

impl LogRequest {
    /// Checks, in order: text present, text not blank, at least one
    /// destination, a severity. The first failure is returned.
    pub fn new(
        text: Option<&str>,
        destinations: Destinations,
        severity: Option<Severity>,
    ) -> Result<Self, LoggerError> {
        let text = text.ok_or(LoggerError::InvalidMessage(MessageFault::Null))?;
        if text.trim().is_empty() {
            return Err(LoggerError::InvalidMessage(MessageFault::Blank));
        }
        if destinations.is_empty() {
            return Err(LoggerError::InvalidConfiguration(
                ConfigurationFault::NoDestination,
            ));
        }
        let severity = severity.ok_or(LoggerError::InvalidConfiguration(
            ConfigurationFault::NoSeverity,
        ))?;

        Ok(Self {
            text: text.to_owned(),
            severity,
            destinations,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub const fn destinations(&self) -> Destinations {
        self.destinations
    }
}
