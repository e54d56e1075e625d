use std::fmt;

/// Classification of a dispatched message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Resolves the boolean selector form. The most severe flag wins; no flag
    /// set means no severity.
    #[must_use]
    pub const fn from_flags(message: bool, warning: bool, error: bool) -> Option<Self> {
        if error {
            Some(Self::Error)
        } else if warning {
            Some(Self::Warning)
        } else if message {
            Some(Self::Info)
        } else {
            None
        }
    }

    /// Leading word of the formatted text.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Info => "message",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Tag written in front of console and file lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Code stored in the database severity column.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Info => 1,
            Self::Error => 2,
            Self::Warning => 3,
        }
    }

    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Info),
            2 => Some(Self::Error),
            3 => Some(Self::Warning),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
