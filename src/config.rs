use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A dynamically typed setting value, as it arrives from a file or a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Key present without a value (`key =`).
    Null,
    Text(String),
    Integer(i64),
    Bool(bool),
}

impl SettingValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Null;
        }
        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            return Self::Text(raw[1..raw.len() - 1].to_string());
        }
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => raw
                .parse::<i64>()
                .map_or_else(|_| Self::Text(raw.to_string()), Self::Integer),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Flat key/value settings for the logging destinations.
///
/// The file format is INI-like. `[section]` headers are accepted for
/// readability but do not namespace keys:
///
/// ```text
/// [File]
/// logDirectory = "/var/log/jobs"
///
/// [Database]
/// driverId = sqlite
/// host = "/var/lib/jobs"
/// user = "jobs"
/// password = "secret"
/// port =
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: HashMap<String, SettingValue>,
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Error reading file {}: {e}", path.display()))?;
        Ok(Self::parse(&content))
    }

    /// Parses settings text. Malformed lines (no `=`) are skipped; a repeated
    /// key keeps its last value.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut values = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                continue;
            }

            if let Some(pos) = line.find('=') {
                let key = line[..pos].trim().to_string();
                if key.is_empty() {
                    continue;
                }
                values.insert(key, SettingValue::parse(line[pos + 1..].trim()));
            }
        }

        Self { values }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn with_null(mut self, key: impl Into<String>) -> Self {
        self.values.insert(key.into(), SettingValue::Null);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<SettingValue> {
        self.values.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.values.get(key)
    }

    /// First value found under any of `keys`, so aliases can be listed in
    /// order of preference.
    #[must_use]
    pub fn lookup(&self, keys: &[&str]) -> Option<&SettingValue> {
        keys.iter().find_map(|k| self.values.get(*k))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
