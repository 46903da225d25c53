//! Options forwarded to the file destination when it is opened

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;

/// How the log file is opened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileMode {
    /// Keep existing content and append (`"a"`)
    #[default]
    #[serde(rename = "a", alias = "append")]
    Append,
    /// Truncate on open (`"w"`)
    #[serde(rename = "w", alias = "write", alias = "truncate")]
    Truncate,
    /// Create a new file, failing if it already exists (`"x"`)
    #[serde(rename = "x", alias = "create_new")]
    CreateNew,
}

impl FileMode {
    pub fn open_options(&self) -> OpenOptions {
        let mut options = OpenOptions::new();
        match self {
            FileMode::Append => options.create(true).append(true),
            FileMode::Truncate => options.create(true).write(true).truncate(true),
            FileMode::CreateNew => options.create_new(true).write(true),
        };
        options
    }
}

/// File destination options.
///
/// Each [`LoggerConfig`](crate::LoggerConfig) owns its own value, so options
/// never leak between factory calls.
///
/// # Examples
///
/// ```
/// use youtility::{FileMode, FileOptions};
/// use serde_json::json;
///
/// let options = FileOptions::from_value(json!({"mode": "w", "encoding": "utf-8"})).unwrap();
/// assert_eq!(options.mode, FileMode::Truncate);
///
/// assert!(FileOptions::from_value(json!({"buffering": 1})).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileOptions {
    pub mode: FileMode,
    /// Only UTF-8 is supported; present for configuration compatibility
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Defer opening the file until the first record is written
    pub delay: bool,
}

impl FileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mode(mut self, mode: FileMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: bool) -> Self {
        self.delay = delay;
        self
    }

    /// Build options from an arbitrary key/value mapping.
    ///
    /// Unknown keys and unsupported values are configuration errors.
    pub fn from_map(map: serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        Self::from_value(serde_json::Value::Object(map))
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let options: FileOptions = serde_json::from_value(value)
            .map_err(|e| LoggerError::config("FileOptions", e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ref encoding) = self.encoding {
            let normalized = encoding.to_ascii_lowercase().replace(['-', '_'], "");
            if normalized != "utf8" {
                return Err(LoggerError::config(
                    "FileOptions",
                    format!("unsupported encoding '{}', only UTF-8 is available", encoding),
                ));
            }
        }
        Ok(())
    }
}
