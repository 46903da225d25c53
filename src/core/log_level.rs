//! Log level definitions

use super::error::LoggerError;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a record, on the conventional 10..=50 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Numeric severity (10, 20, 30, 40 or 50)
    #[inline]
    pub fn severity(&self) -> u8 {
        *self as u8
    }

    /// Map a numeric severity onto a level.
    ///
    /// Only the five named severities are accepted.
    pub fn from_severity(severity: u8) -> Result<Self, LoggerError> {
        match severity {
            10 => Ok(LogLevel::Debug),
            20 => Ok(LogLevel::Info),
            30 => Ok(LogLevel::Warning),
            40 => Ok(LogLevel::Error),
            50 => Ok(LogLevel::Critical),
            other => Err(LoggerError::config(
                "LogLevel",
                format!("severity {} is not one of 10, 20, 30, 40, 50", other),
            )),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(severity: u8) -> Result<Self, LoggerError> {
        LogLevel::from_severity(severity)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Severity(u8),
    Name(String),
}

// Configuration may spell a level either as a name or as its severity.
impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match LevelRepr::deserialize(deserializer)? {
            LevelRepr::Severity(n) => LogLevel::from_severity(n).map_err(de::Error::custom),
            LevelRepr::Name(s) => s.parse().map_err(de::Error::custom),
        }
    }
}
