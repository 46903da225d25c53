//! Logger factory
//!
//! [`initialize_logger`] turns a [`LoggerConfig`] into a ready-to-use handle
//! writing the fixed line format to the console, a file, or both.

use super::{
    error::{LoggerError, Result},
    file_options::FileOptions,
    log_level::LogLevel,
    logger::Logger,
    registry::{self, LoggerRegistry},
};
use crate::appenders::{ConsoleAppender, FileAppender};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

/// Log file used when no path is configured
pub const DEFAULT_LOG_FILE: &str = "debug.log";

/// Settings for [`initialize_logger`].
///
/// Defaults: root logger, `Debug` threshold, console and file output, file
/// `debug.log` opened for appending.
///
/// # Examples
///
/// ```no_run
/// use youtility::{initialize_logger, LogLevel, LoggerConfig};
///
/// let logger = initialize_logger(
///     LoggerConfig::named("ingest")
///         .with_level(LogLevel::Info)
///         .with_file_path("ingest.log"),
/// )?;
/// logger.info("ready");
/// # Ok::<(), youtility::LoggerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub name: Option<String>,
    pub level: LogLevel,
    pub file_path: PathBuf,
    pub console_enabled: bool,
    pub file_enabled: bool,
    pub file_options: FileOptions,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: None,
            level: LogLevel::Debug,
            file_path: PathBuf::from(DEFAULT_LOG_FILE),
            console_enabled: true,
            file_enabled: true,
            file_options: FileOptions::default(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings for the logger called `name`
    pub fn named(name: impl Into<String>) -> Self {
        Self::default().with_name(name)
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LoggerConfig = serde_json::from_str(json)?;
        config.file_options.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the threshold from a numeric severity (10, 20, 30, 40 or 50)
    pub fn with_severity(mut self, severity: u8) -> Result<Self> {
        self.level = LogLevel::from_severity(severity)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = path.into();
        self
    }

    #[must_use]
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_file(mut self, enabled: bool) -> Self {
        self.file_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_file_options(mut self, options: FileOptions) -> Self {
        self.file_options = options;
        self
    }

    /// Configure the named logger in the process-wide registry
    pub fn initialize(self) -> Result<Arc<Logger>> {
        self.initialize_in(registry::global())
    }

    /// Configure the named logger in `registry`.
    ///
    /// The handle's level and propagation are updated in place and the new
    /// destinations are appended after any it already has.
    pub fn initialize_in(self, registry: &LoggerRegistry) -> Result<Arc<Logger>> {
        self.file_options.validate()?;

        let logger = registry.get(self.name.as_deref());
        logger.set_level(self.level);
        logger.set_propagate(false);

        let file_appender = if self.file_enabled {
            let appender = FileAppender::open(&self.file_path, self.file_options)
                .map_err(|e| match e {
                    LoggerError::IoOperation {
                        operation, source, ..
                    } => LoggerError::io_operation(
                        operation,
                        format!(
                            "cannot open '{}' for logger '{}'",
                            self.file_path.display(),
                            logger.name()
                        ),
                        source,
                    ),
                    other => other,
                })?;
            Some(appender.with_min_level(self.level))
        } else {
            None
        };

        let console_appender = if self.console_enabled {
            Some(ConsoleAppender::new().with_min_level(self.level))
        } else {
            None
        };

        if let Some(appender) = file_appender {
            logger.add_appender(Box::new(appender));
        }
        if let Some(appender) = console_appender {
            logger.add_appender(Box::new(appender));
        }

        Ok(logger)
    }
}

/// Build (or reconfigure) a named logger in the process-wide registry.
///
/// Calling this twice with the same name adds a second set of destinations
/// to the same handle, so each record is then written twice. Use a fresh
/// name for an independent logger.
pub fn initialize_logger(config: LoggerConfig) -> Result<Arc<Logger>> {
    config.initialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FileMode;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.name, None);
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.file_path, PathBuf::from("debug.log"));
        assert!(config.console_enabled);
        assert!(config.file_enabled);
        assert_eq!(config.file_options, FileOptions::default());
    }

    #[test]
    fn test_with_severity() {
        let config = LoggerConfig::new().with_severity(40).unwrap();
        assert_eq!(config.level, LogLevel::Error);
        assert!(LoggerConfig::new().with_severity(35).is_err());
    }

    #[test]
    fn test_from_json_str() {
        let config = LoggerConfig::from_json_str(
            r#"{"name": "jobs", "level": 20, "console_enabled": false,
                "file_options": {"mode": "w"}}"#,
        )
        .unwrap();
        assert_eq!(config.name.as_deref(), Some("jobs"));
        assert_eq!(config.level, LogLevel::Info);
        assert!(!config.console_enabled);
        assert!(config.file_enabled);
        assert_eq!(config.file_options.mode, FileMode::Truncate);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = LoggerConfig::from_json_str(r#"{"rotation": "daily"}"#).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_initialize_sets_level_and_propagation() {
        let registry = LoggerRegistry::new();
        let logger = LoggerConfig::named("factory.level")
            .with_level(LogLevel::Warning)
            .with_file(false)
            .initialize_in(&registry)
            .unwrap();

        assert_eq!(logger.level(), LogLevel::Warning);
        assert!(!logger.propagate());
        assert_eq!(logger.appender_names(), vec!["console".to_string()]);
    }

    #[test]
    fn test_file_attached_before_console() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let registry = LoggerRegistry::new();
        let logger = LoggerConfig::named("factory.order")
            .with_file_path(temp_dir.path().join("order.log"))
            .initialize_in(&registry)
            .unwrap();

        assert_eq!(
            logger.appender_names(),
            vec!["file".to_string(), "console".to_string()]
        );
    }

    #[test]
    fn test_disabled_file_is_not_created() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("never.log");
        let registry = LoggerRegistry::new();

        let logger = LoggerConfig::named("factory.nofile")
            .with_file(false)
            .with_console(false)
            .with_file_path(&log_file)
            .initialize_in(&registry)
            .unwrap();
        logger.info("nowhere");

        assert_eq!(logger.appender_count(), 0);
        assert!(!log_file.exists());
    }

    #[test]
    fn test_unwritable_path_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let registry = LoggerRegistry::new();

        let err = LoggerConfig::named("factory.unwritable")
            .with_file_path(temp_dir.path().join("no").join("such").join("dir.log"))
            .initialize_in(&registry)
            .unwrap_err();

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("factory.unwritable"));
        // Nothing half-attached
        let logger = registry.lookup("factory.unwritable").unwrap();
        assert_eq!(logger.appender_count(), 0);
    }

    #[test]
    fn test_bad_encoding_fails_before_touching_registry() {
        let registry = LoggerRegistry::new();
        let err = LoggerConfig::named("factory.encoding")
            .with_file_options(FileOptions::new().with_encoding("cp1252"))
            .initialize_in(&registry)
            .unwrap_err();

        assert!(err.is_config());
        assert!(registry.lookup("factory.encoding").is_none());
    }

    #[test]
    fn test_truncate_mode_via_factory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let log_file = temp_dir.path().join("out.log");
        fs::write(&log_file, "old run\n").unwrap();
        let registry = LoggerRegistry::new();

        let logger = LoggerConfig::named("factory.truncate")
            .with_console(false)
            .with_file_path(&log_file)
            .with_file_options(FileOptions::new().with_mode(FileMode::Truncate))
            .initialize_in(&registry)
            .unwrap();
        logger.info("hi");

        let content = fs::read_to_string(&log_file).unwrap();
        assert!(content.lines().next().unwrap().contains("INFO  hi"));
        assert!(!content.contains("old run"));
    }
}
