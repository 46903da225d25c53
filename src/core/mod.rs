//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod factory;
pub mod file_options;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use factory::{initialize_logger, LoggerConfig, DEFAULT_LOG_FILE};
pub use file_options::{FileMode, FileOptions};
pub use formatter::LineFormatter;
pub use log_entry::{Location, LogEntry};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use registry::{get_logger, LoggerRegistry, ROOT_LOGGER_NAME};
