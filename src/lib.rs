//! # Youtility
//!
//! Two small developer utilities:
//!
//! - [`initialize_logger`]: build a named, process-wide logger that writes a
//!   fixed one-line format to standard output and/or a file.
//! - [`timer`] / [`timed!`]: wrap a function so every successful call logs
//!   its wall-clock duration on the `"Performance Timer"` logger.
//!
//! ```no_run
//! use youtility::{info, initialize_logger, timed, LoggerConfig};
//!
//! fn compute(n: u64) -> u64 {
//!     (1..=n).sum()
//! }
//!
//! # fn main() -> youtility::Result<()> {
//! let logger = initialize_logger(LoggerConfig::named("app").with_file(false))?;
//! info!(logger, "starting with {} workers", 4);
//!
//! let compute = timed!(compute)?;
//! assert_eq!(compute.call(10), 55);
//! # Ok(())
//! # }
//! ```

pub mod appenders;
pub mod core;
pub mod macros;
pub mod timer;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender};
    pub use crate::core::{
        get_logger, initialize_logger, Appender, FileMode, FileOptions, LineFormatter, Location,
        LogEntry, LogLevel, Logger, LoggerConfig, LoggerError, LoggerMetrics, LoggerRegistry,
        Result,
    };
    pub use crate::timer::{performance_logger, timer, Timed, PERFORMANCE_LOGGER_NAME};
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    get_logger, initialize_logger, Appender, FileMode, FileOptions, LineFormatter, Location,
    LogEntry, LogLevel, Logger, LoggerConfig, LoggerError, LoggerMetrics, LoggerRegistry, Result,
    DEFAULT_LOG_FILE, ROOT_LOGGER_NAME,
};
pub use timer::{performance_logger, timer, Timed, PERFORMANCE_LOGGER_NAME};
