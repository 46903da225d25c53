//! Logging macros for ergonomic log message formatting.
//!
//! Unlike the plain [`Logger`](crate::Logger) methods, these macros record
//! the name of the function they are invoked from, which fills the function
//! column of the line format.
//!
//! # Examples
//!
//! ```
//! use youtility::prelude::*;
//! use youtility::info;
//!
//! let logger = Logger::new("docs");
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Name of the enclosing function, without its module path.
///
/// ```
/// fn load_settings() -> &'static str {
///     youtility::function_name!()
/// }
/// assert_eq!(load_settings(), "load_settings");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::log_entry::short_function_name(type_name_of(__here))
    }};
}

/// Log a message with automatic formatting.
///
/// ```
/// # use youtility::prelude::*;
/// # let logger = Logger::new("docs");
/// use youtility::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at(
            $level,
            $crate::Location::new(file!(), line!(), $crate::function_name!()),
            format!($($arg)+),
        )
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use youtility::prelude::*;
/// # let logger = Logger::new("docs");
/// use youtility::debug;
/// debug!(logger, "Cache lookup for key {}", "session:42");
/// debug!(logger, "Parsed header");
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use youtility::prelude::*;
/// # let logger = Logger::new("docs");
/// use youtility::info;
/// info!(logger, "Service ready");
/// info!(logger, "Loaded {} rows", 128);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use youtility::prelude::*;
/// # let logger = Logger::new("docs");
/// use youtility::warning;
/// warning!(logger, "Disk usage high");
/// warning!(logger, "Retry {} of {}", 2, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use youtility::prelude::*;
/// # let logger = Logger::new("docs");
/// use youtility::error;
/// error!(logger, "Request failed");
/// error!(logger, "Upstream returned {}", 502);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use youtility::prelude::*;
/// # let logger = Logger::new("docs");
/// use youtility::critical;
/// critical!(logger, "Shutting down");
/// critical!(logger, "Lost {} workers", 3);
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Wrap a function in a [`Timed`](crate::Timed) named after its path.
///
/// The last path segment becomes the name in the timing line, so
/// `timed!(stats::compute)` reports `Time taken for compute`. An explicit
/// logger may be given as a second argument.
///
/// ```no_run
/// fn compute(n: u64) -> u64 {
///     (1..=n).product()
/// }
///
/// let compute = youtility::timed!(compute)?;
/// assert_eq!(compute.call(5), 120);
/// # Ok::<(), youtility::LoggerError>(())
/// ```
#[macro_export]
macro_rules! timed {
    ($func:path) => {
        $crate::timer($crate::timer::last_segment(stringify!($func)), $func)
    };
    ($func:path, $logger:expr) => {
        $crate::Timed::with_logger(
            $crate::timer::last_segment(stringify!($func)),
            $func,
            $logger,
        )
    };
}
