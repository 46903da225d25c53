//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::cell::RefCell;
use std::path::Path;

/// Function name recorded when the caller's function cannot be determined
pub const UNKNOWN_FUNCTION: &str = "(unknown function)";

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

/// Get cached thread ID, computing and caching it on first access
fn get_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

/// Get cached thread name, computing and caching it on first access
fn get_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// Where a record was emitted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
    pub function: &'static str,
}

impl Location {
    pub const fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            function,
        }
    }

    /// Location of the `#[track_caller]` caller. The function name is not
    /// available this way and is recorded as [`UNKNOWN_FUNCTION`].
    #[track_caller]
    pub fn caller() -> Self {
        let caller = std::panic::Location::caller();
        Self::new(caller.file(), caller.line(), UNKNOWN_FUNCTION)
    }
}

/// Reduce a `type_name` path of an item nested in a function to that
/// function's bare name. Used by [`function_name!`](crate::function_name).
#[doc(hidden)]
pub fn short_function_name(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix("::__here").unwrap_or(path);
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    /// Base name of the originating source file
    pub file: String,
    pub line: u32,
    pub function: String,
    pub thread_id: String,
    pub thread_name: Option<String>,
}

impl LogEntry {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a record always occupies exactly one line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: LogLevel, message: String, location: Location) -> Self {
        let file = Path::new(location.file)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| location.file.to_string());

        Self {
            level,
            message: Self::sanitize_message(&message),
            timestamp: Local::now(),
            file,
            line: location.line,
            function: location.function.to_string(),
            thread_id: get_thread_id(),
            thread_name: get_thread_name(),
        }
    }

    /// Thread name, or the thread id for unnamed threads
    pub fn thread_label(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(&self.thread_id)
    }
}
