//! Named logger handle

use super::{
    appender::Appender,
    error::Result,
    log_entry::{Location, LogEntry},
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A named sink that filters records by level and routes them to its
/// destinations.
///
/// Handles obtained through [`initialize_logger`](crate::initialize_logger)
/// are shared process-wide: every holder of the same name sees level changes
/// and added destinations made by any other holder.
pub struct Logger {
    name: String,
    min_level: RwLock<LogLevel>,
    propagate: AtomicBool,
    parent: RwLock<Option<Arc<Logger>>>,
    appenders: RwLock<Vec<Box<dyn Appender>>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create an unregistered logger with no destinations.
    ///
    /// It starts at `Debug`, propagates, and has no parent until one is set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_level: RwLock::new(LogLevel::Debug),
            propagate: AtomicBool::new(true),
            parent: RwLock::new(None),
            appenders: RwLock::new(Vec::new()),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// Whether records are also offered to the parent's destinations
    pub fn propagate(&self) -> bool {
        self.propagate.load(Ordering::Acquire)
    }

    pub fn set_propagate(&self, propagate: bool) {
        self.propagate.store(propagate, Ordering::Release);
    }

    pub fn parent(&self) -> Option<Arc<Logger>> {
        self.parent.read().clone()
    }

    pub fn set_parent(&self, parent: Option<Arc<Logger>>) {
        *self.parent.write() = parent;
    }

    pub fn add_appender(&self, appender: Box<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    /// Names of the attached destinations, in attachment order
    pub fn appender_names(&self) -> Vec<String> {
        self.appenders
            .read()
            .iter()
            .map(|appender| appender.name().to_string())
            .collect()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_at(level, Location::caller(), message);
    }

    /// Emit a record attributed to `location`.
    ///
    /// The logging macros call this with the enclosing function's name.
    pub fn log_at(&self, level: LogLevel, location: Location, message: impl Into<String>) {
        if !self.is_enabled_for(level) {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(level, message.into(), location);
        let mut has_error = self.dispatch(&entry);

        let mut next = if self.propagate() { self.parent() } else { None };
        while let Some(logger) = next {
            has_error |= logger.dispatch(&entry);
            next = if logger.propagate() { logger.parent() } else { None };
        }

        if has_error {
            self.metrics.record_failed();
        } else {
            self.metrics.record_logged();
        }
    }

    /// Offer a record to this logger's own destinations.
    ///
    /// Each appender call is isolated so a failing or panicking destination
    /// does not keep the record from the others. Returns true if any failed.
    fn dispatch(&self, entry: &LogEntry) -> bool {
        let mut appenders = self.appenders.write();
        let mut has_error = false;

        for (idx, appender) in appenders.iter_mut().enumerate() {
            if !appender.accepts(entry.level) {
                continue;
            }

            let append_result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                appender.append(entry)
            }));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Logger '{}' appender #{} failed: {}",
                        self.name, idx, e
                    );
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Logger '{}' appender #{} panicked: {}. \
                         Other appenders continue to function.",
                        self.name, idx, panic_msg
                    );
                    has_error = true;
                }
            }
        }

        has_error
    }

    pub fn flush(&self) -> Result<()> {
        let mut appenders = self.appenders.write();
        for appender in appenders.iter_mut() {
            appender.flush()?;
        }
        Ok(())
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("propagate", &self.propagate())
            .field("appenders", &self.appender_names())
            .field(
                "parent",
                &self.parent.read().as_ref().map(|parent| parent.name().to_string()),
            )
            .finish()
    }
}
