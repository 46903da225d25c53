//! Wall-clock timing for function calls
//!
//! [`Timed`] wraps a function and, after every successful call, logs
//! `Time taken for <name>: <seconds>s` at INFO with millisecond precision.
//! Calls that panic, or that return `Err` through [`Timed::try_call`], are
//! not logged.

use crate::core::{initialize_logger, Logger, LoggerConfig, Result};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;

/// Name of the logger timing records are written to by default
pub const PERFORMANCE_LOGGER_NAME: &str = "Performance Timer";

static PERFORMANCE_LOGGER: Mutex<Option<Arc<Logger>>> = Mutex::new(None);

/// The shared `"Performance Timer"` logger, configured with factory
/// defaults on first use.
///
/// Later calls return the same handle without reconfiguring it, so its
/// destinations are attached exactly once per process.
pub fn performance_logger() -> Result<Arc<Logger>> {
    let mut slot = PERFORMANCE_LOGGER.lock();
    if let Some(ref logger) = *slot {
        return Ok(Arc::clone(logger));
    }

    let logger = initialize_logger(LoggerConfig::named(PERFORMANCE_LOGGER_NAME))?;
    *slot = Some(Arc::clone(&logger));
    Ok(logger)
}

/// Wrap `func` so each call is timed on the performance logger.
///
/// Arguments are passed as a single value; use a tuple for several.
///
/// ```no_run
/// use youtility::timer;
///
/// let add = timer("add", |(a, b): (i64, i64)| a + b)?;
/// assert_eq!(add.call((2, 3)), 5);
/// # Ok::<(), youtility::LoggerError>(())
/// ```
pub fn timer<F>(name: impl Into<String>, func: F) -> Result<Timed<F>> {
    Ok(Timed::with_logger(name, func, performance_logger()?))
}

/// Last segment of a stringified path, used by [`timed!`](crate::timed)
#[doc(hidden)]
pub fn last_segment(path: &'static str) -> &'static str {
    path.rsplit("::").next().unwrap_or(path).trim()
}

fn log_elapsed(logger: &Logger, name: &str, start: Instant) {
    let elapsed = start.elapsed().as_secs_f64();
    crate::info!(logger, "Time taken for {}: {:.3}s", name, elapsed);
}

/// A function wrapped with timing.
///
/// Return values and panics pass through unchanged.
pub struct Timed<F> {
    name: String,
    func: F,
    logger: Arc<Logger>,
}

impl<F> Timed<F> {
    /// Time `func` into `logger` instead of the performance logger
    pub fn with_logger(name: impl Into<String>, func: F, logger: Arc<Logger>) -> Self {
        Self {
            name: name.into(),
            func,
            logger,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }

    pub fn into_inner(self) -> F {
        self.func
    }

    /// Call a single-argument function
    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        let start = Instant::now();
        let result = (self.func)(args);
        log_elapsed(&self.logger, &self.name, start);
        result
    }

    /// Call a function that takes no arguments
    pub fn run<R>(&self) -> R
    where
        F: Fn() -> R,
    {
        let start = Instant::now();
        let result = (self.func)();
        log_elapsed(&self.logger, &self.name, start);
        result
    }

    /// Call a fallible function; an `Err` is returned without a timing record
    pub fn try_call<A, T, E>(&self, args: A) -> std::result::Result<T, E>
    where
        F: Fn(A) -> std::result::Result<T, E>,
    {
        let start = Instant::now();
        let value = (self.func)(args)?;
        log_elapsed(&self.logger, &self.name, start);
        Ok(value)
    }

    /// Call a function that mutates its captured state
    pub fn call_mut<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        let start = Instant::now();
        let result = (self.func)(args);
        log_elapsed(&self.logger, &self.name, start);
        result
    }

    /// [`run`](Self::run) for stateful functions
    pub fn run_mut<R>(&mut self) -> R
    where
        F: FnMut() -> R,
    {
        let start = Instant::now();
        let result = (self.func)();
        log_elapsed(&self.logger, &self.name, start);
        result
    }

    /// Call a function that can only run once, consuming the wrapper
    pub fn call_once<A, R>(self, args: A) -> R
    where
        F: FnOnce(A) -> R,
    {
        let Timed { name, func, logger } = self;
        let start = Instant::now();
        let result = func(args);
        log_elapsed(&logger, &name, start);
        result
    }
}
