//! Console appender implementation

use crate::core::{Appender, LineFormatter, LogEntry, LogLevel, Result};
use std::io::Write;

/// Writes formatted lines to standard output.
///
/// The target can be swapped with [`ConsoleAppender::with_writer`], which is
/// how output is captured in tests.
pub struct ConsoleAppender {
    min_level: LogLevel,
    formatter: LineFormatter,
    target: Box<dyn Write + Send + Sync>,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Debug,
            formatter: LineFormatter::new(),
            target: Box::new(std::io::stdout()),
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Write to `writer` instead of standard output
    #[must_use]
    pub fn with_writer<W>(mut self, writer: W) -> Self
    where
        W: Write + Send + Sync + 'static,
    {
        self.target = Box::new(writer);
        self
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.format(entry);
        // One write_fmt call, so a line is never split by other writers to stdout
        writeln!(self.target, "{}", line)?;
        self.target.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.target.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}
