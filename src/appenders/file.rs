//! File appender implementation

use crate::core::{
    Appender, FileOptions, LineFormatter, LogEntry, LogLevel, LoggerError, Result,
};
use std::fs::File;
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

/// Appends formatted lines to a file.
///
/// Writes go through a [`LineWriter`], so every complete record is handed to
/// the OS as soon as its newline is written.
pub struct FileAppender {
    path: PathBuf,
    options: FileOptions,
    writer: Option<LineWriter<File>>,
    min_level: LogLevel,
    formatter: LineFormatter,
}

impl FileAppender {
    /// Open `path` for appending
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(path, FileOptions::default())
    }

    /// Open `path` according to `options`.
    ///
    /// With `options.delay` set the file is not touched until the first
    /// record arrives.
    pub fn open(path: impl Into<PathBuf>, options: FileOptions) -> Result<Self> {
        options.validate()?;

        let mut appender = Self {
            path: path.into(),
            options,
            writer: None,
            min_level: LogLevel::Debug,
            formatter: LineFormatter::new(),
        };
        if !appender.options.delay {
            appender.ensure_open()?;
        }
        Ok(appender)
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    fn ensure_open(&mut self) -> Result<&mut LineWriter<File>> {
        let writer = match self.writer.take() {
            Some(writer) => writer,
            None => {
                let file = self
                    .options
                    .mode
                    .open_options()
                    .open(&self.path)
                    .map_err(|e| {
                        LoggerError::io_operation(
                            "opening log file",
                            self.path.display().to_string(),
                            e,
                        )
                    })?;
                LineWriter::new(file)
            }
        };
        Ok(self.writer.insert(writer))
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut line = self.formatter.format(entry);
        line.push('\n');

        let writer = self.ensure_open()?;
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }

    fn min_level(&self) -> LogLevel {
        self.min_level
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
