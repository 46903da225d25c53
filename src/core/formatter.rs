//! Fixed text layout for log lines
//!
//! Every destination renders records the same way:
//!
//! ```text
//! 2026-10-17 09:15:02,713 [main] jobs.rs.compute              INFO  Loaded 42 rows
//! ```
//!
//! Fields are timestamp, thread name in brackets, source file base name and
//! function name joined by a dot (function name left-aligned in 20 columns),
//! the level name, two spaces, and the message.

use super::log_entry::LogEntry;

/// Local time with comma-separated milliseconds
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Minimum width of the function-name column
pub const FUNCTION_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineFormatter;

impl LineFormatter {
    pub const fn new() -> Self {
        LineFormatter
    }

    /// Render a record without the trailing newline
    #[must_use]
    pub fn format(&self, entry: &LogEntry) -> String {
        format!(
            "{} [{}] {}.{:<width$} {}  {}",
            entry.timestamp.format(TIMESTAMP_FORMAT),
            entry.thread_label(),
            entry.file,
            entry.function,
            entry.level.to_str(),
            entry.message,
            width = FUNCTION_WIDTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Location, LogLevel};
    use chrono::{Local, TimeZone};

    fn fixed_entry(level: LogLevel, function: &'static str, message: &str) -> LogEntry {
        let mut entry = LogEntry::new(
            level,
            message.to_string(),
            Location::new("src/jobs.rs", 7, function),
        );
        entry.timestamp = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(123);
        entry.thread_name = Some("main".to_string());
        entry
    }

    #[test]
    fn test_full_line_layout() {
        let entry = fixed_entry(LogLevel::Info, "compute", "Loaded 42 rows");
        assert_eq!(
            LineFormatter::new().format(&entry),
            "2025-01-08 10:30:45,123 [main] jobs.rs.compute              INFO  Loaded 42 rows"
        );
    }

    #[test]
    fn test_long_function_name_is_not_truncated() {
        let entry = fixed_entry(
            LogLevel::Critical,
            "a_rather_long_function_name",
            "boom",
        );
        let line = LineFormatter::new().format(&entry);
        assert!(line.ends_with("jobs.rs.a_rather_long_function_name CRITICAL  boom"));
    }

    #[test]
    fn test_level_and_message_separated_by_two_spaces() {
        for level in LogLevel::ALL {
            let entry = fixed_entry(level, "f", "msg");
            let line = LineFormatter::new().format(&entry);
            assert!(line.ends_with(&format!(" {}  msg", level.to_str())));
        }
    }
}
