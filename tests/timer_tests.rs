//! Timing with the default "Performance Timer" logger
//!
//! The default logger writes `debug.log` relative to the working directory,
//! so this binary holds a single test that moves into a temp dir first.

use std::fs;
use std::sync::Arc;
use tempfile::TempDir;
use youtility::{performance_logger, timed, LogLevel, PERFORMANCE_LOGGER_NAME};

fn dummy_function() -> &'static str {
    std::thread::sleep(std::time::Duration::from_millis(20));
    "done"
}

fn checked_div((a, b): (u32, u32)) -> Result<u32, String> {
    a.checked_div(b).ok_or_else(|| "division by zero".to_string())
}

#[test]
fn test_timer_with_default_logger() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    std::env::set_current_dir(temp_dir.path()).expect("chdir");

    let timed_dummy = timed!(dummy_function).expect("performance logger");
    let timed_div = timed!(checked_div).expect("performance logger");

    // Acquired once: both wrappers share one handle with one file and one console
    let logger = performance_logger().unwrap();
    assert!(Arc::ptr_eq(&logger, timed_dummy.logger()));
    assert!(Arc::ptr_eq(&logger, timed_div.logger()));
    assert_eq!(logger.name(), PERFORMANCE_LOGGER_NAME);
    assert_eq!(logger.level(), LogLevel::Debug);
    assert_eq!(
        logger.appender_names(),
        vec!["file".to_string(), "console".to_string()]
    );

    for _ in 0..3 {
        assert_eq!(timed_dummy.run(), "done");
    }
    assert_eq!(timed_div.try_call((9, 3)), Ok(3));
    assert!(timed_div.try_call((1, 0)).is_err());

    assert_eq!(logger.appender_count(), 2);

    let content = fs::read_to_string(temp_dir.path().join("debug.log")).unwrap();
    assert_eq!(content.matches("Time taken for dummy_function: ").count(), 3);
    assert_eq!(content.matches("Time taken for checked_div: ").count(), 1);
    assert!(content.lines().all(|line| line.contains(" INFO  Time taken for ")));
}
