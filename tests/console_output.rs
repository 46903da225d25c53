//! Console output of factory-built loggers
//!
//! The console destination always writes to the real standard output, so each
//! scenario runs in a child copy of this test binary and the parent asserts on
//! the child's captured stdout.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use youtility::{initialize_logger, LogLevel, LoggerConfig};

const SCENARIO_VAR: &str = "YOUTILITY_CONSOLE_SCENARIO";
const DIR_VAR: &str = "YOUTILITY_CONSOLE_DIR";

/// Run `scenario` in a child process and return its stdout
fn run_scenario(scenario: &str, dir: &Path) -> String {
    let exe = env::current_exe().expect("test binary path");
    let output = Command::new(exe)
        .args(["emit_scenario", "--exact", "--nocapture", "--test-threads=1"])
        .env(SCENARIO_VAR, scenario)
        .env(DIR_VAR, dir)
        .output()
        .expect("Failed to spawn child test");

    assert!(
        output.status.success(),
        "child failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 stdout")
}

/// Entry point for the child process; a no-op in a normal test run
#[test]
fn emit_scenario() {
    let Ok(scenario) = env::var(SCENARIO_VAR) else {
        return;
    };
    let dir = PathBuf::from(env::var(DIR_VAR).expect("scenario dir"));

    match scenario.as_str() {
        "console_only" => {
            let logger = initialize_logger(
                LoggerConfig::named("console.only")
                    .with_file(false)
                    .with_file_path(dir.join("unused.log")),
            )
            .unwrap();
            logger.info("hello");
        }
        "console_disabled" => {
            let logger = initialize_logger(
                LoggerConfig::named("console.disabled")
                    .with_console(false)
                    .with_file_path(dir.join("quiet.log")),
            )
            .unwrap();
            logger.info("quiet");
        }
        "threshold" => {
            let logger = initialize_logger(
                LoggerConfig::named("console.threshold")
                    .with_level(LogLevel::Warning)
                    .with_file_path(dir.join("both.log")),
            )
            .unwrap();
            logger.info("hidden");
            logger.warning("shown");
            logger.error("also shown");
        }
        other => panic!("unknown scenario {}", other),
    }
}

#[test]
fn test_console_only_logger_writes_stdout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let stdout = run_scenario("console_only", temp_dir.path());

    assert!(stdout.lines().any(|line| line.ends_with("INFO  hello")));
    assert!(!temp_dir.path().join("unused.log").exists());
}

#[test]
fn test_disabled_console_writes_nothing_to_stdout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let stdout = run_scenario("console_disabled", temp_dir.path());

    assert!(!stdout.contains("quiet"));
    let content = fs::read_to_string(temp_dir.path().join("quiet.log")).unwrap();
    assert!(content.contains("INFO  quiet"));
}

#[test]
fn test_threshold_applies_to_console_and_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let stdout = run_scenario("threshold", temp_dir.path());
    let file = fs::read_to_string(temp_dir.path().join("both.log")).unwrap();

    for output in [stdout.as_str(), file.as_str()] {
        assert!(!output.contains("hidden"));
        assert!(output.lines().any(|line| line.ends_with("WARNING  shown")));
        assert!(output.lines().any(|line| line.ends_with("ERROR  also shown")));
    }
}
