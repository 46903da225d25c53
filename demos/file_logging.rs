//! File logging example
//!
//! Demonstrates logging to both console and file destinations, and what
//! happens when the same logger name is initialized twice.
//!
//! Run with: cargo run --example file_logging

use youtility::prelude::*;

fn main() -> Result<()> {
    println!("=== Youtility - File Logging Example ===\n");

    let logger = initialize_logger(
        LoggerConfig::named("file_demo")
            .with_file_path("application.log")
            .with_file_options(FileOptions::new().with_mode(FileMode::Truncate)),
    )?;

    println!("1. Logging to both console and file:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warning("Using default settings for some options");

    println!("\n2. Initializing the same name again adds a second set of destinations:");
    let same = initialize_logger(LoggerConfig::named("file_demo").with_file(false))?;
    same.info(format!(
        "This line appears twice on the console ({} destinations)",
        same.appender_count()
    ));

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the file output");

    Ok(())
}
