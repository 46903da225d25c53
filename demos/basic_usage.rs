//! Basic usage example
//!
//! Demonstrates a console-only logger and the logging macros.
//!
//! Run with: cargo run --example basic_usage

use youtility::prelude::*;
use youtility::{info, warning};

fn main() -> Result<()> {
    println!("=== Youtility - Basic Usage Example ===\n");

    let logger = initialize_logger(
        LoggerConfig::named("basic")
            .with_level(LogLevel::Info)
            .with_file(false),
    )?;

    logger.debug("This debug message is below the threshold");
    logger.info("Application started");
    info!(logger, "Listening on port {}", 8080);
    warning!(logger, "Retry attempt {} of {}", 2, 5);
    logger.error("Something went wrong");
    logger.critical("Critical failure!");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
