//! Timing example
//!
//! Wraps functions so each call logs its duration on the
//! "Performance Timer" logger (console and `debug.log`).
//!
//! Run with: cargo run --example timing

use std::time::Duration;
use youtility::{timed, timer, Result};

fn slow_sum(n: u64) -> u64 {
    std::thread::sleep(Duration::from_millis(25));
    (1..=n).sum()
}

fn parse_port(raw: &str) -> std::result::Result<u16, std::num::ParseIntError> {
    raw.parse()
}

fn main() -> Result<()> {
    println!("=== Youtility - Timing Example ===\n");

    let slow_sum = timed!(slow_sum)?;
    println!("slow_sum(100) = {}", slow_sum.call(100));

    let area = timer("area", |(w, h): (f64, f64)| w * h)?;
    println!("area(3, 4) = {}", area.call((3.0, 4.0)));

    let parse_port = timed!(parse_port)?;
    println!("parse_port(\"8080\") = {:?}", parse_port.try_call("8080"));
    // Failed calls are not timed
    println!("parse_port(\"http\") = {:?}", parse_port.try_call("http"));

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
