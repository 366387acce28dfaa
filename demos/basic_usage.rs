//! Basic logger usage example
//!
//! Demonstrates the registry, per-level enable/disable and the three
//! formatting styles.
//!
//! Run with: cargo run --example basic_usage

use rust_named_logger::prelude::*;
use rust_named_logger::{infof, warnln};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Named Logger - Basic Usage Example ===\n");

    // Implicitly created loggers write to stdout
    let logger = get_logger("app");

    println!("1. Logging at different levels:");
    logger.debug(&[&"This is a debug message"]);
    logger.info(&[&"Listening on port ", &8080]);
    logger.warnf(format_args!("Retry {} of {}", 3, 5));
    logger.errorln(&[&"Error code", &500]);

    println!("\n2. Disabling the debug level:");
    logger.disable_level(LogLevel::Debug);
    logger.debug(&[&"Debug message (hidden)"]);
    logger.info(&[&"Info message (visible)"]);

    println!("\n3. Routing errors to stderr:");
    logger.set_output(LogLevel::Error, Arc::new(ConsoleSink::stderr()));
    logger.error(&[&"This goes to stderr"]);

    println!("\n4. The registry hands out the same logger:");
    let again = get_logger("app");
    infof!(again, "same instance: {}", Arc::ptr_eq(&logger, &again));

    println!("\n5. Unknown severities are reported, not written:");
    if let Err(e) = logger.log(42, &[&"nowhere"]) {
        warnln!(logger, "log failed:", e.to_string());
    }

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
