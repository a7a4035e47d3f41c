//! Logging utilities for the Velora application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the Velora application.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber.
///
/// This function should be called at the start of the application to set up
/// logging. It configures the tracing subscriber with the default INFO level
/// and formats log messages with timestamps, log levels, targets, and
/// file/line information. `RUST_LOG` overrides the default.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("velora={}", level).parse().expect("valid directive"));

    // Use try_init to handle the case where a global default subscriber has
    // already been set (e.g. in tests).
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
