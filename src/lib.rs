//! # greetkit
//!
//! A small starter command-line tool. The library side holds the pure
//! business logic so it can be tested and reused without the CLI.
//!
//! ## Example
//!
//! ```
//! use greetkit::core::{average, greet};
//!
//! assert_eq!(greet("World", 1)?, "Hello, World!");
//! assert_eq!(average(&[1.0, 2.0, 3.0])?, 2.0);
//! # Ok::<(), greetkit::error::GreetkitError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a given number of `-v` flags
pub fn log_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging with appropriate verbosity
///
/// `RUST_LOG` takes precedence over the `-v` count when set.
pub fn setup_logging(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbosity)));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
