//! Command implementations for the CLI

use crate::{
    cli::{Command, help_text},
    config::Config,
    core::greet,
    output,
};
use tracing::{debug, info, instrument};

/// Package name reported by the `version` command
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// Package version reported by the `version` command
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Execute the appropriate command based on CLI arguments
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: Option<&Command>) -> anyhow::Result<()> {
    match command {
        Some(Command::Hello { .. }) => execute_hello_command(config),
        Some(Command::Version) => execute_version_command(),
        None => {
            debug!("No subcommand given, printing help");
            println!("{}", help_text());
            Ok(())
        }
    }
}

/// Execute the hello command
#[instrument(skip(config))]
fn execute_hello_command(config: &Config) -> anyhow::Result<()> {
    if config.is_verbose() {
        println!(
            "{}",
            output::dim(format!("Verbose mode: {}", config.verbosity))
        );
    }

    let greeting = &config.greeting;
    debug!(name = %greeting.name, count = greeting.count, "Building greeting");

    let message = greet(&greeting.name, greeting.count)?;
    println!("{}", output::success(&message));

    info!("Greeted {} time(s)", greeting.count);
    Ok(())
}

/// Execute the version command
#[instrument]
fn execute_version_command() -> anyhow::Result<()> {
    println!("{}", output::version_banner(PACKAGE_NAME, PACKAGE_VERSION));
    Ok(())
}
