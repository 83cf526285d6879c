//! Runtime configuration
//!
//! Built from command line arguments only; there is no config file.

use crate::cli::{Args, Command};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Verbosity level (number of `-v` flags)
    pub verbosity: u8,
    /// Greeting configuration
    pub greeting: GreetingConfig,
}

/// Parameters for the `hello` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingConfig {
    /// Name to greet, passed through to the greeter untouched
    pub name: String,
    /// Number of greetings; negative values are rejected by the greeter
    pub count: i64,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: "World".to_string(),
            count: 1,
        }
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        let mut config = Self {
            verbosity: args.verbose,
            ..Self::default()
        };

        if let Some(Command::Hello { name, count }) = &args.command {
            config.greeting.name = name.clone();
            config.greeting.count = *count;
        }

        config
    }

    /// Whether any `-v` flag was given
    pub fn is_verbose(&self) -> bool {
        self.verbosity > 0
    }
}
