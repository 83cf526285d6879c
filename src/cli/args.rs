//! Command-line argument parsing

use clap::{ArgAction, CommandFactory, Parser, Subcommand};

/// greetkit - a small starter command-line tool
///
/// Run 'greetkit --help' to see available commands.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
#[command(name = "greetkit")]
pub struct Args {
    /// Increase verbosity (can be used multiple times)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Greet someone with a friendly message
    Hello {
        /// Name to greet
        #[arg(short, long, default_value = "World")]
        name: String,

        /// Number of greetings
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        count: i64,
    },

    /// Show version information
    Version,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

/// Render the long help text
pub fn help_text() -> String {
    Args::command().render_long_help().to_string()
}
