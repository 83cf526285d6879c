#![allow(clippy::cargo_common_metadata)]
use greetkit::{cli, config::Config, output, setup_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = cli::parse_args();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", output::failure(&err));
            if args.verbose > 0 {
                eprintln!("{err:?}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    // Setup logging based on verbosity
    setup_logging(args.verbose)?;

    let config = Config::from_args(args);

    cli::execute_command(&config, args.command.as_ref())
}
