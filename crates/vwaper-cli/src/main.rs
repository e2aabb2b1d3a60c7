mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::io;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = commands::run(&cli, &mut out)?;

    if cli.report.strict && result.has_malformed() {
        return Err(CliError::StrictModeViolation {
            malformed_lines: result.malformed_lines(),
        });
    }

    Ok(())
}
