mod report;
mod version;

use std::io::Write;

use vwaper_core::IngestSummary;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a finished command leaves behind for exit-code decisions.
#[derive(Debug, Default)]
pub struct CommandResult {
    pub summary: Option<IngestSummary>,
}

impl CommandResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_summary(summary: IngestSummary) -> Self {
        Self {
            summary: Some(summary),
        }
    }

    pub fn has_malformed(&self) -> bool {
        self.summary
            .as_ref()
            .is_some_and(IngestSummary::has_malformed)
    }

    pub fn malformed_lines(&self) -> usize {
        self.summary
            .as_ref()
            .map_or(0, |summary| summary.malformed_lines)
    }
}

pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<CommandResult, CliError> {
    match &cli.command {
        Some(Command::Version) => version::run(out),
        None => report::run(&cli.report, out),
    }
}
