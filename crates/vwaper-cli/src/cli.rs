//! CLI argument definitions for VWAPer.
//!
//! # Usage
//!
//! ```bash
//! # Volume share per interval and day high/low per stock
//! vwaper trades.txt
//!
//! # Same reports as a single JSON document
//! vwaper trades.txt --format json --pretty
//!
//! # Fail the run (exit code 5) if any line was malformed
//! vwaper trades.txt --strict
//!
//! # Print the version banner
//! vwaper version
//! ```
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json, ndjson) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--precision` | `6` | Significant digits for text output |
//! | `--strict` | `false` | Treat malformed lines as a failure |
//! | `--log-level` | `warn` | Log filter used when `RUST_LOG` is unset |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use vwaper_core::DEFAULT_PRECISION;

/// VWAPer - interval volume share and day range reports for trade files.
///
/// Reads `<stock> <interval> <volume> <high> <low>` lines and prints each
/// interval's share of the stock's volume, a `#` line, then each stock's day
/// high and day low.
#[derive(Debug, Parser)]
#[command(
    name = "vwaper",
    version,
    about = "Interval volume share and day high/low reports for trade files",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Default log filter when `RUST_LOG` is not set (e.g. `info`, `vwaper_core=debug`).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(flatten)]
    pub report: ReportArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `stock,interval,percentage` lines, `#`, then `stock,high,low` lines.
    Text,
    /// Single JSON object with both reports and the ingestion summary.
    Json,
    /// Newline-delimited JSON events, one per report row.
    Ndjson,
}

/// Available subcommands. Without one, the input file is reported on.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the version banner.
    Version,
}

/// Arguments for the default report run.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Trade file to read.
    pub input: Option<PathBuf>,

    /// Output format for the reports.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Significant digits for prices and percentages in text output.
    #[arg(
        long,
        default_value_t = DEFAULT_PRECISION as u8,
        value_parser = clap::value_parser!(u8).range(1..=17)
    )]
    pub precision: u8,

    /// Exit with code 5 if any input line was malformed.
    ///
    /// Reports are still printed for the well-formed lines.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}
