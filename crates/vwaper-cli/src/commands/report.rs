use std::io::Write;

use tracing::info;
use vwaper_core::{Aggregator, TradeSource};

use crate::cli::ReportArgs;
use crate::error::CliError;
use crate::output::{self, RenderOptions};

use super::CommandResult;

pub fn run<W: Write>(args: &ReportArgs, out: &mut W) -> Result<CommandResult, CliError> {
    let input = args.input.as_deref().ok_or(CliError::Usage)?;
    let source = TradeSource::open(input)?;

    let mut aggregator = Aggregator::new();
    let summary = aggregator.ingest_source(source)?.clone();

    info!(format = ?args.format, "writing reports");
    let options = RenderOptions {
        format: args.format,
        pretty: args.pretty,
        precision: usize::from(args.precision),
    };
    output::render(&aggregator.report(), input, options, out)?;

    Ok(CommandResult::with_summary(summary))
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::path::PathBuf;

    use super::*;
    use crate::cli::OutputFormat;

    fn args(input: Option<PathBuf>) -> ReportArgs {
        ReportArgs {
            input,
            format: OutputFormat::Text,
            pretty: false,
            precision: 6,
            strict: false,
        }
    }

    #[test]
    fn reports_on_file_and_counts_malformed_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "VOD.L 1 100 184 183.7").expect("write");
        writeln!(file, "VOD.L one 100 184 183.7").expect("write");
        writeln!(file, "VOD.L 2 25 184.1 182.4").expect("write");

        let mut out = Vec::new();
        let result = run(&args(Some(file.path().to_path_buf())), &mut out).expect("report");

        assert_eq!(result.malformed_lines(), 1);
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "VOD.L,1,80\nVOD.L,2,20\n#\nVOD.L,184.1,182.4\n"
        );
    }

    #[test]
    fn missing_input_is_usage_error() {
        let mut out = Vec::new();
        let err = run(&args(None), &mut out).expect_err("must fail");
        assert!(matches!(err, CliError::Usage));
        assert!(out.is_empty());
    }

    #[test]
    fn unreadable_input_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut out = Vec::new();
        let err = run(&args(Some(dir.path().join("absent.txt"))), &mut out)
            .expect_err("must fail");

        assert!(matches!(err, CliError::Core(_)));
        assert!(out.is_empty());
    }
}
