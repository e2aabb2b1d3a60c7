pub mod stream_writer;

use std::io::Write;
use std::path::Path;

use serde_json::json;
use vwaper_core::{write_text_report, ReportView};

use self::stream_writer::NdjsonStreamWriter;
use crate::cli::OutputFormat;
use crate::error::CliError;

/// Resolved rendering settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub pretty: bool,
    pub precision: usize,
}

pub fn render<W: Write>(
    view: &ReportView<'_>,
    input: &Path,
    options: RenderOptions,
    writer: &mut W,
) -> Result<(), CliError> {
    match options.format {
        OutputFormat::Text => write_text_report(view, writer, options.precision)?,
        OutputFormat::Json => {
            let report = view.snapshot();
            if options.pretty {
                serde_json::to_writer_pretty(&mut *writer, &report)?;
            } else {
                serde_json::to_writer(&mut *writer, &report)?;
            }
            writeln!(writer)?;
            writer.flush()?;
        }
        OutputFormat::Ndjson => render_stream(view, input, writer)?,
    }

    Ok(())
}

fn render_stream<W: Write>(
    view: &ReportView<'_>,
    input: &Path,
    writer: &mut W,
) -> Result<(), CliError> {
    let mut stream = NdjsonStreamWriter::new(writer);

    stream.emit_start(Some(json!({ "input": input.display().to_string() })))?;

    for row in view.percentage_report() {
        stream.emit_volume_share(serde_json::to_value(row)?)?;
    }

    stream.emit_delimiter()?;

    for row in view.extrema_report() {
        stream.emit_day_range(serde_json::to_value(row)?)?;
    }

    stream.emit_end(Some(serde_json::to_value(view.summary())?))?;

    Ok(())
}
