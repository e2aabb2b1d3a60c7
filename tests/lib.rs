// Shared helpers for the behaviour tests
pub use vwaper_core::{
    write_text_report, Aggregator, CoreError, IngestSummary, TradeRecord, TradeSource,
    DEFAULT_PRECISION,
};

use std::io::Write;

use tempfile::NamedTempFile;

/// The four-line example from the VWAPer documentation.
pub const DOCUMENTED_INPUT: &str = "\
VOD.L 1 100 184 183.7
BT.LN 1 300 449.4 448.2
VOD.L 2 25 184.1 182.4
BT.LN 2 900 449.8 449.5
";

pub const DOCUMENTED_OUTPUT: &str = "\
BT.LN,1,25
BT.LN,2,75
VOD.L,1,80
VOD.L,2,20
#
BT.LN,449.8,448.2
VOD.L,184.1,182.4
";

pub fn trade_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write trades");
    file
}

/// Runs one full pass over `contents` through a real file and returns the
/// aggregator plus the rendered text report.
pub fn run_file(contents: &str) -> (Aggregator, String) {
    let file = trade_file(contents);
    let source = TradeSource::open(file.path()).expect("open trade file");

    let mut aggregator = Aggregator::new();
    aggregator.ingest_source(source).expect("read trade file");

    let mut out = Vec::new();
    write_text_report(&aggregator.report(), &mut out, DEFAULT_PRECISION).expect("render");
    (aggregator, String::from_utf8(out).expect("utf8 report"))
}
