//! Volume and price aggregation over parsed trade records.

use std::collections::BTreeMap;
use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::parser::parse_record;
use crate::report::ReportView;
use crate::{CoreError, IntervalKey, PriceExtrema, RecordError, TradeRecord, TradeSource};

/// Counters for one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub lines_read: usize,
    pub records_accepted: usize,
    pub malformed_lines: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub malformed_line_numbers: Vec<usize>,
}

impl IngestSummary {
    pub fn has_malformed(&self) -> bool {
        self.malformed_lines > 0
    }
}

/// Per-run aggregation state.
///
/// Owns the stock totals, the `(stock, interval)` totals and the per-stock
/// price extrema. All maps are ordered, so reports iterate in stock then
/// interval order without a separate sort.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    stock_volumes: BTreeMap<String, i128>,
    interval_volumes: BTreeMap<IntervalKey, i128>,
    extrema: BTreeMap<String, PriceExtrema>,
    summary: IngestSummary,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into every map.
    ///
    /// Volumes are summed as `i128`, so totals of `i64` volumes stay exact
    /// for any input that fits on disk.
    pub fn ingest(&mut self, record: &TradeRecord) {
        let volume = i128::from(record.volume);

        *self.stock_volumes.entry(record.stock.clone()).or_insert(0) += volume;
        *self
            .interval_volumes
            .entry(IntervalKey::new(record.stock.clone(), record.interval))
            .or_insert(0) += volume;

        self.extrema
            .entry(record.stock.clone())
            .or_default()
            .observe(record.high, record.low);
    }

    /// Parses and ingests a raw line, counting it either way.
    pub fn ingest_line(&mut self, line: &str, line_number: usize) -> Result<(), RecordError> {
        self.summary.lines_read += 1;

        match parse_record(line, line_number) {
            Ok(record) => {
                self.ingest(&record);
                self.summary.records_accepted += 1;
                Ok(())
            }
            Err(error) => {
                self.summary.malformed_lines += 1;
                self.summary.malformed_line_numbers.push(error.line());
                Err(error)
            }
        }
    }

    /// Drains `source`, skipping malformed lines with a warning.
    ///
    /// Only a read failure stops ingestion.
    pub fn ingest_source<R: BufRead>(
        &mut self,
        source: TradeSource<R>,
    ) -> Result<&IngestSummary, CoreError> {
        info!(path = %source.path().display(), "reading trade records");

        for line in source {
            let line = line?;
            if let Err(error) = self.ingest_line(&line.text, line.number) {
                warn!(line = error.line(), field = %error.field(), "{error}; line skipped");
            }
        }

        info!(
            lines = self.summary.lines_read,
            records = self.summary.records_accepted,
            malformed = self.summary.malformed_lines,
            stocks = self.stock_volumes.len(),
            "finished reading trade records"
        );
        Ok(&self.summary)
    }

    pub fn stock_volume(&self, stock: &str) -> Option<i128> {
        self.stock_volumes.get(stock).copied()
    }

    pub fn interval_volume(&self, stock: &str, interval: i64) -> Option<i128> {
        self.interval_volumes
            .get(&IntervalKey::new(stock, interval))
            .copied()
    }

    pub fn extrema(&self, stock: &str) -> Option<PriceExtrema> {
        self.extrema.get(stock).copied()
    }

    pub fn stock_volumes(&self) -> &BTreeMap<String, i128> {
        &self.stock_volumes
    }

    pub fn interval_volumes(&self) -> &BTreeMap<IntervalKey, i128> {
        &self.interval_volumes
    }

    pub fn price_extrema(&self) -> &BTreeMap<String, PriceExtrema> {
        &self.extrema
    }

    pub fn summary(&self) -> &IngestSummary {
        &self.summary
    }

    pub fn is_empty(&self) -> bool {
        self.stock_volumes.is_empty()
    }

    /// Read-only view over the finished state. While the view is alive the
    /// aggregator cannot be mutated.
    pub fn report(&self) -> ReportView<'_> {
        debug!(
            intervals = self.interval_volumes.len(),
            stocks = self.extrema.len(),
            "calculating totals and day ranges"
        );
        ReportView::new(self)
    }
}
