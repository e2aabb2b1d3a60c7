//! Core engine for VWAPer.
//!
//! This crate contains:
//! - Trade record model and line parser
//! - Per-stock and per-interval volume aggregation with day high/low tracking
//! - Interval volume share and day range reports
//! - Line-oriented input source and plain-text report rendering

pub mod aggregator;
pub mod domain;
pub mod error;
pub mod format;
pub mod parser;
pub mod report;
pub mod source;

pub use aggregator::{Aggregator, IngestSummary};
pub use domain::{Field, IntervalKey, PriceExtrema, TradeRecord};
pub use error::{CoreError, RecordError};
pub use format::{format_general, write_text_report, DEFAULT_PRECISION, DELIMITER, MAX_PRECISION};
pub use parser::parse_record;
pub use report::{IntervalShare, Report, ReportView, StockRange};
pub use source::{SourceLine, TradeSource};
