//! Report rows derived from a finished [`Aggregator`].

use serde::{Deserialize, Serialize};

use crate::{Aggregator, IngestSummary};

/// Share of a stock's total volume traded in one interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalShare {
    pub stock: String,
    pub interval: i64,
    pub volume: i128,
    /// `100 * volume / stock total`. NaN when the stock total is zero and
    /// the interval volume is zero too, infinite when only the total is.
    pub percentage: f64,
}

/// Day high and day low for one stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRange {
    pub stock: String,
    pub day_high: f64,
    pub day_low: f64,
}

/// Owned copy of both reports plus the ingestion counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub volume_shares: Vec<IntervalShare>,
    pub day_ranges: Vec<StockRange>,
    pub summary: IngestSummary,
}

/// Borrowed view over frozen aggregation state.
///
/// Both report iterators are lazy and can be requested any number of times;
/// each call starts from the first row again.
#[derive(Debug, Clone, Copy)]
pub struct ReportView<'a> {
    aggregator: &'a Aggregator,
}

impl<'a> ReportView<'a> {
    pub(crate) fn new(aggregator: &'a Aggregator) -> Self {
        Self { aggregator }
    }

    /// One row per `(stock, interval)`, stock then interval ascending.
    pub fn percentage_report(&self) -> impl Iterator<Item = IntervalShare> + 'a {
        let totals = self.aggregator.stock_volumes();
        self.aggregator
            .interval_volumes()
            .iter()
            .map(move |(key, &volume)| {
                let total = totals.get(&key.stock).copied().unwrap_or_default();
                IntervalShare {
                    stock: key.stock.clone(),
                    interval: key.interval,
                    volume,
                    percentage: percentage_of(volume, total),
                }
            })
    }

    /// One row per stock, stock ascending.
    pub fn extrema_report(&self) -> impl Iterator<Item = StockRange> + 'a {
        self.aggregator
            .price_extrema()
            .iter()
            .map(|(stock, extrema)| StockRange {
                stock: stock.clone(),
                day_high: extrema.high(),
                day_low: extrema.low(),
            })
    }

    pub fn summary(&self) -> &'a IngestSummary {
        self.aggregator.summary()
    }

    pub fn snapshot(&self) -> Report {
        Report {
            volume_shares: self.percentage_report().collect(),
            day_ranges: self.extrema_report().collect(),
            summary: self.summary().clone(),
        }
    }
}

fn percentage_of(volume: i128, total: i128) -> f64 {
    100.0 * volume as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TradeRecord;

    fn aggregate(records: &[TradeRecord]) -> Aggregator {
        let mut aggregator = Aggregator::new();
        for record in records {
            aggregator.ingest(record);
        }
        aggregator
    }

    #[test]
    fn percentages_follow_stock_then_interval_order() {
        let aggregator = aggregate(&[
            TradeRecord::new("VOD.L", 2, 25, 184.1, 182.4),
            TradeRecord::new("VOD.L", 1, 100, 184.0, 183.7),
            TradeRecord::new("BT.LN", 2, 900, 449.8, 449.5),
            TradeRecord::new("BT.LN", 1, 300, 449.4, 448.2),
        ]);

        let rows = aggregator
            .report()
            .percentage_report()
            .map(|row| (row.stock, row.interval, row.percentage))
            .collect::<Vec<_>>();

        assert_eq!(
            rows,
            vec![
                ("BT.LN".to_owned(), 1, 25.0),
                ("BT.LN".to_owned(), 2, 75.0),
                ("VOD.L".to_owned(), 1, 80.0),
                ("VOD.L".to_owned(), 2, 20.0),
            ]
        );
    }

    #[test]
    fn percentages_per_stock_sum_to_hundred() {
        let aggregator = aggregate(&[
            TradeRecord::new("A", 1, 1, 1.0, 1.0),
            TradeRecord::new("A", 2, 1, 1.0, 1.0),
            TradeRecord::new("A", 3, 1, 1.0, 1.0),
            TradeRecord::new("B", 7, 13, 1.0, 1.0),
        ]);

        let total_a: f64 = aggregator
            .report()
            .percentage_report()
            .filter(|row| row.stock == "A")
            .map(|row| row.percentage)
            .sum();
        assert!((total_a - 100.0).abs() < 1e-9, "got {total_a}");
    }

    #[test]
    fn single_interval_is_exactly_hundred() {
        let aggregator = aggregate(&[TradeRecord::new("B", 7, 13, 1.0, 1.0)]);
        let row = aggregator
            .report()
            .percentage_report()
            .next()
            .expect("one row");
        assert_eq!(row.percentage, 100.0);
    }

    #[test]
    fn zero_total_volume_yields_nan() {
        let aggregator = aggregate(&[TradeRecord::new("Z", 1, 0, 1.0, 1.0)]);
        let row = aggregator
            .report()
            .percentage_report()
            .next()
            .expect("one row");
        assert!(row.percentage.is_nan());
    }

    #[test]
    fn cancelling_negative_volumes_yield_infinite_share() {
        let aggregator = aggregate(&[
            TradeRecord::new("Z", 1, 5, 1.0, 1.0),
            TradeRecord::new("Z", 2, -5, 1.0, 1.0),
        ]);
        let rows = aggregator.report().percentage_report().collect::<Vec<_>>();

        assert_eq!(rows[0].percentage, f64::INFINITY);
        assert_eq!(rows[1].percentage, f64::NEG_INFINITY);
    }

    #[test]
    fn extrema_report_is_sorted_and_restartable() {
        let aggregator = aggregate(&[
            TradeRecord::new("VOD.L", 1, 100, 184.0, 183.7),
            TradeRecord::new("BT.LN", 1, 300, 449.4, 448.2),
            TradeRecord::new("VOD.L", 2, 25, 184.1, 182.4),
        ]);
        let view = aggregator.report();

        let first = view.extrema_report().collect::<Vec<_>>();
        let second = view.extrema_report().collect::<Vec<_>>();

        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                StockRange {
                    stock: "BT.LN".into(),
                    day_high: 449.4,
                    day_low: 448.2
                },
                StockRange {
                    stock: "VOD.L".into(),
                    day_high: 184.1,
                    day_low: 182.4
                },
            ]
        );
    }

    #[test]
    fn empty_aggregator_has_empty_reports() {
        let aggregator = Aggregator::new();
        let report = aggregator.report().snapshot();

        assert!(report.volume_shares.is_empty());
        assert!(report.day_ranges.is_empty());
    }

    #[test]
    fn snapshot_serializes_nan_as_null() {
        let aggregator = aggregate(&[TradeRecord::new("Z", 1, 0, 2.0, 1.0)]);
        let value = serde_json::to_value(aggregator.report().snapshot()).expect("serialize");

        assert_eq!(
            value.pointer("/volume_shares/0/percentage"),
            Some(&serde_json::Value::Null)
        );
        assert_eq!(
            value.pointer("/day_ranges/0/day_high"),
            Some(&serde_json::Value::from(2.0))
        );
    }
}
