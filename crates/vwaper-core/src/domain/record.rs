use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Positional fields of a trade line, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Stock,
    Interval,
    Volume,
    High,
    Low,
}

impl Field {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Interval => "interval",
            Self::Volume => "volume",
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed trade line.
///
/// No semantic checks are applied: `high < low` and negative volumes are
/// carried through as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub stock: String,
    pub interval: i64,
    pub volume: i64,
    pub high: f64,
    pub low: f64,
}

impl TradeRecord {
    pub fn new(stock: impl Into<String>, interval: i64, volume: i64, high: f64, low: f64) -> Self {
        Self {
            stock: stock.into(),
            interval,
            volume,
            high,
            low,
        }
    }
}
