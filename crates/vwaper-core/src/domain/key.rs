use serde::{Deserialize, Serialize};

/// Composite `(stock, interval)` grouping key.
///
/// Ordering is stock ascending (byte-wise), then interval ascending; field
/// order below is what the derived `Ord` relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IntervalKey {
    pub stock: String,
    pub interval: i64,
}

impl IntervalKey {
    pub fn new(stock: impl Into<String>, interval: i64) -> Self {
        Self {
            stock: stock.into(),
            interval,
        }
    }
}
