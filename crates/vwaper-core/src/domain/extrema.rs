use serde::{Deserialize, Serialize};

/// Running day high / day low for one stock.
///
/// Seeded at the widest finite bounds so the first observation always
/// replaces both sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceExtrema {
    high: f64,
    low: f64,
}

impl PriceExtrema {
    pub const fn new() -> Self {
        Self {
            high: f64::MIN,
            low: f64::MAX,
        }
    }

    /// Folds one record's high/low into the running bounds.
    ///
    /// A NaN price never replaces a bound.
    pub fn observe(&mut self, high: f64, low: f64) {
        if high > self.high {
            self.high = high;
        }
        if low < self.low {
            self.low = low;
        }
    }

    pub const fn high(&self) -> f64 {
        self.high
    }

    pub const fn low(&self) -> f64 {
        self.low
    }
}

impl Default for PriceExtrema {
    fn default() -> Self {
        Self::new()
    }
}
