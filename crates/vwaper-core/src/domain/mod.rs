mod extrema;
mod key;
mod record;

pub use extrema::PriceExtrema;
pub use key::IntervalKey;
pub use record::{Field, TradeRecord};
