//! Market data models
//!
//! - `types` - Symbol alias and normalization
//! - `quote` - Daily bars, time series and the vendor global quote snapshot

mod quote;
mod types;

pub use quote::{DailyBar, GlobalQuote, TimeSeries};
pub use types::{normalize_symbol, Symbol};
