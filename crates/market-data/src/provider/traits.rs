//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{GlobalQuote, TimeSeries};

/// Trait for market data providers.
///
/// Both calls are keyed by symbol only; credentials and endpoint live in the
/// implementation. Tests substitute in-memory implementations.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and errors.
    fn id(&self) -> &'static str;

    /// Fetch the daily series for a symbol.
    ///
    /// Returns [`MarketDataError::SymbolNotFound`] when the vendor answers
    /// without a series, and [`MarketDataError::DecodeFailed`] when the series
    /// is present but malformed.
    async fn get_time_series_daily(&self, symbol: &str) -> Result<TimeSeries, MarketDataError>;

    /// Fetch the current quote snapshot for a symbol.
    async fn get_global_quote(&self, symbol: &str) -> Result<GlobalQuote, MarketDataError>;
}
