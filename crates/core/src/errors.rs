//! Core error types for Stockview.

use stockview_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the quote service.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Not enough daily history for {symbol}: need 2 days, got {days}")]
    InsufficientHistory { symbol: String, days: usize },

    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),
}

impl Error {
    /// True when a batch operation should drop the symbol instead of failing.
    pub fn is_missing_data(&self) -> bool {
        match self {
            Error::MarketData(e) => e.is_missing_data(),
            Error::InsufficientHistory { .. } => true,
            Error::InvalidSymbol(_) => false,
        }
    }
}
