//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to the upstream vendor.
///
/// The relay only distinguishes two outcomes: "this symbol has no data"
/// (see [`is_missing_data`](Self::is_missing_data)) and everything else,
/// which fails the whole request.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The vendor returned no series or quote for the symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The vendor rate limited the request, either with HTTP 429 or with a
    /// "Note"/"Information" notice in place of data.
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (non-success HTTP status, vendor
    /// error message, unreadable body).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The response was readable but a field did not match the expected schema.
    #[error("Decode failed: {provider} - {message}")]
    DecodeFailed {
        /// The provider whose payload failed to decode
        provider: String,
        /// What was wrong with the payload
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns true when the error only means "no data for this symbol".
    ///
    /// Batch operations drop such symbols from their result instead of
    /// failing the request. This mirrors the vendor's habit of answering a
    /// throttled or unknown symbol with a 200 and a notice instead of data.
    ///
    /// # Examples
    ///
    /// ```
    /// use stockview_market_data::errors::MarketDataError;
    ///
    /// let error = MarketDataError::SymbolNotFound("FB".to_string());
    /// assert!(error.is_missing_data());
    ///
    /// let error = MarketDataError::Timeout { provider: "ALPHA_VANTAGE".to_string() };
    /// assert!(!error.is_missing_data());
    /// ```
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_) | Self::RateLimited { .. })
    }
}
