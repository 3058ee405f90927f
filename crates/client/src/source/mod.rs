//! Stock data sources.
//!
//! - [`HttpRelaySource`] - talks to the relay over HTTP
//! - [`DirectSource`] - calls the upstream vendor in-process through `QuoteService`

mod direct;
mod http;

pub use direct::DirectSource;
pub use http::HttpRelaySource;

use async_trait::async_trait;
use stockview_core::{GainersLosers, StockList, SymbolDetail};

use crate::errors::Result;

/// Where the data layer gets its quotes from.
#[async_trait]
pub trait StockSource: Send + Sync {
    async fn fetch_all(&self) -> Result<StockList>;

    async fn fetch_gainers_losers(&self) -> Result<GainersLosers>;

    async fn fetch_symbol_detail(&self, symbol: &str) -> Result<SymbolDetail>;
}
