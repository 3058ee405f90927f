//! In-process source calling the upstream vendor without a relay.

use std::sync::Arc;

use async_trait::async_trait;
use stockview_core::{
    GainersLosers, QuoteService, QuoteServiceTrait, StockList, SymbolDetail, SymbolUniverses,
};
use stockview_market_data::{AlphaVantageProvider, MarketDataProvider};

use super::StockSource;
use crate::errors::Result;

/// [`StockSource`] that runs the relay's quote logic locally with an
/// embedded upstream key.
pub struct DirectSource {
    service: Arc<dyn QuoteServiceTrait>,
}

impl DirectSource {
    /// Direct source against the public Alpha Vantage endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_provider(Arc::new(AlphaVantageProvider::new(api_key.into())))
    }

    pub fn with_provider(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_service(Arc::new(QuoteService::with_universes(
            provider,
            SymbolUniverses::default(),
        )))
    }

    pub fn with_service(service: Arc<dyn QuoteServiceTrait>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl StockSource for DirectSource {
    async fn fetch_all(&self) -> Result<StockList> {
        Ok(self.service.get_all_stocks().await?)
    }

    async fn fetch_gainers_losers(&self) -> Result<GainersLosers> {
        Ok(self.service.get_gainers_losers().await?)
    }

    async fn fetch_symbol_detail(&self, symbol: &str) -> Result<SymbolDetail> {
        Ok(self.service.get_symbol_detail(symbol).await?)
    }
}
