//! Quote Service.
//!
//! Fans each relay request out to the market data provider and reshapes the
//! results:
//! - aggregate list over the aggregate universe
//! - gainers/losers over the ranking universe
//! - raw series + quote for one symbol

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, error, warn};
use std::sync::Arc;
use stockview_market_data::models::normalize_symbol;
use stockview_market_data::MarketDataProvider;

use super::model::{GainersLosers, StockList, StockSummary, SymbolDetail};
use super::ranking::rank_by_change;
use super::universe::SymbolUniverses;
use crate::errors::{Error, Result};

/// The three read operations the relay exposes.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Summaries for every symbol of the aggregate universe that has data.
    async fn get_all_stocks(&self) -> Result<StockList>;

    /// Top and bottom of the ranking universe by percentage change.
    async fn get_gainers_losers(&self) -> Result<GainersLosers>;

    /// Daily series and current quote for one symbol.
    async fn get_symbol_detail(&self, symbol: &str) -> Result<SymbolDetail>;
}

pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
    universes: SymbolUniverses,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_universes(provider, SymbolUniverses::default())
    }

    pub fn with_universes(provider: Arc<dyn MarketDataProvider>, universes: SymbolUniverses) -> Self {
        Self {
            provider,
            universes,
        }
    }

    pub fn universes(&self) -> &SymbolUniverses {
        &self.universes
    }

    /// Fetch every symbol's series concurrently and summarize them.
    ///
    /// Waits for all calls. Symbols without usable data are dropped; any
    /// other failure fails the batch.
    async fn summarize(&self, symbols: &[String]) -> Result<Vec<StockSummary>> {
        let responses = join_all(
            symbols
                .iter()
                .map(|symbol| self.provider.get_time_series_daily(symbol)),
        )
        .await;

        let mut summaries = Vec::with_capacity(symbols.len());
        for (symbol, response) in symbols.iter().zip(responses) {
            let summary = response
                .map_err(Error::from)
                .and_then(|series| StockSummary::from_series(symbol, &series));

            match summary {
                Ok(summary) => summaries.push(summary),
                Err(e) if e.is_missing_data() => {
                    warn!("Skipping {} from {}: {}", symbol, self.provider.id(), e);
                }
                Err(e) => {
                    error!("Failed to fetch {} from {}: {}", symbol, self.provider.id(), e);
                    return Err(e);
                }
            }
        }

        debug!(
            "Summarized {} of {} symbols",
            summaries.len(),
            symbols.len()
        );
        Ok(summaries)
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_all_stocks(&self) -> Result<StockList> {
        let stocks = self.summarize(&self.universes.aggregate).await?;
        Ok(StockList { stocks })
    }

    async fn get_gainers_losers(&self) -> Result<GainersLosers> {
        let summaries = self.summarize(&self.universes.ranking).await?;
        Ok(rank_by_change(summaries))
    }

    async fn get_symbol_detail(&self, symbol: &str) -> Result<SymbolDetail> {
        let symbol = normalize_symbol(symbol);
        if symbol.is_empty() {
            return Err(Error::InvalidSymbol(symbol));
        }

        let (time_series_daily, global_quote) = futures::try_join!(
            self.provider.get_time_series_daily(&symbol),
            self.provider.get_global_quote(&symbol),
        )?;

        debug!(
            "Fetched detail for {}: {} daily bars, price {}",
            symbol,
            time_series_daily.len(),
            global_quote.price
        );

        Ok(SymbolDetail {
            time_series_daily,
            global_quote,
        })
    }
}
