//! Client data layer: source + per-symbol cache + in-flight de-duplication.

use std::sync::Arc;

use futures::FutureExt;
use log::debug;
use stockview_core::{GainersLosers, StockList, SymbolDetail};
use stockview_market_data::models::normalize_symbol;

use crate::cache::{CachePolicy, QuoteCache};
use crate::config::ClientConfig;
use crate::errors::Result;
use crate::inflight::InFlightRequests;
use crate::source::{HttpRelaySource, StockSource};

/// Entry point screens use to get quote data.
///
/// Detail lookups go through the cache; list lookups always hit the source.
pub struct StockDataLayer {
    source: Arc<dyn StockSource>,
    cache: Arc<QuoteCache>,
    in_flight: InFlightRequests,
}

impl StockDataLayer {
    pub fn new(source: Arc<dyn StockSource>, policy: CachePolicy) -> Self {
        Self {
            source,
            cache: Arc::new(QuoteCache::new(policy)),
            in_flight: InFlightRequests::new(),
        }
    }

    /// Data layer talking to the relay configured in `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let source = HttpRelaySource::new(config)?;
        Ok(Self::new(Arc::new(source), config.cache_policy))
    }

    pub fn cache(&self) -> &QuoteCache {
        &self.cache
    }

    /// Detail for one symbol, from the cache when possible.
    ///
    /// A miss calls the source once, however many callers are waiting, and
    /// stores the response under the symbol before any of them resumes.
    pub async fn fetch_symbol(&self, symbol: &str) -> Result<Arc<SymbolDetail>> {
        let symbol = normalize_symbol(symbol);
        if let Some(hit) = self.cache.get(&symbol).await {
            debug!("Cache hit for {}", symbol);
            return Ok(hit);
        }

        let source = Arc::clone(&self.source);
        let cache = Arc::clone(&self.cache);
        let key = symbol.clone();
        let fetch = self
            .in_flight
            .join_or_start(&symbol, move || fetch_and_store(source, cache, key).boxed());

        fetch.await
    }

    /// Aggregate list. Never cached.
    pub async fn fetch_all(&self) -> Result<StockList> {
        self.source.fetch_all().await
    }

    /// Gainers/losers partition. Never cached.
    pub async fn fetch_gainers_losers(&self) -> Result<GainersLosers> {
        self.source.fetch_gainers_losers().await
    }

    /// Abort a pending detail fetch for `symbol`.
    pub fn cancel(&self, symbol: &str) -> bool {
        self.in_flight.cancel(&normalize_symbol(symbol))
    }

    /// Drop the cached detail for `symbol` so the next lookup refetches.
    pub async fn invalidate(&self, symbol: &str) -> bool {
        self.cache.invalidate(&normalize_symbol(symbol)).await
    }

    pub async fn clear(&self) {
        self.cache.clear().await;
    }
}

async fn fetch_and_store(
    source: Arc<dyn StockSource>,
    cache: Arc<QuoteCache>,
    symbol: String,
) -> Result<Arc<SymbolDetail>> {
    let detail = Arc::new(source.fetch_symbol_detail(&symbol).await?);
    cache.insert(&symbol, Arc::clone(&detail)).await;
    Ok(detail)
}
