use std::sync::Arc;

use crate::config::{Config, DEMO_API_KEY};
use stockview_core::{QuoteService, QuoteServiceTrait, SymbolUniverses};
use stockview_market_data::{AlphaVantageProvider, MarketDataProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SV_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    if config.api_key == DEMO_API_KEY {
        tracing::warn!("ALPHA_VANTAGE_API_KEY not set, using the vendor demo key");
    }
    let provider = Arc::new(AlphaVantageProvider::with_options(
        config.api_key.clone(),
        config.upstream_url.clone(),
        config.upstream_timeout,
    ));
    build_state_with_provider(config, provider).await
}

/// Same as [`build_state`] with an explicit upstream provider.
pub async fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
) -> anyhow::Result<Arc<AppState>> {
    let universes = SymbolUniverses::default().with_overrides(
        config.aggregate_symbols.as_deref(),
        config.ranking_symbols.as_deref(),
    );
    tracing::info!(
        "Serving {} aggregate and {} ranking symbols from {}",
        universes.aggregate.len(),
        universes.ranking.len(),
        provider.id()
    );

    let quote_service: Arc<dyn QuoteServiceTrait> =
        Arc::new(QuoteService::with_universes(provider, universes));

    Ok(Arc::new(AppState { quote_service }))
}
