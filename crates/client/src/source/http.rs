//! HTTP source for the relay's `/stocks` routes.

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use stockview_core::{GainersLosers, StockList, SymbolDetail};

use super::StockSource;
use crate::config::ClientConfig;
use crate::errors::{ClientError, Result};

/// Error body the relay sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// [`StockSource`] backed by the relay's HTTP surface.
#[derive(Debug, Clone)]
pub struct HttpRelaySource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRelaySource {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.relay_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Relay] GET {}", url);

        let response = self.client.get(&url).send().await?;
        parse_response(response).await
    }
}

/// Path of the detail route; the symbol is percent-encoded as one segment.
fn detail_path(symbol: &str) -> String {
    format!("/stocks/{}", urlencoding::encode(symbol))
}

async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<RelayErrorBody>(&body)
            .ok()
            .and_then(|err| err.message)
            .unwrap_or_else(|| body.chars().take(200).collect());
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl StockSource for HttpRelaySource {
    async fn fetch_all(&self) -> Result<StockList> {
        self.get("/stocks/all").await
    }

    async fn fetch_gainers_losers(&self) -> Result<GainersLosers> {
        self.get("/stocks/gainers-losers").await
    }

    async fn fetch_symbol_detail(&self, symbol: &str) -> Result<SymbolDetail> {
        self.get(&detail_path(symbol)).await
    }
}
