//! Alpha Vantage market data provider implementation.
//!
//! This module provides market data from the Alpha Vantage API:
//! - Daily equity series via the TIME_SERIES_DAILY endpoint
//! - Current quote snapshot via the GLOBAL_QUOTE endpoint
//!
//! Note: the free tier is limited to a handful of calls per minute and answers
//! throttled calls with HTTP 200 and a "Note"/"Information" notice.

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{DailyBar, GlobalQuote, TimeSeries};
use crate::provider::MarketDataProvider;

pub const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Alpha Vantage market data provider.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

// ============================================================================
// Response structures for Alpha Vantage API
// ============================================================================

/// TIME_SERIES_DAILY response
#[derive(Debug, Deserialize)]
struct TimeSeriesResponse {
    #[serde(rename = "Time Series (Daily)")]
    time_series: Option<HashMap<String, RawDailyBar>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDailyBar {
    #[serde(rename = "1. open")]
    open: Option<String>,
    #[serde(rename = "2. high")]
    high: Option<String>,
    #[serde(rename = "3. low")]
    low: Option<String>,
    #[serde(rename = "4. close")]
    close: Option<String>,
    #[serde(rename = "5. volume")]
    volume: Option<String>,
}

/// GLOBAL_QUOTE response. Unknown symbols come back as an empty object.
#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<HashMap<String, String>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

// ============================================================================
// Decoding
// ============================================================================

fn decode_error(message: String) -> MarketDataError {
    MarketDataError::DecodeFailed {
        provider: PROVIDER_ID.to_string(),
        message,
    }
}

fn required<'a>(
    value: Option<&'a String>,
    field: &str,
    context: &str,
) -> Result<&'a str, MarketDataError> {
    value
        .map(String::as_str)
        .ok_or_else(|| decode_error(format!("missing '{}' in {}", field, context)))
}

fn parse_decimal(raw: &str, field: &str, context: &str) -> Result<Decimal, MarketDataError> {
    Decimal::from_str(raw.trim())
        .map_err(|_| decode_error(format!("invalid decimal '{}' for '{}' in {}", raw, field, context)))
}

fn parse_date(raw: &str, context: &str) -> Result<NaiveDate, MarketDataError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| decode_error(format!("invalid date '{}' in {}", raw, context)))
}

impl RawDailyBar {
    fn decode(&self, context: &str) -> Result<DailyBar, MarketDataError> {
        Ok(DailyBar {
            open: Self::field(&self.open, "1. open", context)?,
            high: Self::field(&self.high, "2. high", context)?,
            low: Self::field(&self.low, "3. low", context)?,
            close: Self::field(&self.close, "4. close", context)?,
            volume: Self::field(&self.volume, "5. volume", context)?,
        })
    }

    fn field(value: &Option<String>, name: &str, context: &str) -> Result<Decimal, MarketDataError> {
        parse_decimal(required(value.as_ref(), name, context)?, name, context)
    }
}

fn quote_text<'a>(
    fields: &'a HashMap<String, String>,
    name: &str,
    context: &str,
) -> Result<&'a str, MarketDataError> {
    required(fields.get(name), name, context)
}

fn quote_number(
    fields: &HashMap<String, String>,
    name: &str,
    context: &str,
) -> Result<Decimal, MarketDataError> {
    parse_decimal(quote_text(fields, name, context)?, name, context)
}

fn decode_global_quote(
    fields: &HashMap<String, String>,
    context: &str,
) -> Result<GlobalQuote, MarketDataError> {
    let change_percent_raw = quote_text(fields, "10. change percent", context)?;
    let change_percent = parse_decimal(
        change_percent_raw.trim().trim_end_matches('%'),
        "10. change percent",
        context,
    )?;

    Ok(GlobalQuote {
        symbol: quote_text(fields, "01. symbol", context)?.to_string(),
        open: quote_number(fields, "02. open", context)?,
        high: quote_number(fields, "03. high", context)?,
        low: quote_number(fields, "04. low", context)?,
        price: quote_number(fields, "05. price", context)?,
        volume: quote_number(fields, "06. volume", context)?,
        latest_trading_day: parse_date(
            quote_text(fields, "07. latest trading day", context)?,
            context,
        )?,
        previous_close: quote_number(fields, "08. previous close", context)?,
        change: quote_number(fields, "09. change", context)?,
        change_percent,
    })
}

// ============================================================================
// AlphaVantageProvider implementation
// ============================================================================

impl AlphaVantageProvider {
    /// Create a provider against the public endpoint with the default timeout.
    pub fn new(api_key: String) -> Self {
        Self::with_options(api_key, BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a provider with an explicit endpoint and request timeout.
    pub fn with_options(api_key: String, base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Make a request to the Alpha Vantage API and return the raw body.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(&self.base_url, &all_params).map_err(|e| {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            }
        })?;

        debug!("Alpha Vantage request: {}", self.mask_key(url.as_str()));

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })
    }

    fn mask_key(&self, url: &str) -> String {
        if self.api_key.is_empty() {
            url.to_string()
        } else {
            url.replace(&self.api_key, "***")
        }
    }

    /// Check for API-level notices in the response.
    fn check_api_error(
        error_message: &Option<String>,
        note: &Option<String>,
        information: &Option<String>,
    ) -> Result<(), MarketDataError> {
        if let Some(ref msg) = error_message {
            if msg.contains("Invalid API call") || msg.contains("not found") {
                return Err(MarketDataError::SymbolNotFound(msg.clone()));
            }
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: msg.clone(),
            });
        }

        // "Note" usually indicates rate limiting
        if let Some(ref msg) = note {
            if msg.contains("API call frequency") || msg.contains("rate limit") {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage note: {}", msg);
        }

        if let Some(ref msg) = information {
            if msg.contains("API call frequency") || msg.contains("rate limit") {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage info: {}", msg);
        }

        Ok(())
    }

    /// Decode a TIME_SERIES_DAILY body.
    fn decode_time_series(symbol: &str, text: &str) -> Result<TimeSeries, MarketDataError> {
        let response: TimeSeriesResponse = serde_json::from_str(text)
            .map_err(|e| decode_error(format!("Failed to parse response: {}", e)))?;

        Self::check_api_error(
            &response.error_message,
            &response.note,
            &response.information,
        )?;

        let raw = response.time_series.ok_or_else(|| {
            MarketDataError::SymbolNotFound(format!("No time series for symbol: {}", symbol))
        })?;

        raw.iter()
            .map(|(date_str, bar)| -> Result<(NaiveDate, DailyBar), MarketDataError> {
                let context = format!("{} {}", symbol, date_str);
                let date = parse_date(date_str, &context)?;
                Ok((date, bar.decode(&context)?))
            })
            .collect()
    }

    /// Decode a GLOBAL_QUOTE body.
    fn decode_global_quote_response(
        symbol: &str,
        text: &str,
    ) -> Result<GlobalQuote, MarketDataError> {
        let response: GlobalQuoteResponse = serde_json::from_str(text)
            .map_err(|e| decode_error(format!("Failed to parse response: {}", e)))?;

        Self::check_api_error(
            &response.error_message,
            &response.note,
            &response.information,
        )?;

        let fields = response
            .global_quote
            .filter(|fields| !fields.is_empty())
            .ok_or_else(|| {
                MarketDataError::SymbolNotFound(format!("No global quote for symbol: {}", symbol))
            })?;

        decode_global_quote(&fields, symbol)
    }
}

// ============================================================================
// MarketDataProvider trait implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_time_series_daily(&self, symbol: &str) -> Result<TimeSeries, MarketDataError> {
        let params = [
            ("function", "TIME_SERIES_DAILY"),
            ("symbol", symbol),
            ("outputsize", "compact"), // 'full' is premium-only
        ];

        let text = self.fetch(&params).await?;
        let series = Self::decode_time_series(symbol, &text)?;

        debug!(
            "Alpha Vantage: fetched {} daily bars for {}",
            series.len(),
            symbol
        );

        Ok(series)
    }

    async fn get_global_quote(&self, symbol: &str) -> Result<GlobalQuote, MarketDataError> {
        let params = [("function", "GLOBAL_QUOTE"), ("symbol", symbol)];

        let text = self.fetch(&params).await?;
        let quote = Self::decode_global_quote_response(symbol, &text)?;

        debug!("Alpha Vantage: fetched global quote for {}", symbol);

        Ok(quote)
    }
}
