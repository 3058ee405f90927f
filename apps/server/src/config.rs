use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use stockview_market_data::provider::alpha_vantage::BASE_URL;

/// Key the upstream vendor accepts for its sample data.
pub const DEMO_API_KEY: &str = "demo";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub api_key: String,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub request_timeout: Duration,
    pub cors_allow: Vec<String>,
    /// Comma-separated override of the `/stocks/all` symbols.
    pub aggregate_symbols: Option<String>,
    /// Comma-separated override of the `/stocks/gainers-losers` symbols.
    pub ranking_symbols: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5001)),
            api_key: DEMO_API_KEY.to_string(),
            upstream_url: BASE_URL.to_string(),
            upstream_timeout: Duration::from_millis(30000),
            request_timeout: Duration::from_millis(30000),
            cors_allow: vec!["*".to_string()],
            aggregate_symbols: None,
            ranking_symbols: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key -> value lookup.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let listen_addr = match var("SV_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid SV_LISTEN_ADDR: {addr}"))?,
            None => defaults.listen_addr,
        };
        let api_key = var("ALPHA_VANTAGE_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .unwrap_or(defaults.api_key);
        let upstream_url = var("SV_UPSTREAM_URL").unwrap_or(defaults.upstream_url);
        let cors_allow = var("SV_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            listen_addr,
            api_key,
            upstream_url,
            upstream_timeout: millis(var("SV_UPSTREAM_TIMEOUT_MS"), defaults.upstream_timeout),
            request_timeout: millis(var("SV_REQUEST_TIMEOUT_MS"), defaults.request_timeout),
            cors_allow,
            aggregate_symbols: var("SV_AGGREGATE_SYMBOLS"),
            ranking_symbols: var("SV_RANKING_SYMBOLS"),
        })
    }
}

fn millis(raw: Option<String>, default: Duration) -> Duration {
    raw.and_then(|ms| ms.parse().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.listen_addr.port(), 5001);
        assert_eq!(config.api_key, DEMO_API_KEY);
        assert_eq!(config.upstream_url, BASE_URL);
        assert_eq!(config.upstream_timeout, Duration::from_secs(30));
        assert_eq!(config.cors_allow, vec!["*"]);
        assert!(config.aggregate_symbols.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("SV_LISTEN_ADDR", "127.0.0.1:9000"),
            ("ALPHA_VANTAGE_API_KEY", "secret"),
            ("SV_UPSTREAM_TIMEOUT_MS", "1500"),
            ("SV_REQUEST_TIMEOUT_MS", "oops"),
            ("SV_CORS_ALLOW_ORIGINS", "http://a.test, http://b.test,"),
            ("SV_RANKING_SYMBOLS", "NVDA,AMD"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.upstream_timeout, Duration::from_millis(1500));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.cors_allow, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.ranking_symbols.as_deref(), Some("NVDA,AMD"));
    }

    #[test]
    fn test_invalid_listen_addr() {
        assert!(config(&[("SV_LISTEN_ADDR", "nowhere")]).is_err());
    }
}
