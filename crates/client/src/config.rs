//! Client configuration.

use std::time::Duration;

use crate::cache::CachePolicy;

/// Relay address used when none is configured.
pub const DEFAULT_RELAY_URL: &str = "http://localhost:5001";

/// Default timeout for relay requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`StockDataLayer`](crate::StockDataLayer).
///
/// ```
/// use std::time::Duration;
/// use stockview_client::{CachePolicy, ClientConfig};
///
/// let config = ClientConfig::new("http://10.0.0.5:5001/")
///     .with_cache_policy(CachePolicy::Ttl(Duration::from_secs(60)));
/// assert_eq!(config.relay_url, "http://10.0.0.5:5001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the relay, without a trailing slash.
    pub relay_url: String,
    pub cache_policy: CachePolicy,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RELAY_URL)
    }
}

impl ClientConfig {
    pub fn new(relay_url: impl Into<String>) -> Self {
        let relay_url: String = relay_url.into();
        Self {
            relay_url: relay_url.trim_end_matches('/').to_string(),
            cache_policy: CachePolicy::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_cache_policy(mut self, policy: CachePolicy) -> Self {
        self.cache_policy = policy;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.relay_url, DEFAULT_RELAY_URL);
        assert_eq!(config.cache_policy, CachePolicy::Forever);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }
}
