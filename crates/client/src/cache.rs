//! Per-symbol cache of detail responses.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use stockview_core::SymbolDetail;
use tokio::sync::RwLock;

/// When a cached detail stops being served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CachePolicy {
    /// Entries live until invalidated or the cache is dropped.
    #[default]
    Forever,
    /// Entries older than the duration are refetched.
    Ttl(Duration),
}

impl CachePolicy {
    fn is_fresh(&self, stored_at: Instant) -> bool {
        match self {
            CachePolicy::Forever => true,
            CachePolicy::Ttl(ttl) => stored_at.elapsed() < *ttl,
        }
    }
}

struct CacheEntry {
    detail: Arc<SymbolDetail>,
    stored_at: Instant,
}

/// Symbol-keyed store of the last detail fetched for each symbol.
///
/// Hits hand back the stored `Arc` itself. Writes are last-write-wins.
pub struct QuoteCache {
    policy: CachePolicy,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

impl QuoteCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// The cached detail for `symbol`, if present and fresh under the policy.
    pub async fn get(&self, symbol: &str) -> Option<Arc<SymbolDetail>> {
        let entries = self.entries.read().await;
        let entry = entries.get(symbol)?;
        if self.policy.is_fresh(entry.stored_at) {
            Some(Arc::clone(&entry.detail))
        } else {
            debug!("Cache entry for {} expired", symbol);
            None
        }
    }

    pub async fn insert(&self, symbol: &str, detail: Arc<SymbolDetail>) {
        self.entries.write().await.insert(
            symbol.to_string(),
            CacheEntry {
                detail,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop one symbol. Returns whether an entry was present.
    pub async fn invalidate(&self, symbol: &str) -> bool {
        self.entries.write().await.remove(symbol).is_some()
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
