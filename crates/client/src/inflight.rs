//! Per-symbol in-flight request tracking.
//!
//! Concurrent fetches of one symbol join a single shared future instead of
//! each calling the source. A pending fetch can be aborted; every caller
//! waiting on it then sees [`ClientError::Cancelled`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{AbortHandle, Abortable, Aborted, BoxFuture, Shared};
use futures::FutureExt;
use log::debug;
use stockview_core::SymbolDetail;

use crate::errors::{ClientError, Result};

/// A fetch every waiter can poll; each gets a clone of the one result.
pub type SharedFetch = Shared<BoxFuture<'static, Result<Arc<SymbolDetail>>>>;

struct Pending {
    id: u64,
    fetch: SharedFetch,
    abort: AbortHandle,
}

type PendingMap = Arc<Mutex<HashMap<String, Pending>>>;

fn lock(map: &PendingMap) -> MutexGuard<'_, HashMap<String, Pending>> {
    map.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Default)]
pub struct InFlightRequests {
    next_id: AtomicU64,
    pending: PendingMap,
}

impl InFlightRequests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the pending fetch for `symbol`, or start one with `start`.
    ///
    /// The entry removes itself once the fetch settles, so a later call
    /// starts fresh.
    pub fn join_or_start<F>(&self, symbol: &str, start: F) -> SharedFetch
    where
        F: FnOnce() -> BoxFuture<'static, Result<Arc<SymbolDetail>>>,
    {
        let mut pending = lock(&self.pending);
        if let Some(existing) = pending.get(symbol) {
            debug!("Joining in-flight fetch for {}", symbol);
            return existing.fetch.clone();
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (abort, registration) = AbortHandle::new_pair();
        let fetch = Abortable::new(start(), registration);
        let map = Arc::clone(&self.pending);
        let key = symbol.to_string();

        let shared = async move {
            let result = match fetch.await {
                Ok(result) => result,
                Err(Aborted) => Err(ClientError::Cancelled),
            };
            {
                let mut pending = lock(&map);
                if pending.get(&key).is_some_and(|p| p.id == id) {
                    pending.remove(&key);
                }
            }
            result
        }
        .boxed()
        .shared();

        pending.insert(
            symbol.to_string(),
            Pending {
                id,
                fetch: shared.clone(),
                abort,
            },
        );
        shared
    }

    /// Abort the pending fetch for `symbol`. Returns whether one existed.
    pub fn cancel(&self, symbol: &str) -> bool {
        match lock(&self.pending).remove(symbol) {
            Some(pending) => {
                debug!("Cancelling in-flight fetch for {}", symbol);
                pending.abort.abort();
                true
            }
            None => false,
        }
    }

    /// Symbols with a fetch currently pending.
    pub fn len(&self) -> usize {
        lock(&self.pending).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.pending).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::detail;
    use rust_decimal_macros::dec;
    use std::sync::atomic::AtomicUsize;

    fn counted_fetch(
        calls: &Arc<AtomicUsize>,
    ) -> impl FnOnce() -> BoxFuture<'static, Result<Arc<SymbolDetail>>> {
        let calls = Arc::clone(calls);
        move || {
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                tokio::task::yield_now().await;
                Ok::<_, ClientError>(Arc::new(detail("IBM", dec!(1))))
            }
            .boxed()
        }
    }

    #[tokio::test]
    async fn test_concurrent_joins_share_one_fetch() {
        let in_flight = InFlightRequests::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let first = in_flight.join_or_start("IBM", counted_fetch(&calls));
        let second = in_flight.join_or_start("IBM", counted_fetch(&calls));
        assert_eq!(in_flight.len(), 1);

        let (a, b) = tokio::join!(first, second);
        assert!(Arc::ptr_eq(&a.unwrap(), &b.unwrap()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(in_flight.is_empty());
    }

    #[tokio::test]
    async fn test_settled_fetch_is_not_reused() {
        let in_flight = InFlightRequests::new();
        let calls = Arc::new(AtomicUsize::new(0));

        in_flight
            .join_or_start("IBM", counted_fetch(&calls))
            .await
            .unwrap();
        in_flight
            .join_or_start("IBM", counted_fetch(&calls))
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_cancel_reaches_every_waiter() {
        let in_flight = InFlightRequests::new();
        let never = || futures::future::pending().boxed();

        let first = in_flight.join_or_start("IBM", never);
        let second = in_flight.join_or_start("IBM", never);
        assert!(in_flight.cancel("IBM"));
        assert!(!in_flight.cancel("IBM"));

        let (a, b) = tokio::join!(first, second);
        assert_eq!(a.unwrap_err(), ClientError::Cancelled);
        assert_eq!(b.unwrap_err(), ClientError::Cancelled);
        assert!(in_flight.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_entry_does_not_remove_successor() {
        let in_flight = InFlightRequests::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let cancelled = in_flight.join_or_start("IBM", || futures::future::pending().boxed());
        in_flight.cancel("IBM");
        let successor = in_flight.join_or_start("IBM", counted_fetch(&calls));

        // The aborted fetch settles while its successor is still registered.
        assert_eq!(cancelled.await.unwrap_err(), ClientError::Cancelled);
        assert_eq!(in_flight.len(), 1);

        successor.await.unwrap();
        assert!(in_flight.is_empty());
    }
}
