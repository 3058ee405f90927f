//! Stockview Client - the data layer behind the list and detail screens.
//!
//! # Overview
//!
//! - [`StockSource`]: where quotes come from ([`HttpRelaySource`] or [`DirectSource`])
//! - [`StockDataLayer`]: per-symbol cache and in-flight de-duplication over a source
//! - [`HomeView`] / [`DetailScreen`]: screen state derived from fetched data
//! - [`catalog`]: static company info keyed by symbol
//!
//! ```text
//! HomeView / DetailScreen
//!          |
//!          v
//!   StockDataLayer --> QuoteCache (symbol -> Arc<SymbolDetail>)
//!          |       \-> InFlightRequests (symbol -> shared fetch)
//!          v
//!     StockSource --> relay over HTTP | QuoteService in-process
//! ```

pub mod cache;
pub mod catalog;
pub mod config;
pub mod data_layer;
pub mod detail;
pub mod errors;
pub mod inflight;
pub mod source;
pub mod view;

#[cfg(test)]
mod test_support;

pub use cache::{CachePolicy, QuoteCache};
pub use catalog::{Company, CompanyInfo};
pub use config::ClientConfig;
pub use data_layer::StockDataLayer;
pub use detail::{ChangeDirection, DetailScreen, DetailView};
pub use errors::{ClientError, Result};
pub use source::{DirectSource, HttpRelaySource, StockSource};
pub use view::{HomeView, ScreenState, ViewFilter};
