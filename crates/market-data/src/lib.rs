//! Stockview Market Data Crate
//!
//! This crate talks to the upstream market-data vendor (Alpha Vantage) and
//! turns its loosely-typed JSON into typed values.
//!
//! # Overview
//!
//! - [`provider::MarketDataProvider`]: the seam the rest of the workspace depends on
//! - [`provider::alpha_vantage::AlphaVantageProvider`]: the HTTP implementation
//! - [`models`]: daily bars, time series and the vendor "global quote" snapshot
//! - [`errors::MarketDataError`]: transport, vendor notice and decode failures
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +----------------------+
//! |  QuoteService    | --> |  MarketDataProvider  |  (trait object)
//! +------------------+     +----------------------+
//!                                    |
//!                                    v
//!                        +-----------------------+
//!                        | AlphaVantageProvider  |  fetch -> check notices -> decode
//!                        +-----------------------+
//!                                    |
//!                                    v
//!                          TimeSeries / GlobalQuote
//! ```
//!
//! Decoding is strict: a field that is present but does not parse yields
//! [`MarketDataError::DecodeFailed`] instead of a silently missing value.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{DailyBar, GlobalQuote, Symbol, TimeSeries};
pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::MarketDataProvider;
