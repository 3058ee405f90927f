//! Stockview Core - quote summaries, rankings and the quote service.
//!
//! This crate holds the relay's business logic. It depends on the
//! `market-data` crate only through the `MarketDataProvider` trait, so the
//! service can be driven by in-memory providers in tests.

pub mod errors;
pub mod quotes;

pub use errors::Error;
pub use errors::Result;
pub use quotes::{
    percentage_change, GainersLosers, QuoteService, QuoteServiceTrait, StockList, StockSummary,
    SymbolDetail, SymbolUniverses,
};
