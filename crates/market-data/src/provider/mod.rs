//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait the relay and client depend on
//! - The Alpha Vantage implementation

mod traits;

pub mod alpha_vantage;

pub use traits::MarketDataProvider;
