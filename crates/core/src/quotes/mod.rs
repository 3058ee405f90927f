//! Quote module.
//!
//! - [`model`] - Wire models returned by the relay (summaries, lists, detail)
//! - [`universe`] - The fixed symbol sets the batch endpoints walk
//! - [`ranking`] - Gainers/losers partition
//! - [`service`] - `QuoteService`, fanning requests out to the market data provider
//!
//! ```text
//! QuoteService → MarketDataProvider (market-data crate) → upstream vendor
//!      ↓
//! StockSummary / GainersLosers / SymbolDetail
//! ```

pub mod model;
pub mod ranking;
pub mod service;
pub mod universe;


pub use model::{percentage_change, GainersLosers, StockList, StockSummary, SymbolDetail};
pub use ranking::{rank_by_change, RANK_SIZE};
pub use service::{QuoteService, QuoteServiceTrait};
pub use universe::{SymbolUniverses, AGGREGATE_SYMBOLS, RANKING_SYMBOLS};
