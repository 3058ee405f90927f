//! Home screen state: the gainers/losers list and its filter.

use log::error;
use stockview_core::{GainersLosers, StockSummary};

use crate::data_layer::StockDataLayer;
use crate::errors::Result;

/// Which slice of the gainers/losers response the home screen lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewFilter {
    #[default]
    All,
    Gainers,
    Losers,
}

/// A screen is loading until its first successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState<T> {
    Loading,
    Ready(T),
}

impl<T> ScreenState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ScreenState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ScreenState::Loading => None,
            ScreenState::Ready(value) => Some(value),
        }
    }
}

/// Gainers/losers list with a local filter.
#[derive(Debug, Clone)]
pub struct HomeView {
    state: ScreenState<GainersLosers>,
    filter: ViewFilter,
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeView {
    pub fn new() -> Self {
        Self {
            state: ScreenState::Loading,
            filter: ViewFilter::All,
        }
    }

    pub fn state(&self) -> &ScreenState<GainersLosers> {
        &self.state
    }

    pub fn filter(&self) -> ViewFilter {
        self.filter
    }

    /// Fetch the gainers/losers list and apply it.
    pub async fn activate(&mut self, data: &StockDataLayer) {
        let result = data.fetch_gainers_losers().await;
        self.apply(result);
    }

    /// Store a fetch result. Failures are logged and leave the state as is.
    pub fn apply(&mut self, result: Result<GainersLosers>) {
        match result {
            Ok(ranked) => self.state = ScreenState::Ready(ranked),
            Err(e) => error!("Failed to load gainers/losers: {}", e),
        }
    }

    /// Select a filter; selecting the active one again goes back to `All`.
    pub fn select(&mut self, filter: ViewFilter) {
        self.filter = if self.filter == filter {
            ViewFilter::All
        } else {
            filter
        };
    }

    /// Rows to show for the current filter. `All` is gainers then losers.
    pub fn visible(&self) -> Vec<StockSummary> {
        let Some(ranked) = self.state.ready() else {
            return Vec::new();
        };
        match self.filter {
            ViewFilter::All => ranked.all(),
            ViewFilter::Gainers => ranked.gainers.clone(),
            ViewFilter::Losers => ranked.losers.clone(),
        }
    }
}
