//! Detail screen state for one symbol.

use std::sync::Arc;

use log::error;
use rust_decimal::Decimal;
use stockview_core::SymbolDetail;
use stockview_market_data::models::normalize_symbol;

use crate::catalog::{self, Company};
use crate::data_layer::StockDataLayer;
use crate::errors::Result;
use crate::view::ScreenState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDirection {
    Positive,
    Negative,
}

impl ChangeDirection {
    /// Negative when the vendor's change value carries a minus sign.
    pub fn of(change: Decimal) -> Self {
        if change.is_sign_negative() {
            ChangeDirection::Negative
        } else {
            ChangeDirection::Positive
        }
    }
}

/// Header fields of the detail screen, plus the response they came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub symbol: String,
    pub company: Company,
    pub price: Decimal,
    pub change: Decimal,
    pub change_percent: Decimal,
    pub direction: ChangeDirection,
    pub detail: Arc<SymbolDetail>,
}

impl DetailView {
    pub fn new(detail: Arc<SymbolDetail>) -> Self {
        let quote = &detail.global_quote;
        Self {
            symbol: quote.symbol.clone(),
            company: catalog::lookup(&quote.symbol),
            price: quote.price,
            change: quote.change,
            change_percent: quote.change_percent,
            direction: ChangeDirection::of(quote.change),
            detail: Arc::clone(&detail),
        }
    }

    pub fn name(&self) -> &'static str {
        self.company.name()
    }

    pub fn description(&self) -> &'static str {
        self.company.description()
    }
}

pub struct DetailScreen {
    symbol: String,
    state: ScreenState<DetailView>,
}

impl DetailScreen {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: normalize_symbol(symbol),
            state: ScreenState::Loading,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn state(&self) -> &ScreenState<DetailView> {
        &self.state
    }

    /// Fetch the symbol's detail (cached after the first success) and apply it.
    pub async fn activate(&mut self, data: &StockDataLayer) {
        let result = data.fetch_symbol(&self.symbol).await;
        self.apply(result);
    }

    /// Store a fetch result. Failures are logged and leave the state as is.
    pub fn apply(&mut self, result: Result<Arc<SymbolDetail>>) {
        match result {
            Ok(detail) => self.state = ScreenState::Ready(DetailView::new(detail)),
            Err(e) => error!("Failed to load {}: {}", self.symbol, e),
        }
    }
}
