//! Fixtures shared by the client unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use stockview_core::{GainersLosers, StockList, StockSummary, SymbolDetail};
use stockview_market_data::{DailyBar, GlobalQuote, TimeSeries};

use crate::errors::{ClientError, Result};
use crate::source::StockSource;

pub fn detail(symbol: &str, price: Decimal) -> SymbolDetail {
    let day = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
    let bar = DailyBar {
        open: price,
        high: price,
        low: price,
        close: price,
        volume: dec!(100),
    };
    SymbolDetail {
        time_series_daily: TimeSeries::from_iter([(day, bar)]),
        global_quote: GlobalQuote {
            symbol: symbol.to_string(),
            open: price,
            high: price,
            low: price,
            price,
            volume: dec!(100),
            latest_trading_day: day,
            previous_close: price,
            change: dec!(-1.5),
            change_percent: dec!(-0.8),
        },
    }
}

pub fn ranked() -> GainersLosers {
    GainersLosers {
        gainers: vec![
            StockSummary::new("TSLA", dec!(100), dec!(110)),
            StockSummary::new("AMZN", dec!(100), dec!(104)),
            StockSummary::new("IBM", dec!(100), dec!(102)),
        ],
        losers: vec![
            StockSummary::new("MS", dec!(100), dec!(95)),
            StockSummary::new("GOOGL", dec!(100), dec!(97)),
            StockSummary::new("MSFT", dec!(100), dec!(99)),
        ],
    }
}

/// Source that counts calls and can be told to fail or stall.
#[derive(Default)]
pub struct FakeSource {
    pub detail_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    pub fail: bool,
    pub delay: Option<Duration>,
}

impl FakeSource {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    async fn settle(&self) -> Result<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(ClientError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl StockSource for FakeSource {
    async fn fetch_all(&self) -> Result<StockList> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.settle().await?;
        Ok(StockList {
            stocks: ranked().all(),
        })
    }

    async fn fetch_gainers_losers(&self) -> Result<GainersLosers> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.settle().await?;
        Ok(ranked())
    }

    async fn fetch_symbol_detail(&self, symbol: &str) -> Result<SymbolDetail> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.settle().await?;
        Ok(detail(symbol, dec!(169.23)))
    }
}
