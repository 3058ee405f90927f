//! Relay response models.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use stockview_market_data::{GlobalQuote, TimeSeries};

use crate::errors::{Error, Result};

/// Percent change from `open` to `close`: `((close - open) / open) * 100`.
///
/// No guard for `open == 0`; the result is then infinite or NaN.
pub fn percentage_change(open: f64, close: f64) -> f64 {
    ((close - open) / open) * 100.0
}

/// One row of the aggregate and gainers/losers lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSummary {
    pub symbol: String,
    /// Open of the day before the latest trading day.
    #[serde(with = "rust_decimal::serde::float")]
    pub open_price: Decimal,
    /// Close of the latest trading day.
    #[serde(with = "rust_decimal::serde::float")]
    pub close_price: Decimal,
    /// Non-finite values serialize as `null` and read back as NaN.
    #[serde(deserialize_with = "nullable_f64")]
    pub percentage_change: f64,
}

impl StockSummary {
    pub fn new(symbol: impl Into<String>, open_price: Decimal, close_price: Decimal) -> Self {
        let percentage_change = percentage_change(
            open_price.to_f64().unwrap_or(f64::NAN),
            close_price.to_f64().unwrap_or(f64::NAN),
        );
        Self {
            symbol: symbol.into(),
            open_price,
            close_price,
            percentage_change,
        }
    }

    /// Summarize a daily series from its two most recent days.
    pub fn from_series(symbol: &str, series: &TimeSeries) -> Result<Self> {
        let (latest, previous) =
            series
                .latest_two()
                .ok_or_else(|| Error::InsufficientHistory {
                    symbol: symbol.to_string(),
                    days: series.len(),
                })?;
        Ok(Self::new(symbol, previous.open, latest.close))
    }

    pub fn is_gain(&self) -> bool {
        self.percentage_change >= 0.0
    }
}

fn nullable_f64<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// `GET /stocks/all` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockList {
    pub stocks: Vec<StockSummary>,
}

/// `GET /stocks/gainers-losers` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GainersLosers {
    /// Highest percentage change first.
    pub gainers: Vec<StockSummary>,
    /// Lowest percentage change first.
    pub losers: Vec<StockSummary>,
}

impl GainersLosers {
    /// Gainers followed by losers, the list the home screen shows unfiltered.
    pub fn all(&self) -> Vec<StockSummary> {
        self.gainers.iter().chain(&self.losers).cloned().collect()
    }
}

/// `GET /stocks/{symbol}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDetail {
    pub time_series_daily: TimeSeries,
    pub global_quote: GlobalQuote,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use stockview_market_data::DailyBar;

    #[test]
    fn test_percentage_change() {
        assert_eq!(percentage_change(100.0, 110.0), 10.0);
        assert_eq!(percentage_change(100.0, 90.0), -10.0);
        assert_eq!(percentage_change(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_percentage_change_zero_open_is_not_finite() {
        assert!(!percentage_change(0.0, 10.0).is_finite());
        assert!(percentage_change(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_summary_from_series_uses_previous_open_and_latest_close() {
        let bar = |open, close| DailyBar {
            open,
            high: dec!(999),
            low: dec!(1),
            close,
            volume: dec!(1),
        };
        let series: TimeSeries = vec![
            (NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(), bar(dec!(50), dec!(51))),
            (NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(), bar(dec!(100), dec!(104))),
            (NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(), bar(dec!(105), dec!(110))),
        ]
        .into_iter()
        .collect();

        let summary = StockSummary::from_series("AAPL", &series).unwrap();
        assert_eq!(summary.open_price, dec!(100));
        assert_eq!(summary.close_price, dec!(110));
        assert_eq!(summary.percentage_change, 10.0);
    }

    #[test]
    fn test_summary_from_short_series() {
        let err = StockSummary::from_series("AAPL", &TimeSeries::default()).unwrap_err();
        assert!(matches!(err, Error::InsufficientHistory { days: 0, .. }));
        assert!(err.is_missing_data());
    }

    #[test]
    fn test_summary_wire_shape() {
        let summary = StockSummary::new("MSFT", dec!(400), dec!(410));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["symbol"], "MSFT");
        assert_eq!(json["openPrice"], 400.0);
        assert_eq!(json["closePrice"], 410.0);
        assert_eq!(json["percentageChange"], 2.5);
    }

    #[test]
    fn test_non_finite_change_round_trips_as_null() {
        let summary = StockSummary::new("ZERO", dec!(0), dec!(0));
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"percentageChange\":null"), "{json}");

        let back: StockSummary = serde_json::from_str(&json).unwrap();
        assert!(back.percentage_change.is_nan());
    }

    #[test]
    fn test_all_concatenates_gainers_then_losers() {
        let list = GainersLosers {
            gainers: vec![StockSummary::new("A", dec!(100), dec!(105))],
            losers: vec![StockSummary::new("B", dec!(100), dec!(95))],
        };
        let symbols: Vec<_> = list.all().into_iter().map(|s| s.symbol).collect();
        assert_eq!(symbols, vec!["A", "B"]);
    }
}
