use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

/// One trading day of a daily series.
///
/// Serializes with the vendor's labeled field names so the relay can hand
/// the series to clients in the shape they already know.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyBar {
    #[serde(rename = "1. open", with = "rust_decimal::serde::str")]
    pub open: Decimal,

    #[serde(rename = "2. high", with = "rust_decimal::serde::str")]
    pub high: Decimal,

    #[serde(rename = "3. low", with = "rust_decimal::serde::str")]
    pub low: Decimal,

    #[serde(rename = "4. close", with = "rust_decimal::serde::str")]
    pub close: Decimal,

    #[serde(rename = "5. volume", with = "rust_decimal::serde::str")]
    pub volume: Decimal,
}

/// Date-keyed daily series for one symbol.
///
/// Stored ordered by date; [`most_recent_first`](Self::most_recent_first)
/// walks it in the order the vendor delivers it. Serializes newest date first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries {
    bars: BTreeMap<NaiveDate, DailyBar>,
}

impl Serialize for TimeSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.bars.len()))?;
        for (date, bar) in self.most_recent_first() {
            map.serialize_entry(date, bar)?;
        }
        map.end()
    }
}

impl TimeSeries {
    pub fn new(bars: BTreeMap<NaiveDate, DailyBar>) -> Self {
        Self { bars }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&DailyBar> {
        self.bars.get(date)
    }

    /// Bars from the latest trading day backwards.
    pub fn most_recent_first(&self) -> impl Iterator<Item = (&NaiveDate, &DailyBar)> {
        self.bars.iter().rev()
    }

    pub fn latest(&self) -> Option<(&NaiveDate, &DailyBar)> {
        self.bars.iter().next_back()
    }

    /// The latest bar and the one before it, if the series has at least two days.
    pub fn latest_two(&self) -> Option<(&DailyBar, &DailyBar)> {
        let mut iter = self.most_recent_first();
        let (_, latest) = iter.next()?;
        let (_, previous) = iter.next()?;
        Some((latest, previous))
    }
}

impl FromIterator<(NaiveDate, DailyBar)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DailyBar)>>(iter: I) -> Self {
        Self {
            bars: iter.into_iter().collect(),
        }
    }
}

/// Vendor snapshot of the current price and change fields for one symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    pub symbol: String,

    #[serde(rename = "02. open", with = "rust_decimal::serde::str")]
    pub open: Decimal,

    #[serde(rename = "03. high", with = "rust_decimal::serde::str")]
    pub high: Decimal,

    #[serde(rename = "04. low", with = "rust_decimal::serde::str")]
    pub low: Decimal,

    #[serde(rename = "05. price", with = "rust_decimal::serde::str")]
    pub price: Decimal,

    #[serde(rename = "06. volume", with = "rust_decimal::serde::str")]
    pub volume: Decimal,

    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: NaiveDate,

    #[serde(rename = "08. previous close", with = "rust_decimal::serde::str")]
    pub previous_close: Decimal,

    #[serde(rename = "09. change", with = "rust_decimal::serde::str")]
    pub change: Decimal,

    /// Percent value without the trailing `%` (e.g. `1.2345` for "1.2345%").
    #[serde(rename = "10. change percent", with = "percent_str")]
    pub change_percent: Decimal,
}

/// `"1.2345%"` <-> `Decimal`.
mod percent_str {
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{}%", value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Decimal::from_str(raw.trim().trim_end_matches('%')).map_err(de::Error::custom)
    }
}
