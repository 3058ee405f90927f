//! Gainers/losers partition.
//!
//! The partition is by rank, not by sign: the top [`RANK_SIZE`] entries are
//! "gainers" and the bottom [`RANK_SIZE`] are "losers" even if every symbol
//! moved the same way. With fewer than `2 * RANK_SIZE` symbols the two lists
//! overlap.

use super::model::{GainersLosers, StockSummary};

pub const RANK_SIZE: usize = 3;

/// NaN (a zero open and close) ranks below every other value.
fn rank_key(summary: &StockSummary) -> f64 {
    if summary.percentage_change.is_nan() {
        f64::NEG_INFINITY
    } else {
        summary.percentage_change
    }
}

/// Sort by percentage change and split into gainers (descending) and losers
/// (ascending). Ties keep their input order within each list.
pub fn rank_by_change(mut summaries: Vec<StockSummary>) -> GainersLosers {
    summaries.sort_by(|a, b| rank_key(b).total_cmp(&rank_key(a)));

    let gainers = summaries.iter().take(RANK_SIZE).cloned().collect();
    let tail = summaries.len().saturating_sub(RANK_SIZE);
    let mut losers = summaries.split_off(tail);
    losers.sort_by(|a, b| rank_key(a).total_cmp(&rank_key(b)));

    GainersLosers { gainers, losers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn summary(symbol: &str, close: Decimal) -> StockSummary {
        StockSummary::new(symbol, dec!(100), close)
    }

    fn symbols(list: &[StockSummary]) -> Vec<&str> {
        list.iter().map(|s| s.symbol.as_str()).collect()
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = rank_by_change(vec![
            summary("X", dec!(95)),
            summary("Y", dec!(95)),
            summary("Z", dec!(110)),
            summary("W", dec!(110)),
        ]);

        assert_eq!(symbols(&ranked.gainers), vec!["Z", "W", "X"]);
        assert_eq!(symbols(&ranked.losers), vec!["X", "Y", "W"]);
    }

    #[test]
    fn test_flat_universe_does_not_overlap() {
        let flat: Vec<_> = ["A", "B", "C", "D", "E", "F", "G"]
            .into_iter()
            .map(|s| summary(s, dec!(100)))
            .collect();
        let ranked = rank_by_change(flat);

        assert_eq!(symbols(&ranked.gainers), vec!["A", "B", "C"]);
        assert_eq!(symbols(&ranked.losers), vec!["E", "F", "G"]);
    }

    #[test]
    fn test_rank_eight_symbols() {
        let ranked = rank_by_change(vec![
            summary("AAPL", dec!(101)),
            summary("GOOGL", dec!(97)),
            summary("AMZN", dec!(104)),
            summary("MSFT", dec!(99)),
            summary("TSLA", dec!(110)),
            summary("MS", dec!(95)),
            summary("IBM", dec!(102)),
            summary("FB", dec!(100)),
        ]);

        assert_eq!(symbols(&ranked.gainers), vec!["TSLA", "AMZN", "IBM"]);
        assert_eq!(symbols(&ranked.losers), vec!["MS", "GOOGL", "MSFT"]);

        assert!(ranked
            .gainers
            .windows(2)
            .all(|w| w[0].percentage_change > w[1].percentage_change));
        assert!(ranked
            .losers
            .windows(2)
            .all(|w| w[0].percentage_change < w[1].percentage_change));
        assert!(ranked
            .gainers
            .iter()
            .all(|g| !ranked.losers.iter().any(|l| l.symbol == g.symbol)));
    }

    #[test]
    fn test_rank_is_by_position_not_sign() {
        let ranked = rank_by_change(vec![
            summary("A", dec!(101)),
            summary("B", dec!(102)),
            summary("C", dec!(103)),
            summary("D", dec!(104)),
            summary("E", dec!(105)),
            summary("F", dec!(106)),
            summary("G", dec!(107)),
        ]);
        assert!(ranked.losers.iter().all(|s| s.percentage_change > 0.0));
        assert_eq!(symbols(&ranked.losers), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_small_universe_overlaps() {
        let ranked = rank_by_change(vec![summary("A", dec!(90)), summary("B", dec!(110))]);
        assert_eq!(symbols(&ranked.gainers), vec!["B", "A"]);
        assert_eq!(symbols(&ranked.losers), vec!["A", "B"]);
    }

    #[test]
    fn test_empty_input() {
        let ranked = rank_by_change(Vec::new());
        assert!(ranked.gainers.is_empty());
        assert!(ranked.losers.is_empty());
    }

    #[test]
    fn test_nan_ranks_last() {
        let ranked = rank_by_change(vec![
            StockSummary::new("ZERO", dec!(0), dec!(0)),
            summary("A", dec!(90)),
            summary("B", dec!(110)),
        ]);
        assert_eq!(ranked.losers[0].symbol, "ZERO");
        assert_eq!(ranked.gainers[0].symbol, "B");
    }
}
