//! Symbol universes walked by the batch endpoints.

use stockview_market_data::models::normalize_symbol;

/// Symbols listed by `GET /stocks/all`.
pub const AGGREGATE_SYMBOLS: &[&str] = &["AAPL", "GOOGL", "AMZN", "MSFT", "TSLA", "IBM", "META"];

/// Symbols ranked by `GET /stocks/gainers-losers`.
pub const RANKING_SYMBOLS: &[&str] = &["AAPL", "GOOGL", "AMZN", "MSFT", "TSLA", "MS", "IBM", "FB"];

/// The two fixed symbol lists. Order is preserved in responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolUniverses {
    pub aggregate: Vec<String>,
    pub ranking: Vec<String>,
}

impl Default for SymbolUniverses {
    fn default() -> Self {
        Self {
            aggregate: AGGREGATE_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            ranking: RANKING_SYMBOLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SymbolUniverses {
    /// Parse a comma-separated symbol list, normalizing case and dropping
    /// blanks and repeats.
    pub fn parse_list(raw: &str) -> Vec<String> {
        let mut symbols: Vec<String> = Vec::new();
        for symbol in raw.split(',').map(normalize_symbol) {
            if !symbol.is_empty() && !symbols.contains(&symbol) {
                symbols.push(symbol);
            }
        }
        symbols
    }

    /// Replace either list when an override is given and non-empty.
    pub fn with_overrides(mut self, aggregate: Option<&str>, ranking: Option<&str>) -> Self {
        if let Some(list) = aggregate.map(Self::parse_list).filter(|l| !l.is_empty()) {
            self.aggregate = list;
        }
        if let Some(list) = ranking.map(Self::parse_list).filter(|l| !l.is_empty()) {
            self.ranking = list;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_universes() {
        let universes = SymbolUniverses::default();
        assert_eq!(universes.aggregate.len(), 7);
        assert_eq!(universes.ranking.len(), 8);
        assert_eq!(universes.ranking[5], "MS");
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            SymbolUniverses::parse_list(" aapl, MSFT,,AAPL , ibm"),
            vec!["AAPL", "MSFT", "IBM"]
        );
        assert!(SymbolUniverses::parse_list(" , ").is_empty());
    }

    #[test]
    fn test_with_overrides_ignores_empty_lists() {
        let universes = SymbolUniverses::default().with_overrides(Some(""), Some("nvda,amd"));
        assert_eq!(universes.aggregate, SymbolUniverses::default().aggregate);
        assert_eq!(universes.ranking, vec!["NVDA", "AMD"]);
    }
}
