/// Ticker identifier for a tradable equity (e.g. `AAPL`).
pub type Symbol = String;

/// Canonical form used for cache keys and upstream requests.
pub fn normalize_symbol(raw: &str) -> Symbol {
    raw.trim().to_ascii_uppercase()
}
