//! Static symbol -> company catalog.
//!
//! Loads `symbols.json` at compile time via `include_str!` and indexes it
//! once via `lazy_static`. Symbols missing from the table resolve to
//! [`Company::Unknown`].

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use stockview_market_data::models::normalize_symbol;

pub const UNKNOWN_NAME: &str = "Unknown";
pub const NO_DESCRIPTION: &str = "No description available.";

#[derive(Debug, Deserialize)]
struct SymbolCatalog {
    companies: Vec<CompanyInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub symbol: String,
    pub name: String,
    pub exchange: String,
    pub description: String,
    /// Key of the bundled logo asset.
    pub logo: String,
}

lazy_static! {
    static ref CATALOG: HashMap<String, CompanyInfo> = load();
}

fn load() -> HashMap<String, CompanyInfo> {
    let json = include_str!("symbols.json");
    let catalog: SymbolCatalog =
        serde_json::from_str(json).expect("symbols.json must be valid");

    catalog
        .companies
        .into_iter()
        .map(|company| (company.symbol.clone(), company))
        .collect()
}

/// Catalog lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Company {
    Known(&'static CompanyInfo),
    Unknown,
}

impl Company {
    pub fn name(&self) -> &'static str {
        match *self {
            Company::Known(info) => &info.name,
            Company::Unknown => UNKNOWN_NAME,
        }
    }

    pub fn exchange(&self) -> Option<&'static str> {
        match *self {
            Company::Known(info) => Some(&info.exchange),
            Company::Unknown => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match *self {
            Company::Known(info) if !info.description.is_empty() => &info.description,
            _ => NO_DESCRIPTION,
        }
    }

    pub fn logo(&self) -> Option<&'static str> {
        match *self {
            Company::Known(info) => Some(&info.logo),
            Company::Unknown => None,
        }
    }
}

pub fn lookup(symbol: &str) -> Company {
    let catalog: &'static HashMap<String, CompanyInfo> = &CATALOG;
    match catalog.get(&normalize_symbol(symbol)) {
        Some(info) => Company::Known(info),
        None => Company::Unknown,
    }
}

/// Every catalogued symbol, sorted.
pub fn known_symbols() -> Vec<&'static str> {
    let catalog: &'static HashMap<String, CompanyInfo> = &CATALOG;
    let mut symbols: Vec<&'static str> = catalog.keys().map(String::as_str).collect();
    symbols.sort_unstable();
    symbols
}
