use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{IndexId, Symbol};

/// One constituent row of an index csv.
///
/// `symbol` is lifted out of the `Symbol` column; every other column is kept
/// verbatim in `columns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStock {
    pub symbol: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub columns: BTreeMap<String, String>,
}

impl IndexStock {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            columns: BTreeMap::new(),
        }
    }

    pub fn with_column(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.columns.insert(name.into(), value.into());
        self
    }

    pub fn column(&self, name: &str) -> Option<&str> {
        self.columns.get(name).map(String::as_str)
    }
}

/// Constituents of a single fetched index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMembers {
    pub index: IndexId,
    pub stocks: Vec<IndexStock>,
}

impl IndexMembers {
    pub fn new(index: IndexId, stocks: Vec<IndexStock>) -> Self {
        Self { index, stocks }
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.stocks.iter().any(|stock| symbol == stock.symbol.as_str())
    }
}

/// A watchlist entry and the selected indices it currently belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedStock {
    pub symbol: Symbol,
    #[serde(default)]
    pub indices: Vec<IndexId>,
}

impl SavedStock {
    pub fn new(symbol: Symbol, indices: Vec<IndexId>) -> Self {
        Self { symbol, indices }
    }

    pub fn indices_label(&self) -> String {
        self.indices
            .iter()
            .map(|index| index.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
