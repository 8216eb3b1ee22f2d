//! Watchlist persisted as two independent keys.
//!
//! | Key | Value |
//! |-----|-------|
//! | `STOCKS` | JSON array of `{symbol, indices}` |
//! | `INDICES` | JSON array of selected index identifiers |
//!
//! The keys are written in separate calls; nothing keeps them consistent
//! with each other until the next membership recompute.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::KeyValueStore;
use crate::{IndexId, SavedStock, StoreError};

pub const STOCKS_KEY: &str = "STOCKS";
pub const INDICES_KEY: &str = "INDICES";

pub struct WatchlistStore<S> {
    store: S,
}

impl<S: KeyValueStore> WatchlistStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Saved stocks sorted by case-insensitive symbol. Missing key reads as empty.
    pub fn saved_stocks(&self) -> Result<Vec<SavedStock>, StoreError> {
        let mut stocks: Vec<SavedStock> = self.read_list(STOCKS_KEY)?;
        stocks.sort_by_cached_key(|stock| stock.symbol.as_str().to_lowercase());
        Ok(stocks)
    }

    pub fn replace_saved_stocks(&self, stocks: &[SavedStock]) -> Result<(), StoreError> {
        self.write_list(STOCKS_KEY, stocks)
    }

    /// Prepends `stock` to the sorted list. Duplicates are kept.
    pub fn save_stock(&self, stock: SavedStock) -> Result<(), StoreError> {
        let mut stocks = Vec::with_capacity(1);
        stocks.push(stock);
        stocks.extend(self.saved_stocks()?);
        self.write_list(STOCKS_KEY, &stocks)
    }

    /// Removes every entry whose symbol equals `symbol` and returns what is left.
    pub fn delete_stock(&self, symbol: &str) -> Result<Vec<SavedStock>, StoreError> {
        let mut stocks = self.saved_stocks()?;
        stocks.retain(|stock| stock.symbol.as_str() != symbol);
        self.write_list(STOCKS_KEY, &stocks)?;
        Ok(stocks)
    }

    pub fn selected_indices(&self) -> Result<Vec<IndexId>, StoreError> {
        self.read_list(INDICES_KEY)
    }

    pub fn save_selected_indices(&self, indices: &[IndexId]) -> Result<(), StoreError> {
        self.write_list(INDICES_KEY, indices)
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|err| StoreError::Corrupt {
            key: key.to_owned(),
            reason: err.to_string(),
        })
    }

    fn write_list<T: Serialize>(&self, key: &str, values: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(values)?;
        self.store.set(key, &raw)
    }
}
