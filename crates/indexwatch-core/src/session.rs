//! Headless watchlist view.
//!
//! Holds what the grid shows: the selected indices, their fetched
//! constituents and the saved rows. Every transition persists through the
//! [`WatchlistStore`] and then reloads the rows from it.
//!
//! ```text
//! idle ──mount / change_selection──▶ loading indices ──▶ idle
//! ```
//!
//! Each refresh takes a [`RefreshTicket`]. Only the most recently issued
//! ticket may replace the in-memory index state; older ones are dropped on
//! arrival.

use tracing::{debug, info};

use crate::config::WatchlistConfig;
use crate::fetcher::IndexFetcher;
use crate::membership;
use crate::store::{FileStore, KeyValueStore};
use crate::watchlist::WatchlistStore;
use crate::{FetchError, IndexId, IndexMembers, SavedStock, SessionError, Symbol};

/// Yes/no gate in front of destructive actions.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    LoadingIndices,
}

/// Proof that a refresh was started at a given generation.
#[derive(Debug, PartialEq, Eq)]
pub struct RefreshTicket {
    generation: u64,
}

impl RefreshTicket {
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct WatchlistSession<S> {
    watchlist: WatchlistStore<S>,
    fetcher: IndexFetcher,
    selected: Vec<IndexId>,
    index_members: Vec<IndexMembers>,
    rows: Vec<SavedStock>,
    state: SessionState,
    generation: u64,
}

impl WatchlistSession<FileStore> {
    /// Session over the on-disk store and the reqwest transport.
    pub fn open(config: &WatchlistConfig) -> Self {
        Self::new(
            WatchlistStore::new(FileStore::new(config.store_dir())),
            IndexFetcher::from_config(config),
        )
    }
}

impl<S: KeyValueStore> WatchlistSession<S> {
    pub fn new(watchlist: WatchlistStore<S>, fetcher: IndexFetcher) -> Self {
        Self {
            watchlist,
            fetcher,
            selected: Vec::new(),
            index_members: Vec::new(),
            rows: Vec::new(),
            state: SessionState::Idle,
            generation: 0,
        }
    }

    pub fn rows(&self) -> &[SavedStock] {
        &self.rows
    }

    pub fn selected(&self) -> &[IndexId] {
        &self.selected
    }

    pub fn index_members(&self) -> &[IndexMembers] {
        &self.index_members
    }

    pub const fn state(&self) -> SessionState {
        self.state
    }

    pub fn fetcher(&self) -> &IndexFetcher {
        &self.fetcher
    }

    pub fn watchlist(&self) -> &WatchlistStore<S> {
        &self.watchlist
    }

    /// Loads the persisted selection, fetches it, then loads the saved rows.
    ///
    /// Rows are loaded even when a fetch fails; the fetch error is returned
    /// afterwards and the previous index state is kept.
    pub async fn mount(&mut self) -> Result<(), SessionError> {
        self.selected = self.watchlist.selected_indices()?;
        let selected = self.selected.clone();

        let fetched = self.refresh(&selected).await;
        self.reload()?;
        fetched?;
        Ok(())
    }

    /// Loads the persisted selection and rows without touching the network.
    pub fn load(&mut self) -> Result<(), SessionError> {
        self.selected = self.watchlist.selected_indices()?;
        self.reload()
    }

    /// Persists a new selection, refetches it and recomputes every saved
    /// stock's memberships.
    ///
    /// The selection is written before anything is read, so it stays
    /// persisted even if a fetch fails and it replaces an unreadable stored
    /// selection. On a fetch failure the rows are reloaded with their
    /// previous tags before the error is returned.
    pub async fn change_selection(&mut self, indices: Vec<IndexId>) -> Result<(), SessionError> {
        self.watchlist.save_selected_indices(&indices)?;
        self.selected = indices;
        let selected = self.selected.clone();

        let committed = match self.refresh(&selected).await {
            Ok(committed) => committed,
            Err(err) => {
                self.reload()?;
                return Err(err.into());
            }
        };
        if !committed {
            return self.reload();
        }

        let saved = self.watchlist.saved_stocks()?;
        let recomputed = membership::recompute(&saved, &self.index_members);
        self.watchlist.replace_saved_stocks(&recomputed)?;
        info!(
            selected = selected.len(),
            stocks = recomputed.len(),
            "recomputed watchlist memberships"
        );
        self.reload()
    }

    /// Adds `raw_symbol`, tagged with the currently fetched indices that list it.
    pub fn add(&mut self, raw_symbol: &str) -> Result<SavedStock, SessionError> {
        let symbol = Symbol::parse(raw_symbol)?;
        let indices = membership::memberships(&symbol, &self.index_members);
        let stock = SavedStock::new(symbol, indices);

        self.watchlist.save_stock(stock.clone())?;
        self.reload()?;
        Ok(stock)
    }

    /// Deletes every row for `symbol` once `confirm` agrees.
    ///
    /// Returns `false` when the user declined.
    pub fn delete(&mut self, symbol: &str, confirm: &dyn Confirm) -> Result<bool, SessionError> {
        let symbol = Symbol::parse(symbol)?;
        if !confirm.confirm(&format!("Delete {symbol} from the watchlist?")) {
            return Ok(false);
        }

        self.watchlist.delete_stock(symbol.as_str())?;
        self.reload()?;
        Ok(true)
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.state = SessionState::LoadingIndices;
        RefreshTicket {
            generation: self.generation,
        }
    }

    /// Installs `members` if `ticket` is still the latest refresh.
    pub fn commit_refresh(&mut self, ticket: RefreshTicket, members: Vec<IndexMembers>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded index refresh"
            );
            return false;
        }

        self.index_members = members;
        self.state = SessionState::Idle;
        true
    }

    fn abandon_refresh(&mut self, ticket: RefreshTicket) {
        if ticket.generation == self.generation {
            self.state = SessionState::Idle;
        }
    }

    async fn refresh(&mut self, indices: &[IndexId]) -> Result<bool, FetchError> {
        let ticket = self.begin_refresh();
        match self.fetcher.fetch_indices(indices).await {
            Ok(members) => Ok(self.commit_refresh(ticket, members)),
            Err(err) => {
                self.abandon_refresh(ticket);
                Err(err)
            }
        }
    }

    fn reload(&mut self) -> Result<(), SessionError> {
        self.rows = self.watchlist.saved_stocks()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::IndexStock;

    fn session() -> WatchlistSession<MemoryStore> {
        let config = WatchlistConfig::resolve(
            Some(std::path::PathBuf::from("unused")),
            Some(String::from("http://127.0.0.1:9")),
            None,
        );
        WatchlistSession::new(
            WatchlistStore::new(MemoryStore::new()),
            IndexFetcher::from_config(&config),
        )
    }

    fn members(index: IndexId, symbols: &[&str]) -> Vec<IndexMembers> {
        vec![IndexMembers::new(
            index,
            symbols.iter().map(|s| IndexStock::new(*s)).collect(),
        )]
    }

    #[test]
    fn superseded_refresh_is_discarded() {
        let mut session = session();

        let first = session.begin_refresh();
        let second = session.begin_refresh();
        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 2);
        assert_eq!(session.state(), SessionState::LoadingIndices);

        assert!(!session.commit_refresh(first, members(IndexId::Nifty50, &["INFY"])));
        assert!(session.index_members().is_empty());
        assert_eq!(session.state(), SessionState::LoadingIndices);

        assert!(session.commit_refresh(second, members(IndexId::NiftyNext50, &["DMART"])));
        assert_eq!(session.index_members()[0].index, IndexId::NiftyNext50);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn add_tags_symbol_with_fetched_indices() {
        let mut session = session();
        let ticket = session.begin_refresh();
        session.commit_refresh(ticket, members(IndexId::Nifty50, &["INFY", "TCS"]));

        let added = session.add(" infy ").expect("add");
        assert_eq!(added.symbol.as_str(), "INFY");
        assert_eq!(added.indices, vec![IndexId::Nifty50]);
        assert_eq!(session.rows(), &[added]);
    }

    #[test]
    fn add_rejects_empty_symbol() {
        let mut session = session();
        let err = session.add("  ").expect_err("must fail");
        assert!(matches!(err, SessionError::Validation(_)));
        assert!(session.rows().is_empty());
    }

    #[test]
    fn declined_delete_keeps_row() {
        let mut session = session();
        session.add("TCS").expect("add");

        let deleted = session.delete("TCS", &|_: &str| false).expect("delete");
        assert!(!deleted);
        assert_eq!(session.rows().len(), 1);

        let deleted = session.delete("tcs", &|_: &str| true).expect("delete");
        assert!(deleted);
        assert!(session.rows().is_empty());
    }
}
