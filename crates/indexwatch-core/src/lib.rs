//! # indexwatch core
//!
//! Index constituent fetching and a locally persisted watchlist for NSE
//! index members.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Home directory, base URL and timeout resolution |
//! | [`domain`] | Index identifiers, constituent rows and saved stocks |
//! | [`error`] | Validation, fetch, store and session errors |
//! | [`fetcher`] | Index csv download and parsing |
//! | [`http_client`] | HTTP transport trait and reqwest implementation |
//! | [`membership`] | Matching saved symbols against fetched indices |
//! | [`session`] | Headless grid state machine |
//! | [`store`] | Key-value store trait with memory and file backends |
//! | [`watchlist`] | Saved stocks and selected indices on top of a store |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use indexwatch_core::{IndexId, WatchlistConfig, WatchlistSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WatchlistConfig::default();
//!     let mut session = WatchlistSession::open(&config);
//!
//!     session.change_selection(vec![IndexId::Nifty50]).await?;
//!     session.add("infy")?;
//!
//!     for row in session.rows() {
//!         println!("{}: {}", row.symbol, row.indices_label());
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod membership;
pub mod session;
pub mod store;
pub mod watchlist;

pub use config::{WatchlistConfig, DEFAULT_BASE_URL};

pub use domain::{IndexId, IndexMembers, IndexStock, SavedStock, Symbol};

pub use error::{FetchError, SessionError, StoreError, ValidationError};

pub use fetcher::{parse_index_csv, IndexFetcher};

pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};

pub use session::{Confirm, RefreshTicket, SessionState, WatchlistSession};

pub use store::{FileStore, KeyValueStore, MemoryStore};

pub use watchlist::{WatchlistStore, INDICES_KEY, STOCKS_KEY};
