use thiserror::Error;

use crate::http_client::HttpError;

/// Validation errors for user-supplied symbols and index identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error(
        "unknown index '{value}', expected one of ind_nifty500list, ind_nifty50list, \
ind_niftynext50list, ind_niftysmallcap50list, ind_niftymidcap50list"
    )]
    UnknownIndex { value: String },
}

/// Errors raised while fetching and parsing an index constituent list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: HttpError,
    },

    #[error("failed to fetch {url}: HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("index csv has no 'Symbol' column")]
    MissingSymbolColumn,

    #[error("malformed index csv: {0}")]
    Csv(#[from] csv::Error),
}

impl FetchError {
    /// HTTP status for non-2xx responses, `None` for every other failure.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised by the key-value store and the watchlist layered on it.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored value for '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Top-level error for session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
