//! Index constituent fetcher.
//!
//! Downloads `{base_url}/{index}.csv` and turns each row into an
//! [`IndexStock`]. Indices are fetched one at a time; there is no retry and
//! no caching, so the most recent fetch always wins.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::config::WatchlistConfig;
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};
use crate::{FetchError, IndexId, IndexMembers, IndexStock};

const SYMBOL_COLUMN: &str = "Symbol";

#[derive(Clone)]
pub struct IndexFetcher {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: Option<u64>,
    user_agent: String,
}

impl IndexFetcher {
    pub fn new(http_client: Arc<dyn HttpClient>, config: &WatchlistConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms,
            user_agent: config.user_agent.clone(),
        }
    }

    /// Fetcher using the reqwest transport.
    pub fn from_config(config: &WatchlistConfig) -> Self {
        Self::new(
            Arc::new(ReqwestHttpClient::new(&config.user_agent)),
            config,
        )
    }

    pub fn index_url(&self, index: IndexId) -> String {
        format!("{}/{}.csv", self.base_url, index.as_str())
    }

    /// Fetches and parses one index csv.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for non-2xx responses,
    /// [`FetchError::Transport`] when the request never completes and a csv
    /// error when the body cannot be parsed.
    pub async fn fetch_index(&self, index: IndexId) -> Result<Vec<IndexStock>, FetchError> {
        let result = self.fetch_index_inner(index).await;
        match &result {
            Ok(stocks) => debug!(%index, rows = stocks.len(), "fetched index"),
            Err(err) => error!(%index, error = %err, "error fetching index"),
        }
        result
    }

    async fn fetch_index_inner(&self, index: IndexId) -> Result<Vec<IndexStock>, FetchError> {
        let url = self.index_url(index);
        debug!(%url, "fetching index csv");

        let request = HttpRequest::get(url.clone())
            .with_header("user-agent", self.user_agent.clone())
            .with_header("accept", "text/csv,*/*")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.is_success() {
            return Err(FetchError::Status {
                url,
                status: response.status,
            });
        }

        parse_index_csv(&response.body)
    }

    /// Fetches every index in order, stopping at the first failure.
    ///
    /// Indices after the failing one are not requested.
    pub async fn fetch_indices(&self, indices: &[IndexId]) -> Result<Vec<IndexMembers>, FetchError> {
        let mut members = Vec::with_capacity(indices.len());
        for &index in indices {
            let stocks = self.fetch_index(index).await?;
            members.push(IndexMembers::new(index, stocks));
        }
        Ok(members)
    }
}

/// Parses a headed index csv into constituent rows.
///
/// Rows with a blank `Symbol` cell are skipped.
pub fn parse_index_csv(body: &str) -> Result<Vec<IndexStock>, FetchError> {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    let symbol_position = headers
        .iter()
        .position(|header| header == SYMBOL_COLUMN)
        .ok_or(FetchError::MissingSymbolColumn)?;

    let mut stocks = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let symbol = record.get(symbol_position).unwrap_or_default();
        if symbol.is_empty() {
            warn!(row = row + 1, "skipping index row with blank symbol");
            continue;
        }

        let mut stock = IndexStock::new(symbol);
        for (position, (header, value)) in headers.iter().zip(record.iter()).enumerate() {
            if position != symbol_position {
                stock = stock.with_column(header, value);
            }
        }
        stocks.push(stock);
    }

    Ok(stocks)
}
