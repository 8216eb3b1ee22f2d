//! Runtime configuration resolved from CLI overrides and the environment.

use std::env;
use std::path::PathBuf;

/// Public NSE archive that serves one csv per index.
pub const DEFAULT_BASE_URL: &str = "https://nsearchives.nseindia.com/content/indices";

const HOME_ENV: &str = "INDEXWATCH_HOME";
const BASE_URL_ENV: &str = "INDEXWATCH_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistConfig {
    /// Root directory for indexwatch data.
    pub home: PathBuf,
    /// Base URL the `{index}.csv` path is appended to, without trailing slash.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for WatchlistConfig {
    fn default() -> Self {
        Self {
            home: resolve_home(),
            base_url: resolve_base_url(),
            timeout_ms: None,
            user_agent: default_user_agent(),
        }
    }
}

impl WatchlistConfig {
    /// Applies explicit overrides on top of the environment defaults.
    pub fn resolve(
        home: Option<PathBuf>,
        base_url: Option<String>,
        timeout_ms: Option<u64>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(home) = home {
            config.home = home;
        }
        if let Some(base_url) = base_url {
            config.base_url = normalize_base_url(&base_url);
        }
        config.timeout_ms = timeout_ms;
        config
    }

    /// Directory backing the [`FileStore`](crate::FileStore).
    pub fn store_dir(&self) -> PathBuf {
        self.home.join("store")
    }
}

fn default_user_agent() -> String {
    format!("indexwatch/{}", env!("CARGO_PKG_VERSION"))
}

fn resolve_home() -> PathBuf {
    if let Some(path) = env::var_os(HOME_ENV) {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join(".indexwatch");
    }

    PathBuf::from(".indexwatch")
}

fn resolve_base_url() -> String {
    match env::var(BASE_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => normalize_base_url(&value),
        _ => String::from(DEFAULT_BASE_URL),
    }
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_owned()
}
