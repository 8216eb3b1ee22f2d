//! CLI argument definitions for indexwatch.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `indices` | List the watchable indices and which are selected |
//! | `select` | Change the selected indices and retag the watchlist |
//! | `add` | Add a symbol to the watchlist |
//! | `delete` | Remove a symbol from the watchlist |
//! | `list` | Show the watchlist grid |
//! | `constituents` | Print the members of one index |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--home` | `$INDEXWATCH_HOME` or `~/.indexwatch` | Data directory |
//! | `--base-url` | NSE archive | Where `{index}.csv` is fetched from |
//! | `--timeout-ms` | none | Per-request timeout |
//!
//! # Examples
//!
//! ```bash
//! indexwatch select ind_nifty50list ind_niftynext50list
//! indexwatch add infy
//! indexwatch list --page 2
//! indexwatch delete INFY --yes
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Track which NSE indices your stocks belong to.
#[derive(Debug, Parser)]
#[command(
    name = "indexwatch",
    author,
    version,
    about = "Watchlist of NSE stocks tagged with the indices they belong to",
    long_about = "indexwatch keeps a local watchlist of stock symbols. Each symbol is tagged \
with the selected NSE indices (Nifty 50, Nifty Next 50, ...) whose published constituent \
list contains it.\n\
\n\
Use 'indexwatch <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Data directory (overrides INDEXWATCH_HOME).
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,

    /// Base URL serving `{index}.csv` (overrides INDEXWATCH_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds. Requests wait indefinitely when unset.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text grid for terminal display.
    Table,
    /// Single JSON object.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the watchable indices, marking the selected ones.
    Indices,

    /// Replace the selected indices and retag every saved stock.
    ///
    /// Passing no index clears the selection.
    ///
    /// # Examples
    ///
    ///   indexwatch select ind_nifty50list
    ///   indexwatch select ind_nifty500list ind_niftymidcap50list
    ///   indexwatch select
    Select(SelectArgs),

    /// Add a symbol, tagged with the selected indices that list it.
    ///
    /// Duplicates are kept.
    Add(AddArgs),

    /// Delete every watchlist row for a symbol.
    Delete(DeleteArgs),

    /// Fetch the selected indices and show the watchlist grid.
    List(ListArgs),

    /// Fetch one index and print its constituents.
    Constituents(ConstituentsArgs),
}

#[derive(Debug, Args)]
pub struct SelectArgs {
    /// Index identifiers, e.g. ind_nifty50list.
    #[arg(num_args = 0..)]
    pub indices: Vec<String>,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Stock symbol (case-insensitive), e.g. INFY.
    pub symbol: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Stock symbol to remove.
    pub symbol: String,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y', default_value_t = false)]
    pub yes: bool,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Rows per page.
    #[arg(long, default_value_t = 20)]
    pub page_size: usize,

    /// Show stored rows without fetching the selected indices.
    #[arg(long, default_value_t = false)]
    pub offline: bool,
}

#[derive(Debug, Args)]
pub struct ConstituentsArgs {
    /// Index identifier, e.g. ind_niftynext50list.
    pub index: String,

    /// Print at most this many rows.
    #[arg(long)]
    pub limit: Option<usize>,
}
