mod add;
mod constituents;
mod delete;
mod indices;
mod list;
mod select;

use indexwatch_core::{
    IndexId, IndexStock, KeyValueStore, SessionError, WatchlistConfig, WatchlistSession,
};
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::grid::GridPage;

#[derive(Debug, Clone, Serialize)]
pub struct IndexEntry {
    pub index: IndexId,
    pub selected: bool,
}

/// What a command wants shown on stdout.
#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Grid(GridPage),
    Indices {
        indices: Vec<IndexEntry>,
    },
    Constituents {
        index: IndexId,
        total: usize,
        stocks: Vec<IndexStock>,
    },
}

pub struct CommandResult {
    pub view: View,
    pub messages: Vec<String>,
    /// Non-fatal failures; the view is still rendered.
    pub errors: Vec<String>,
}

impl CommandResult {
    pub fn ok(view: View) -> Self {
        Self {
            view,
            messages: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors.extend(errors);
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let config = WatchlistConfig::resolve(cli.home.clone(), cli.base_url.clone(), cli.timeout_ms);
    let mut session = WatchlistSession::open(&config);

    match &cli.command {
        Command::Indices => indices::run(&mut session),
        Command::Select(args) => select::run(args, &mut session).await,
        Command::Add(args) => add::run(args, &mut session).await,
        Command::Delete(args) => delete::run(args, &mut session),
        Command::List(args) => list::run(args, &mut session).await,
        Command::Constituents(args) => constituents::run(args, &session).await,
    }
}

/// Turns a fetch failure into a reportable message and passes everything
/// else through. The fetcher has already logged the failure.
fn fetch_failure_as_error(result: Result<(), SessionError>) -> Result<Vec<String>, CliError> {
    match result {
        Ok(()) => Ok(Vec::new()),
        Err(SessionError::Fetch(error)) => Ok(vec![error.to_string()]),
        Err(error) => Err(error.into()),
    }
}

async fn mount<S: KeyValueStore>(
    session: &mut WatchlistSession<S>,
) -> Result<Vec<String>, CliError> {
    fetch_failure_as_error(session.mount().await)
}
