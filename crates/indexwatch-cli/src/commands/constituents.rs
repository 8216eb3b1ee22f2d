use indexwatch_core::{IndexId, KeyValueStore, WatchlistSession};

use crate::cli::ConstituentsArgs;
use crate::error::CliError;

use super::{CommandResult, View};

pub async fn run<S: KeyValueStore>(
    args: &ConstituentsArgs,
    session: &WatchlistSession<S>,
) -> Result<CommandResult, CliError> {
    let index = IndexId::parse(&args.index)?;

    let mut stocks = session.fetcher().fetch_index(index).await?;
    let total = stocks.len();
    if let Some(limit) = args.limit {
        stocks.truncate(limit);
    }

    Ok(CommandResult::ok(View::Constituents {
        index,
        total,
        stocks,
    }))
}
