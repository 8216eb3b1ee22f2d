use indexwatch_core::{IndexId, KeyValueStore, WatchlistSession};

use crate::error::CliError;

use super::{CommandResult, IndexEntry, View};

pub fn run<S: KeyValueStore>(session: &mut WatchlistSession<S>) -> Result<CommandResult, CliError> {
    session.load()?;

    let indices = IndexId::ALL
        .into_iter()
        .map(|index| IndexEntry {
            index,
            selected: session.selected().contains(&index),
        })
        .collect();

    Ok(CommandResult::ok(View::Indices { indices }))
}
