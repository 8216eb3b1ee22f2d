use indexwatch_core::{IndexId, KeyValueStore, WatchlistSession};

use crate::cli::SelectArgs;
use crate::error::CliError;
use crate::output::grid::GridPage;

use super::{fetch_failure_as_error, CommandResult, View};

pub async fn run<S: KeyValueStore>(
    args: &SelectArgs,
    session: &mut WatchlistSession<S>,
) -> Result<CommandResult, CliError> {
    let indices = args
        .indices
        .iter()
        .map(|raw| IndexId::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let errors = fetch_failure_as_error(session.change_selection(indices).await)?;

    let message = if session.selected().is_empty() {
        String::from("cleared index selection")
    } else {
        format!(
            "selected {}",
            session
                .selected()
                .iter()
                .map(|index| index.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    };

    Ok(CommandResult::ok(View::Grid(GridPage::first(session.rows())))
        .with_message(message)
        .with_errors(errors))
}
