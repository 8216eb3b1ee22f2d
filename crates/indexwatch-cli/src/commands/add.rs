use indexwatch_core::{KeyValueStore, Symbol, WatchlistSession};

use crate::cli::AddArgs;
use crate::error::CliError;
use crate::output::grid::GridPage;

use super::{mount, CommandResult, View};

pub async fn run<S: KeyValueStore>(
    args: &AddArgs,
    session: &mut WatchlistSession<S>,
) -> Result<CommandResult, CliError> {
    // Validate before mounting.
    Symbol::parse(&args.symbol)?;

    let errors = mount(session).await?;
    let added = session.add(&args.symbol)?;

    let message = if added.indices.is_empty() {
        format!("added {}", added.symbol)
    } else {
        format!("added {} ({})", added.symbol, added.indices_label())
    };

    Ok(CommandResult::ok(View::Grid(GridPage::first(session.rows())))
        .with_message(message)
        .with_errors(errors))
}
