use indexwatch_core::{KeyValueStore, WatchlistSession};

use crate::cli::ListArgs;
use crate::error::CliError;
use crate::output::grid::GridPage;

use super::{mount, CommandResult, View};

pub async fn run<S: KeyValueStore>(
    args: &ListArgs,
    session: &mut WatchlistSession<S>,
) -> Result<CommandResult, CliError> {
    if args.page == 0 {
        return Err(CliError::Command(String::from("--page must be at least 1")));
    }
    if args.page_size == 0 {
        return Err(CliError::Command(String::from("--page-size must be at least 1")));
    }

    let errors = if args.offline {
        session.load()?;
        Vec::new()
    } else {
        mount(session).await?
    };

    let page = GridPage::paginate(session.rows(), args.page, args.page_size);
    Ok(CommandResult::ok(View::Grid(page)).with_errors(errors))
}
