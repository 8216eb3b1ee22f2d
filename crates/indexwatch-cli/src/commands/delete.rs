use dialoguer::Confirm as Prompt;
use indexwatch_core::{Confirm, KeyValueStore, WatchlistSession};
use tracing::warn;

use crate::cli::DeleteArgs;
use crate::error::CliError;
use crate::output::grid::GridPage;

use super::{CommandResult, View};

/// Asks on the terminal. Anything but an explicit yes declines.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        match Prompt::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(error) => {
                warn!(%error, "confirmation prompt failed");
                false
            }
        }
    }
}

struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

pub fn run<S: KeyValueStore>(
    args: &DeleteArgs,
    session: &mut WatchlistSession<S>,
) -> Result<CommandResult, CliError> {
    session.load()?;

    let confirm: &dyn Confirm = if args.yes { &AssumeYes } else { &TerminalConfirm };
    let deleted = session.delete(&args.symbol, confirm)?;

    let symbol = args.symbol.trim().to_ascii_uppercase();
    let message = if deleted {
        format!("deleted {symbol}")
    } else {
        format!("kept {symbol}")
    };

    Ok(CommandResult::ok(View::Grid(GridPage::first(session.rows()))).with_message(message))
}
