pub mod grid;

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{CommandResult, View};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    data: &'a View,
    messages: &'a [String],
    errors: &'a [String],
}

pub fn render(result: &CommandResult, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = serde_json::to_string_pretty(&JsonOutput {
                data: &result.view,
                messages: &result.messages,
                errors: &result.errors,
            })?;
            println!("{payload}");
        }
        OutputFormat::Table => {
            let stdout = io::stdout();
            write_view(&result.view, &mut stdout.lock())?;

            for message in &result.messages {
                eprintln!("✓ {message}");
            }
            for error in &result.errors {
                eprintln!("error: {error}");
            }
        }
    }

    Ok(())
}

fn write_view<W: Write>(view: &View, out: &mut W) -> io::Result<()> {
    match view {
        View::Grid(page) => page.write_table(out),
        View::Indices { indices } => {
            for entry in indices {
                let mark = if entry.selected { 'x' } else { ' ' };
                writeln!(out, "[{mark}] {}", entry.index)?;
            }
            Ok(())
        }
        View::Constituents {
            index,
            total,
            stocks,
        } => {
            let width = stocks
                .iter()
                .map(|stock| stock.symbol.chars().count())
                .max()
                .unwrap_or(0);
            for stock in stocks {
                let company = stock.column("Company Name").unwrap_or_default();
                let line = format!("{:<width$}  {company}", stock.symbol);
                writeln!(out, "{}", line.trim_end())?;
            }
            writeln!(out, "{index}: showing {} of {total}", stocks.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::IndexEntry;
    use indexwatch_core::{IndexId, IndexStock};

    fn rendered(view: &View) -> String {
        let mut out = Vec::new();
        write_view(view, &mut out).expect("write");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn indices_view_marks_selection() {
        let view = View::Indices {
            indices: vec![
                IndexEntry {
                    index: IndexId::Nifty500,
                    selected: false,
                },
                IndexEntry {
                    index: IndexId::Nifty50,
                    selected: true,
                },
            ],
        };

        assert_eq!(
            rendered(&view),
            "[ ] ind_nifty500list\n[x] ind_nifty50list\n"
        );
    }

    #[test]
    fn constituents_view_shows_company_names() {
        let view = View::Constituents {
            index: IndexId::Nifty50,
            total: 50,
            stocks: vec![
                IndexStock::new("TCS").with_column("Company Name", "Tata Consultancy Services Ltd."),
                IndexStock::new("HDFCBANK"),
            ],
        };

        assert_eq!(
            rendered(&view),
            "TCS       Tata Consultancy Services Ltd.\nHDFCBANK\nind_nifty50list: showing 2 of 50\n"
        );
    }

    #[test]
    fn json_output_is_tagged_by_view() {
        let result = CommandResult::ok(View::Indices {
            indices: vec![IndexEntry {
                index: IndexId::NiftyNext50,
                selected: true,
            }],
        });
        let value = serde_json::to_value(JsonOutput {
            data: &result.view,
            messages: &result.messages,
            errors: &result.errors,
        })
        .expect("serialize");

        assert_eq!(value["data"]["view"], "indices");
        assert_eq!(value["data"]["indices"][0]["index"], "ind_niftynext50list");
        assert_eq!(value["data"]["indices"][0]["selected"], true);
    }
}
