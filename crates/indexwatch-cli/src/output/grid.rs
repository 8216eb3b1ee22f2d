//! Paginated watchlist grid.

use std::io::{self, Write};

use indexwatch_core::{IndexId, SavedStock};
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 20;

const HEADERS: [&str; 3] = ["#", "symbol", "indices"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    /// 1-based position across all pages.
    pub number: usize,
    pub symbol: String,
    pub indices: Vec<IndexId>,
}

impl GridRow {
    fn indices_label(&self) -> String {
        self.indices
            .iter()
            .map(|index| index.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridPage {
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total_rows: usize,
    pub rows: Vec<GridRow>,
}

impl GridPage {
    /// Slices `stocks` into page `page` (1-based). Pages past the end are empty.
    pub fn paginate(stocks: &[SavedStock], page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let page_size = page_size.max(1);
        let total_rows = stocks.len();
        let page_count = total_rows.div_ceil(page_size).max(1);
        let start = (page - 1).saturating_mul(page_size);

        let rows = stocks
            .iter()
            .enumerate()
            .skip(start)
            .take(page_size)
            .map(|(position, stock)| GridRow {
                number: position + 1,
                symbol: stock.symbol.to_string(),
                indices: stock.indices.clone(),
            })
            .collect();

        Self {
            page,
            page_size,
            page_count,
            total_rows,
            rows,
        }
    }

    pub fn first(stocks: &[SavedStock]) -> Self {
        Self::paginate(stocks, 1, DEFAULT_PAGE_SIZE)
    }

    pub fn footer(&self) -> String {
        format!(
            "page {} of {} ({} rows)",
            self.page, self.page_count, self.total_rows
        )
    }

    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let cells: Vec<[String; 3]> = self
            .rows
            .iter()
            .map(|row| [row.number.to_string(), row.symbol.clone(), row.indices_label()])
            .collect();

        let mut widths = HEADERS.map(str::len);
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_line(out, &HEADERS.map(String::from), &widths)?;
        let rule = widths.map(|width| "-".repeat(width));
        write_line(out, &rule, &widths)?;
        for row in &cells {
            write_line(out, row, &widths)?;
        }
        writeln!(out, "{}", self.footer())
    }
}

fn write_line<W: Write>(out: &mut W, cells: &[String; 3], widths: &[usize; 3]) -> io::Result<()> {
    let line = format!(
        "{:>w0$}  {:<w1$}  {:<w2$}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
    );
    writeln!(out, "{}", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexwatch_core::Symbol;

    fn stocks(count: usize) -> Vec<SavedStock> {
        (0..count)
            .map(|i| {
                SavedStock::new(
                    Symbol::parse(&format!("SYM{i:02}")).expect("valid"),
                    Vec::new(),
                )
            })
            .collect()
    }

    #[test]
    fn paginates_with_partial_last_page() {
        let all = stocks(45);

        let last = GridPage::paginate(&all, 3, 20);
        assert_eq!(last.page_count, 3);
        assert_eq!(last.total_rows, 45);
        assert_eq!(last.rows.len(), 5);
        assert_eq!(last.rows[0].number, 41);
        assert_eq!(last.rows[0].symbol, "SYM40");
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let page = GridPage::paginate(&stocks(3), 9, 20);
        assert!(page.rows.is_empty());
        assert_eq!(page.footer(), "page 9 of 1 (3 rows)");
    }

    #[test]
    fn empty_watchlist_has_one_page() {
        let page = GridPage::first(&[]);
        assert_eq!(page.page_count, 1);
        assert_eq!(page.footer(), "page 1 of 1 (0 rows)");
    }

    #[test]
    fn zero_page_and_size_are_clamped() {
        let page = GridPage::paginate(&stocks(2), 0, 0);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 1);
        assert_eq!(page.rows.len(), 1);
    }

    #[test]
    fn table_aligns_columns() {
        let rows = vec![
            SavedStock::new(
                Symbol::parse("INFY").expect("valid"),
                vec![IndexId::Nifty500, IndexId::Nifty50],
            ),
            SavedStock::new(Symbol::parse("M&M").expect("valid"), Vec::new()),
        ];
        let mut out = Vec::new();
        GridPage::first(&rows).write_table(&mut out).expect("write");

        let text = String::from_utf8(out).expect("utf8");
        let expected = "\
#  symbol  indices
-  ------  ---------------------------------
1  INFY    ind_nifty500list, ind_nifty50list
2  M&M
page 1 of 1 (2 rows)
";
        assert_eq!(text, expected);
    }
}
