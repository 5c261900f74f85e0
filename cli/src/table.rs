//! Plain-text layouts: aligned `Label:  value` lines for one record and
//! column tables for summaries.

use nu_ansi_term::Style;

use crate::color::{self, ColorConfig};

const COLUMN_GAP: &str = "  ";

/// `Label:` lines with the values aligned two spaces past the longest label.
#[derive(Debug, Default)]
pub(crate) struct Details {
    rows: Vec<(&'static str, String)>,
}

impl Details {
    pub(crate) fn row(mut self, label: &'static str, value: impl ToString) -> Self {
        self.rows.push((label, value.to_string()));
        self
    }

    pub(crate) fn row_if(self, present: bool, label: &'static str, value: impl ToString) -> Self {
        if present { self.row(label, value) } else { self }
    }

    pub(crate) fn render(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|(label, _)| label.len() + 1)
            .max()
            .unwrap_or(0);
        self.rows
            .iter()
            .map(|(label, value)| format!("{:<width$}{COLUMN_GAP}{value}\n", format!("{label}:")))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Cell {
    text: String,
    style: Option<Style>,
}

impl Cell {
    pub(crate) fn plain(text: impl ToString) -> Self {
        Cell {
            text: text.to_string(),
            style: None,
        }
    }

    pub(crate) fn styled(text: impl ToString, style: Style) -> Self {
        Cell {
            text: text.to_string(),
            style: Some(style),
        }
    }
}

/// A column table. Widths are measured on the text before styling, so
/// colour escapes never shift the columns.
#[derive(Debug)]
pub(crate) struct Table {
    headers: &'static [&'static str],
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub(crate) fn new(headers: &'static [&'static str]) -> Self {
        Table {
            headers,
            rows: vec![],
        }
    }

    pub(crate) fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub(crate) fn render(&self, colors: &ColorConfig) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.text.chars().count());
            }
        }

        let header: Vec<Cell> = self
            .headers
            .iter()
            .map(|h| Cell::styled(h, color::header()))
            .collect();

        let mut out = String::new();
        for row in std::iter::once(&header).chain(&self.rows) {
            let last = row.len().saturating_sub(1);
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (cell, width))| {
                    let padding = if i == last {
                        0
                    } else {
                        width - cell.text.chars().count()
                    };
                    let text = match cell.style {
                        Some(style) => colors.paint(&cell.text, style),
                        None => cell.text.clone(),
                    };
                    format!("{text}{}", " ".repeat(padding))
                })
                .collect();
            out.push_str(&line.join(COLUMN_GAP));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details() {
        let details = Details::default()
            .row("Filename", "a.pem")
            .row("Serial Number", 4660)
            .row_if(false, "SANs", "skipped");
        assert_eq!(
            details.render(),
            "Filename:       a.pem\nSerial Number:  4660\n"
        );
    }

    #[test]
    fn test_table_alignment() {
        let mut table = Table::new(&["NAME", "BITS"]);
        table.push(vec![Cell::plain("long-name.pem"), Cell::plain(2048)]);
        table.push(vec![Cell::plain("a"), Cell::plain(44)]);
        assert_eq!(
            table.render(&ColorConfig::PLAIN),
            "NAME           BITS\nlong-name.pem  2048\na              44\n"
        );
    }

    #[test]
    fn test_table_styled_cell_without_color() {
        let mut table = Table::new(&["STATUS", "X"]);
        table.push(vec![Cell::styled("expired", color::header()), Cell::plain("1")]);
        let rendered = table.render(&ColorConfig::PLAIN);
        assert_eq!(rendered, "STATUS   X\nexpired  1\n");
    }
}
