//! Table rendering utilities for CLI outputs.
//!
//! Cells may contain ANSI color codes: widths are measured on the visible
//! text only. Cells wider than their column are wrapped onto extra lines.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ansi pattern is valid"));

pub fn strip_ansi(s: &str) -> String {
    ANSI.replace_all(s, "").into_owned()
}

pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub struct Column {
    pub header: String,
    /// Upper bound for the column; `None` = as wide as the widest cell.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: None,
        }
    }

    pub fn wrapped(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width: Some(max_width),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| visible_width(c))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0);
                col.max_width.map_or(widest, |m| widest.min(m.max(1)))
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            push_padded(&mut out, &col.header, *w);
        }
        out.push('\n');
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<String>> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = row.get(i).map(String::as_str).unwrap_or("");
                    if visible_width(cell) > *w {
                        // wrap only plain text; colored cells are short labels
                        textwrap::wrap(&strip_ansi(cell), *w)
                            .into_iter()
                            .map(|l| l.into_owned())
                            .collect()
                    } else {
                        vec![cell.to_string()]
                    }
                })
                .collect();

            let height = cells.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                for (cell, w) in cells.iter().zip(&widths) {
                    push_padded(&mut out, cell.get(line).map(String::as_str).unwrap_or(""), *w);
                }
                out.push('\n');
            }
        }

        out
    }
}

fn push_padded(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    out.push_str(&" ".repeat(width.saturating_sub(visible_width(text)) + 1));
}
