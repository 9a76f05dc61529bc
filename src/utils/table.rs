//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured with unicode-width so the Portuguese headers
//! ("Nº de Lançamentos", "Anotação") line up; long free-text columns can
//! opt into wrapping.

use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Wrap cell content at this width instead of letting it stretch the
    /// column (used for justification text).
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
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|c| UnicodeWidthStr::width(c.header.as_str()))
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let w = UnicodeWidthStr::width(cell.as_str());
                let w = match self.columns[i].max_width {
                    Some(max) => w.min(max),
                    None => w,
                };
                widths[i] = widths[i].max(w);
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w));
            out.push_str("  ");
        }
        out.push('\n');
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows (una linha lógica pode virar várias linhas físicas)
        for row in &self.rows {
            let cells: Vec<Vec<String>> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| match self.columns[i].max_width {
                    Some(max) => wrap(cell, max).into_iter().map(|l| l.into_owned()).collect(),
                    None => vec![cell.clone()],
                })
                .collect();

            let height = cells.iter().map(|c| c.len()).max().unwrap_or(1);
            for line in 0..height {
                for (i, cell_lines) in cells.iter().enumerate() {
                    let text = cell_lines.get(line).map(String::as_str).unwrap_or("");
                    out.push_str(&pad(text, widths[i]));
                    out.push_str("  ");
                }
                out.push('\n');
            }
        }

        out
    }
}

/// Pad by display width, not byte length (format!("{:<w$}") conta bytes).
fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let fill = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(fill))
}
