use crate::error::{FaqChatbotError, Result};
use serde::{Deserialize, Serialize};

/// Maximum number of rows retained for display and prompting. Anything past
/// this is dropped after ingestion and the caller is told truncation occurred.
pub const MAX_PROMPT_ROWS: usize = 100;

/// An ordered, rectangular view of an uploaded file: one string value per
/// column per row. Columns are either header names (CSV/JSON) or stringified
/// positional indices ("0", "1", ...) for delimiter-only input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from named columns, enforcing the rectangular invariant:
    /// every row must have exactly one field per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(FaqChatbotError::DataLoad(format!(
                    "row {} has {} fields, expected {}",
                    idx,
                    row.len(),
                    columns.len()
                )));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Build a table with positional column names, derived from the width of
    /// the first row.
    pub fn positional(rows: Vec<Vec<String>>) -> Result<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let columns = (0..width).map(|i| i.to_string()).collect();
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at `row` under the named column, if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col_idx = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col_idx).map(String::as_str)
    }

    /// A copy containing the first `n` rows (all rows if the table is
    /// shorter), preserving order.
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Plain-text rendering used for display and as the prompt context block:
    /// a header line followed by one line per row, columns padded to a shared
    /// width.
    pub fn to_text(&self) -> String {
        let mut widths: Vec<usize> = self.columns.iter().map(String::len).collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                if cell.len() > widths[idx] {
                    widths[idx] = cell.len();
                }
            }
        }

        let render_line = |cells: &[String]| -> String {
            let line = cells
                .iter()
                .zip(widths.iter().copied())
                .map(|(cell, width)| format!("{:<width$}", cell))
                .collect::<Vec<_>>()
                .join("  ");
            line.trim_end().to_string()
        };

        let mut out = render_line(&self.columns);
        for row in &self.rows {
            out.push('\n');
            out.push_str(&render_line(row));
        }
        out
    }
}
