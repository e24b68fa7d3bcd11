//! Data model for parsed XTurb output reports.
//!
//! A report decomposes into three surfaces: named scalar settings from
//! the preamble (`KEY = VALUE` lines), zero or more numeric results
//! tables bounded by `---` banner lines, and a free-text blob of
//! everything meant for display rather than further parsing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One results table from a report: ordered column names plus
/// rectangular numeric rows.
///
/// Invariant: every row in `rows` has exactly `headers.len()` values.
/// Rows that would violate this are dropped at parse time, so consumers
/// can index columns without bounds anxiety. Individual values may be
/// NaN (malformed token) or +∞ (the solver's `Infinity` sentinel).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, set once from the table's header line.
    pub headers: Vec<String>,

    /// Data rows, each the same length as `headers`.
    pub rows: Vec<Vec<f64>>,
}

impl Table {
    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of accepted data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether this table satisfies the seal condition: at least one
    /// column and at least one row.
    pub fn is_complete(&self) -> bool {
        !self.headers.is_empty() && !self.rows.is_empty()
    }

    /// Reset to an empty table, dropping headers and rows.
    pub fn clear(&mut self) {
        self.headers.clear();
        self.rows.clear();
    }

    /// Extract one column by index.
    pub fn column(&self, idx: usize) -> Option<Vec<f64>> {
        if idx >= self.headers.len() {
            return None;
        }
        Some(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Extract (x, y) pairs for plotting: column 0 against column `col`.
    ///
    /// Pairs where either value is non-finite are skipped, so NaN
    /// substitutions and `Infinity` sentinels never reach the plot.
    pub fn xy_series(&self, col: usize) -> Option<Vec<(f64, f64)>> {
        if col == 0 || col >= self.headers.len() {
            return None;
        }
        Some(
            self.rows
                .iter()
                .map(|row| (row[0], row[col]))
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .collect(),
        )
    }
}

/// The complete structured result of parsing one report file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportModel {
    /// Scalar settings from `KEY = VALUE` preamble lines. Keys are
    /// unique; the last occurrence in the file wins.
    pub scalars: HashMap<String, String>,

    /// Sealed tables, in the order they completed in the source.
    pub tables: Vec<Table>,

    /// Free-text blob of every line preserved for display: prose,
    /// banners, scalar lines, blank lines. Never parsed further.
    pub header_text: String,
}

impl ReportModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a scalar value by key.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.scalars.get(key).map(String::as_str)
    }

    /// Number of sealed tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Reset to an empty model.
    pub fn clear(&mut self) {
        self.scalars.clear();
        self.tables.clear();
        self.header_text.clear();
    }
}
