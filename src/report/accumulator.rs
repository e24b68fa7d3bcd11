//! Table accumulation state for report parsing
//!
//! Owns the table under construction and the sticky section flag, and
//! applies the seal/reset transitions driven by delimiter lines. One
//! accumulator belongs to exactly one parse call; nothing is shared.

use tracing::debug;

use crate::model::{ReportModel, Table};

/// What happened to the in-progress table at a section boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SealOutcome {
    /// Headers and at least one row: appended to the model.
    Sealed,

    /// Headers but no accepted rows: silently discarded.
    Discarded,

    /// Nothing in progress.
    Nothing,
}

/// Accumulates the table under construction during one parse.
#[derive(Debug, Default)]
pub struct TableAccumulator {
    in_table_section: bool,
    current: Table,
}

impl TableAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True from the first delimiter line onward. Sticky: once a table
    /// section starts, scalar lines are never recognized again.
    pub fn in_table_section(&self) -> bool {
        self.in_table_section
    }

    /// Whether the current table already has its column names.
    pub fn has_headers(&self) -> bool {
        !self.current.headers.is_empty()
    }

    /// Expected value count for incoming rows.
    pub fn header_count(&self) -> usize {
        self.current.headers.len()
    }

    /// Set the current table's column names from a header line's tokens.
    ///
    /// A header line starts a fresh column layout, so any rows accepted
    /// under earlier headers are dropped; the rectangular invariant must
    /// hold even against a malformed report with back-to-back headers.
    pub fn set_headers(&mut self, tokens: &[&str]) {
        self.current.rows.clear();
        self.current.headers = tokens.iter().map(|t| t.to_string()).collect();
        debug!(
            "Table headers set ({} columns): {:?}",
            self.current.headers.len(),
            self.current.headers
        );
    }

    /// Offer a parsed row to the current table.
    ///
    /// Accepted only when non-empty and exactly as long as the header
    /// list; anything else is dropped so the table stays rectangular.
    pub fn push_row(&mut self, values: Vec<f64>) -> bool {
        if !values.is_empty() && values.len() == self.current.headers.len() {
            self.current.rows.push(values);
            true
        } else {
            debug!(
                "Row dropped: {} values against {} columns",
                values.len(),
                self.current.headers.len()
            );
            false
        }
    }

    /// Handle a delimiter line: seal the current table if complete,
    /// reset it either way, and enter (or stay in) the table section.
    pub fn on_delimiter(&mut self, model: &mut ReportModel) -> SealOutcome {
        let outcome = self.seal_into(model);
        self.current.clear();
        self.in_table_section = true;
        outcome
    }

    /// Final seal check at end of input, for reports that end without a
    /// trailing delimiter line.
    pub fn finish(&mut self, model: &mut ReportModel) -> SealOutcome {
        let outcome = self.seal_into(model);
        self.current.clear();
        outcome
    }

    fn seal_into(&mut self, model: &mut ReportModel) -> SealOutcome {
        if !self.in_table_section {
            return SealOutcome::Nothing;
        }
        if self.current.is_complete() {
            debug!("Table sealed with {} rows", self.current.rows.len());
            model.tables.push(std::mem::take(&mut self.current));
            SealOutcome::Sealed
        } else if self.has_headers() {
            debug!(
                "Incomplete table discarded ({} columns, 0 rows)",
                self.current.headers.len()
            );
            SealOutcome::Discarded
        } else {
            SealOutcome::Nothing
        }
    }
}
