//! Parsing statistics and result structures for report processing
//!
//! The parse itself absorbs per-line problems silently; these types are
//! how callers see what was absorbed.

use serde::{Deserialize, Serialize};

use crate::model::ReportModel;

/// Parsing result: the structured model plus statistics about how it
/// was assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    /// The reconstructed report.
    pub model: ReportModel,

    /// Counters and drop descriptions from the parse.
    pub stats: ParseStats,
}

/// Simple parsing statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Physical lines read from the report.
    pub lines_read: usize,

    /// `KEY = VALUE` lines stored into the scalar map.
    pub scalars_parsed: usize,

    /// Tables sealed into the model.
    pub tables_sealed: usize,

    /// In-progress tables discarded at a boundary for having headers
    /// but no accepted rows.
    pub tables_discarded: usize,

    /// Data rows accepted into a table.
    pub rows_accepted: usize,

    /// Data rows dropped for a token-count mismatch.
    pub rows_dropped: usize,

    /// Tokens replaced with NaN inside accepted or dropped rows.
    pub invalid_tokens: usize,

    /// Human-readable descriptions of dropped rows and discarded
    /// tables, for debugging.
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self {
            lines_read: 0,
            scalars_parsed: 0,
            tables_sealed: 0,
            tables_discarded: 0,
            rows_accepted: 0,
            rows_dropped: 0,
            invalid_tokens: 0,
            errors: Vec::new(),
        }
    }

    /// Fraction of offered data rows that were accepted, as a
    /// percentage. 100.0 when no rows were offered at all.
    pub fn row_acceptance_rate(&self) -> f64 {
        let offered = self.rows_accepted + self.rows_dropped;
        if offered == 0 {
            100.0
        } else {
            (self.rows_accepted as f64 / offered as f64) * 100.0
        }
    }

    /// Whether the parse absorbed no problems at all.
    pub fn is_clean(&self) -> bool {
        self.rows_dropped == 0 && self.tables_discarded == 0 && self.invalid_tokens == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
