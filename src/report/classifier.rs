//! Per-line classification for report parsing
//!
//! Decides what a single trimmed line of the report means given the
//! current parser state. Classification is a pure function of the line
//! and two state bits; all mutation happens in the accumulator.

use crate::constants::{HEADER_INTRODUCERS, TABLE_DELIMITER_RUN};

/// Category of one report line. Variants are checked in declaration
/// order; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Blank after trimming. No structural effect.
    Empty,

    /// Contains a `---` run: a table section boundary banner.
    Delimiter,

    /// First token is a recognized header introducer (inside a table
    /// section only). Sets the current table's column names.
    Header,

    /// Numeric data row for the current table (inside a table section
    /// with headers already set).
    Row,

    /// `KEY = VALUE` preamble line (outside any table section). Slices
    /// borrow from the classified line.
    Scalar { key: &'a str, value: &'a str },

    /// Decorative or prose line, preserved for display only.
    Prose,

    /// Inside a table section but before any header line, and not a
    /// header itself. Contributes nothing.
    Stray,
}

/// Line classification policy.
///
/// The only variable part of the policy is the set of tokens that
/// introduce a table header line. Report variants with new tables
/// extend the list instead of touching control flow.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    header_introducers: Vec<String>,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self {
            header_introducers: HEADER_INTRODUCERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LineClassifier {
    /// Classifier recognizing the standard XTurb header introducers
    /// (`r/R` and `Number`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier with a custom header-introducer list.
    pub fn with_introducers(introducers: impl IntoIterator<Item = String>) -> Self {
        Self {
            header_introducers: introducers.into_iter().collect(),
        }
    }

    /// Whether a token introduces a table header line. Exact match only.
    pub fn is_header_introducer(&self, token: &str) -> bool {
        self.header_introducers.iter().any(|t| t == token)
    }

    /// Classify one already-trimmed line.
    ///
    /// `in_table_section` is sticky from the first delimiter line
    /// onward; `has_headers` reflects the in-progress table. Precedence:
    /// Empty, Delimiter, Header, Row, Scalar, Prose.
    pub fn classify<'a>(
        &self,
        line: &'a str,
        in_table_section: bool,
        has_headers: bool,
    ) -> LineClass<'a> {
        if line.is_empty() {
            return LineClass::Empty;
        }

        if line.contains(TABLE_DELIMITER_RUN) {
            return LineClass::Delimiter;
        }

        if in_table_section {
            let first = line.split_whitespace().next().unwrap_or("");
            if self.is_header_introducer(first) {
                return LineClass::Header;
            }
            if has_headers {
                return LineClass::Row;
            }
            return LineClass::Stray;
        }

        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim_end();
            let value = line[eq_pos + 1..].trim_start();
            return LineClass::Scalar { key, value };
        }

        LineClass::Prose
    }
}
