//! Parser for XTurb solver output reports
//!
//! XTurb writes a free-form, human-oriented text report (`.dat`): a
//! preamble of `KEY = VALUE` settings and prose, followed by results
//! tables bounded by `---` banner lines. This module reconstructs that
//! report into a structured [`ReportModel`](crate::model::ReportModel),
//! tolerating irregular whitespace, sentinel tokens, and malformed
//! numbers.
//!
//! ## Architecture
//!
//! - [`classifier`] - Per-line category decisions (delimiter, header,
//!   data row, scalar, prose)
//! - [`tokens`] - Whitespace tokenization and token-to-value conversion
//! - [`accumulator`] - In-progress table state and seal/reset transitions
//! - [`parser`] - Orchestration over the line sequence
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Robustness policy
//!
//! The parse is best-effort and structural: a malformed numeric token
//! becomes NaN, a row with the wrong number of values is dropped, and a
//! table that never gains headers or rows is discarded. Only a failed
//! file open aborts the parse. The result may therefore be a smaller
//! model than the report implies, which [`stats::ParseStats`] makes
//! visible.
//!
//! ## Usage
//!
//! ```no_run
//! use xturb_processor::report::ReportParser;
//!
//! # fn example() -> xturb_processor::Result<()> {
//! let parser = ReportParser::new();
//! let result = parser.parse_file(std::path::Path::new("XTurb_Output1.dat"))?;
//!
//! println!(
//!     "{} tables, {} scalars",
//!     result.model.table_count(),
//!     result.model.scalars.len()
//! );
//! # Ok(())
//! # }
//! ```

pub mod accumulator;
pub mod classifier;
pub mod parser;
pub mod stats;
pub mod tokens;

#[cfg(test)]
mod tests;

// Re-export main types for easy access
pub use classifier::{LineClass, LineClassifier};
pub use parser::ReportParser;
pub use stats::{ParseResult, ParseStats};
