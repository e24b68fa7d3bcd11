//! Application constants for the XTurb report processor
//!
//! This module contains the report-format markers, input deck formatting
//! values, and defaults used throughout the crate.

// =============================================================================
// Report Format Markers
// =============================================================================

/// Substring marking a table section boundary. Reports use runs of three
/// or more hyphens as banners around each results table.
pub const TABLE_DELIMITER_RUN: &str = "---";

/// First tokens that introduce a table header line. The spanwise results
/// table starts with `r/R`, the performance summary with `Number`. New
/// report variants extend this list rather than the classifier itself.
pub const HEADER_INTRODUCERS: &[&str] = &["r/R", "Number"];

/// The header introducer whose banner line is kept out of the header
/// text blob (it is the most prominent table in the display and would
/// otherwise appear twice).
pub const SUPPRESSED_HEADER_INTRODUCER: &str = "r/R";

/// Numeric sentinel emitted by the solver for diverged quantities.
/// Exact match only; case variants fall through to NaN.
pub const INFINITY_TOKEN: &str = "Infinity";

/// Terminator appended to lines accumulated into the header text blob.
pub const HEADER_TEXT_TERMINATOR: &str = "\n";

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Extension of solver output report files (e.g. `XTurb_Output1.dat`).
pub const REPORT_FILE_EXTENSION: &str = "dat";

// =============================================================================
// Input Deck Formatting
// =============================================================================

/// Line terminator for generated input decks. XTurb is driven on
/// Windows and reads CRLF-terminated namelists.
pub const DECK_LINE_TERMINATOR: &str = "\r\n";

/// Decimal places used when rendering real values into a deck.
pub const DECK_REAL_PRECISION: usize = 3;

/// Continuation indentation for array values spanning multiple lines.
pub const DECK_ARRAY_INDENT: &str = "                ";
