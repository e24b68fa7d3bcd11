//! XTurb Report Processor Library
//!
//! A Rust library for working with the XTurb BEMT aerodynamics solver's
//! text interfaces: its free-form output reports and its Fortran
//! namelist input decks.
//!
//! This library provides tools for:
//! - Parsing solver output reports into scalar settings and rectangular
//!   numeric tables, robust to irregular whitespace, sentinel tokens,
//!   and malformed numbers
//! - Extracting (x, y) plot series from parsed tables
//! - Writing namelist input decks, with NREL Phase VI defaults
//! - Discovering report files in a solver run directory
//!
//! The solver itself is an external program; launching it, rendering
//! plots, and compressing outputs are host-application concerns.

pub mod constants;
pub mod error;
pub mod input_deck;
pub mod model;
pub mod report;
pub mod scanner;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use error::{Result, XTurbError};
pub use input_deck::InputDeck;
pub use model::{ReportModel, Table};
pub use report::{ParseResult, ParseStats, ReportParser};
pub use scanner::{ReportFileInfo, ReportScanner, ScanConfig};
