//! Command-line argument definitions for the XTurb processor
//!
//! Defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the XTurb report processor
///
/// Parses XTurb BEMT solver output reports into structured tables,
/// scans run directories for reports, and writes template input decks.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "xturb-processor",
    version,
    about = "Parse XTurb solver output reports and prepare input decks",
    long_about = "Tooling around the XTurb BEMT aerodynamics solver: parses its free-form \
                  text output reports into structured scalar and table data, lists report \
                  files in a run directory, and writes Fortran namelist input decks."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a solver output report and print its contents
    Parse(ParseArgs),
    /// List report files in a solver run directory
    Scan(ScanArgs),
    /// Write a template input deck (NREL Phase VI defaults)
    Deck(DeckArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Path to the report file (e.g. XTurb_Output1.dat)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for the parsed report
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format (text summary or full JSON)"
    )]
    pub format: OutputFormat,

    /// Also print the accumulated header text blob (text format only)
    #[arg(long = "show-header-text")]
    pub show_header_text: bool,
}

/// Output formats for the parse command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Full model and statistics as JSON
    Json,
}

/// Arguments for the scan command
#[derive(Debug, Clone, Parser)]
pub struct ScanArgs {
    /// Solver run directory to scan
    #[arg(value_name = "DIR")]
    pub dir: PathBuf,

    /// Minimum report size in bytes to include
    #[arg(long = "min-size", value_name = "BYTES", default_value_t = 0)]
    pub min_size: u64,

    /// Maximum number of reports to list
    #[arg(long = "max-files", value_name = "N")]
    pub max_files: Option<usize>,
}

/// Arguments for the deck command
#[derive(Debug, Clone, Parser)]
pub struct DeckArgs {
    /// Output path for the input deck (e.g. case.inp)
    #[arg(value_name = "OUT")]
    pub output: PathBuf,

    /// Overwrite the output file if it already exists
    #[arg(long = "force")]
    pub force: bool,
}
