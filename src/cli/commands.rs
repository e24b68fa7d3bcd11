//! Command implementations for the XTurb processor CLI
//!
//! Dispatches parsed arguments to the appropriate handler and renders
//! the results for the terminal.

use colored::Colorize;
use tracing::debug;

use crate::cli::args::{Args, Commands, DeckArgs, OutputFormat, ParseArgs, ScanArgs};
use crate::input_deck::InputDeck;
use crate::report::{ParseResult, ReportParser};
use crate::scanner::{ReportScanner, ScanConfig};
use crate::{Result, XTurbError};

/// Main command runner: dispatches to the subcommand handlers.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Parse(parse_args)) => run_parse(parse_args),
        Some(Commands::Scan(scan_args)) => run_scan(scan_args),
        Some(Commands::Deck(deck_args)) => run_deck(deck_args),
        None => Ok(()),
    }
}

/// Parse a report file and print it in the requested format.
fn run_parse(args: ParseArgs) -> Result<()> {
    debug!("Parse arguments: {:?}", args);

    let parser = ReportParser::new();
    let result = parser.parse_file(&args.file)?;

    match args.format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Text => print_text(&result, args.show_header_text),
    }
    Ok(())
}

fn print_json(result: &ParseResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn print_text(result: &ParseResult, show_header_text: bool) {
    let model = &result.model;
    let stats = &result.stats;

    if !model.scalars.is_empty() {
        println!("{}", "Scalars".bold());
        let mut keys: Vec<&String> = model.scalars.keys().collect();
        keys.sort();
        for key in keys {
            println!("  {} = {}", key.cyan(), model.scalars[key]);
        }
        println!();
    }

    for (i, table) in model.tables.iter().enumerate() {
        println!(
            "{} {} ({} columns x {} rows)",
            "Table".bold(),
            i + 1,
            table.column_count(),
            table.row_count()
        );
        println!("  {}", table.headers.join("  ").green());
        for row in &table.rows {
            let rendered: Vec<String> = row.iter().map(|v| format!("{:>10.4}", v)).collect();
            println!("  {}", rendered.join(" "));
        }
        println!();
    }

    if show_header_text {
        println!("{}", "Header text".bold());
        println!("{}", model.header_text);
    }

    println!(
        "{} {} table(s), {} scalar(s), {} row(s) accepted, {} dropped, {} invalid token(s)",
        "Summary:".bold(),
        stats.tables_sealed,
        stats.scalars_parsed,
        stats.rows_accepted,
        stats.rows_dropped,
        stats.invalid_tokens
    );
    if !stats.is_clean() {
        for error in &stats.errors {
            println!("  {} {}", "warning:".yellow(), error);
        }
    }
}

/// List report files in a run directory.
fn run_scan(args: ScanArgs) -> Result<()> {
    debug!("Scan arguments: {:?}", args);

    let scanner = ReportScanner::new(ScanConfig {
        max_files: args.max_files,
        min_file_size: args.min_size,
    });
    let files = scanner.scan(&args.dir)?;

    if files.is_empty() {
        println!("No report files found under {}", args.dir.display());
        return Ok(());
    }

    for info in &files {
        println!("{:>10}  {}", info.size_bytes, info.path.display());
    }
    println!("{} report file(s)", files.len());
    Ok(())
}

/// Write the default input deck to a file.
fn run_deck(args: DeckArgs) -> Result<()> {
    debug!("Deck arguments: {:?}", args);

    if args.output.exists() && !args.force {
        return Err(XTurbError::configuration(format!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        )));
    }

    let deck = InputDeck::new();
    deck.write_to_file(&args.output)?;
    println!(
        "{} input deck written to {}",
        "Done:".green().bold(),
        args.output.display()
    );
    Ok(())
}
