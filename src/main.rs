use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;
use xturb_processor::cli::{args::Args, commands};

fn main() {
    // Logging is opt-in via RUST_LOG; the CLI output itself goes to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("XTurb Processor - Solver Report Parser and Deck Writer");
    println!("======================================================");
    println!();
    println!("Parse XTurb BEMT solver output reports into structured scalar and");
    println!("table data, list reports in a run directory, and write input decks.");
    println!();
    println!("USAGE:");
    println!("    xturb-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a solver output report and print its contents");
    println!("    scan        List report files in a solver run directory");
    println!("    deck        Write a template input deck (NREL Phase VI defaults)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a report and print a text summary:");
    println!("    xturb-processor parse XTurb_Output1.dat");
    println!();
    println!("    # Parse a report as JSON:");
    println!("    xturb-processor parse XTurb_Output1.dat --format json");
    println!();
    println!("    # List reports in a run directory:");
    println!("    xturb-processor scan ./runs/phase-vi");
    println!();
    println!("    # Write the default input deck:");
    println!("    xturb-processor deck case.inp");
    println!();
    println!("For detailed help on any command, use:");
    println!("    xturb-processor <COMMAND> --help");
}
