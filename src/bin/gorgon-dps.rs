//! Project Gorgon combat log damage report CLI
//!
//! Reads the client's `Player.log`, prints per-zone and overall damage
//! tables to stdout, and optionally exports the flattened rows to CSV.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use gorgon_dps::alias::{AliasTable, ALIAS_CONFIG_FILE};
use gorgon_dps::analyzer::{analyze_file, DEFAULT_LOG_FILE};
use gorgon_dps::export::{write_csv, DEFAULT_CSV_FILE};
use gorgon_dps::report::render_report;

/// Project Gorgon combat log damage report generator
#[derive(Parser)]
#[command(name = "gorgon-dps")]
#[command(about = "Project Gorgon combat log damage report generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the client log file
    #[arg(default_value = DEFAULT_LOG_FILE)]
    log: PathBuf,

    /// Also export the per-zone rows to a CSV file
    #[arg(long)]
    export_csv: bool,

    /// CSV output path, used with --export-csv
    #[arg(long, default_value = DEFAULT_CSV_FILE)]
    csv_path: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli.log, cli.export_csv, &cli.csv_path)
}

fn run(log: &Path, export_csv: bool, csv_path: &Path) -> ExitCode {
    let aliases = load_aliases();

    // Missing log is fatal; nothing is printed but the error.
    let analysis = match analyze_file(log, aliases) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", render_report(&analysis));

    if export_csv {
        // A failed export is a warning; the report above already printed.
        match write_csv(&analysis, csv_path) {
            Ok(rows) => {
                println!();
                println!("Exported {rows} rows to {}", csv_path.display());
            }
            Err(e) => eprintln!("Warning: {e}"),
        }
    }

    ExitCode::SUCCESS
}

/// Builds the alias table: built-in defaults, with entries from the
/// optional JSON config file merged over them when present.
fn load_aliases() -> AliasTable {
    let mut aliases = AliasTable::builtin();
    let config = Path::new(ALIAS_CONFIG_FILE);
    if config.exists() {
        match AliasTable::load(config) {
            Ok(table) => aliases.merge(table),
            Err(e) => eprintln!("Warning: {e}"),
        }
    }
    aliases
}
