//! Tabular data quality analysis and report generation tool.
//!
//! Loads a CSV or JSON dataset, runs the quality analysis engine over it,
//! and renders the resulting report to the console, with optional HTML and
//! JSON outputs.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tablesurveyor_core::logging::init_logging;
use tablesurveyor_core::quality::QualityEngine;

mod load;
mod render;

/// Command-line interface for the quality analyzer
#[derive(Parser)]
#[command(name = "tablesurveyor")]
#[command(about = "Tabular data quality analysis and report generation")]
#[command(version)]
struct Cli {
    /// Path to the data file (CSV or JSON)
    input: PathBuf,

    /// Write an HTML report to this path
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Export the report as JSON to this path
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("error: {error:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.quiet)?;

    let table = load::load_table(&cli.input)
        .with_context(|| format!("failed to load '{}'", cli.input.display()))?;
    tracing::debug!(
        "loaded {} rows x {} columns from '{}'",
        table.row_count(),
        table.column_count(),
        table.source()
    );

    let report = QualityEngine::with_defaults()
        .analyze(&table)
        .context("quality analysis failed")?;

    print!("{}", render::render_console(&report));

    if let Some(path) = &cli.output {
        render::write_html(&report, path)?;
        println!("HTML report generated: {}", path.display());
    }

    if let Some(path) = &cli.json {
        render::write_json(&report, path)?;
        println!("JSON report exported: {}", path.display());
    }

    Ok(())
}
