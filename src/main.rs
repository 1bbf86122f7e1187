//! Sales Report Engine CLI
//!
//! Command-line interface for computing per-seller sales statistics
//! from a JSON purchase dataset.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sales.json > report.csv
//! cargo run -- --format json sales.json > report.json
//! ```
//!
//! The program reads the dataset from the input JSON file, runs the
//! aggregation pipeline with the default revenue and bonus strategies,
//! and writes the ranked report to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, invalid dataset, etc.)

use sales_report_engine::cli::{self, CliArgs, OutputFormat};
use sales_report_engine::{io, ReportEngine, ReportError};
use std::io::Write;
use std::process;

fn main() {
    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Load the dataset, run the pipeline, and render the report
fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), ReportError> {
    let dataset = io::read_dataset(&args.input_file)?;

    let engine = ReportEngine::standard();
    let reports = engine.analyze(&dataset)?;

    match args.format {
        OutputFormat::Csv => io::write_reports_csv(&reports, output),
        OutputFormat::Json => io::write_reports_json(&reports, output),
    }
}
