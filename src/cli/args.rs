use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute per-seller sales statistics from a purchase dataset
#[derive(Parser, Debug)]
#[command(name = "sales-report")]
#[command(about = "Compute per-seller sales statistics from a purchase dataset", long_about = None)]
pub struct CliArgs {
    /// Input JSON file containing sellers, products, and purchase records
    #[arg(value_name = "INPUT", help = "Path to the input JSON dataset")]
    pub input_file: PathBuf,

    /// Output format for the ranked report
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "csv",
        help = "Output format: 'csv' for a flat table or 'json' for a structured array"
    )]
    pub format: OutputFormat,
}

/// Available report output formats
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}
