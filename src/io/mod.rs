//! I/O module
//!
//! Handles JSON dataset input and report output.
//!
//! # Components
//!
//! - `json_format` - dataset reading and JSON report output
//! - `csv_format` - flat CSV report rendering

pub mod csv_format;
pub mod json_format;

pub use csv_format::{format_top_products, write_reports_csv};
pub use json_format::{read_dataset, write_reports_json};
