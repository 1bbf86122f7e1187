//! JSON input and output handling
//!
//! The dataset arrives as a single JSON document with three arrays
//! (sellers, products, purchase_records); its nested line items make
//! JSON the natural wire shape. Reports can be rendered back as a
//! pretty-printed JSON array.

use crate::types::{Dataset, ReportError, SellerReport};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};
use std::path::Path;

/// Read a dataset from a JSON file
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist (`FileNotFound`)
/// - The file cannot be read (`IoError`)
/// - The document is not valid JSON for the dataset shape (`ParseError`)
pub fn read_dataset(path: &Path) -> Result<Dataset, ReportError> {
    let file = File::open(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => ReportError::file_not_found(path),
        _ => ReportError::from(error),
    })?;

    let reader = BufReader::new(file);
    let dataset = serde_json::from_reader(reader)?;
    Ok(dataset)
}

/// Write reports as a pretty-printed JSON array
///
/// Reports are written in the order given (rank order) with a single
/// trailing newline.
pub fn write_reports_json(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *output, reports)?;
    writeln!(output)?;
    Ok(())
}
