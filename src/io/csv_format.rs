//! CSV report rendering
//!
//! Renders the ranked report collection as a flat CSV table with one
//! row per seller. The top-product list is flattened into a single
//! `sku:quantity` cell joined with semicolons, so rows never need
//! quoting. All functions are pure (no file I/O) for easy testing.

use crate::types::{ReportError, SellerReport, TopProduct};
use csv::Writer;
use std::io::Write;

/// Flatten a top-product list into a single CSV cell
///
/// Entries render as `sku:quantity` joined with `;`, preserving the
/// list's order. An empty list renders as an empty cell.
pub fn format_top_products(products: &[TopProduct]) -> String {
    products
        .iter()
        .map(|p| format!("{}:{}", p.sku, p.quantity))
        .collect::<Vec<_>>()
        .join(";")
}

/// Write reports to CSV format
///
/// Columns: seller_id, name, revenue, profit, sales_count,
/// top_products, bonus. Rows are written in the order given, which is
/// rank order (best profit first).
pub fn write_reports_csv(
    reports: &[SellerReport],
    output: &mut dyn Write,
) -> Result<(), ReportError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record([
        "seller_id",
        "name",
        "revenue",
        "profit",
        "sales_count",
        "top_products",
        "bonus",
    ])?;

    for report in reports {
        writer.write_record(&[
            report.seller_id.clone(),
            report.name.clone(),
            format!("{:.2}", report.revenue),
            format!("{:.2}", report.profit),
            report.sales_count.to_string(),
            format_top_products(&report.top_products),
            format!("{:.2}", report.bonus),
        ])?;
    }

    writer.flush().map_err(ReportError::from)?;
    Ok(())
}
