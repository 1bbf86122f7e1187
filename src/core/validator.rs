//! Dataset and options validation
//!
//! Pure precondition checks executed once, before any other stage.
//! The rest of the pipeline assumes validated input and raises no
//! errors of its own.

use crate::strategy::{AnalysisOptions, BonusStrategy, RevenueStrategy};
use crate::types::{Dataset, ReportError};

/// Check the dataset shape before any computation
///
/// Each of the three input sequences must be non-empty. Referential
/// integrity (seller ids and SKUs actually resolving) is deliberately
/// not checked here; unresolved references are skipped during
/// accumulation instead.
///
/// # Errors
///
/// Returns `ReportError::InvalidData` naming the first empty sequence.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), ReportError> {
    if dataset.sellers.is_empty() {
        return Err(ReportError::invalid_data("sellers must be a non-empty list"));
    }
    if dataset.products.is_empty() {
        return Err(ReportError::invalid_data(
            "products must be a non-empty list",
        ));
    }
    if dataset.purchase_records.is_empty() {
        return Err(ReportError::invalid_data(
            "purchase_records must be a non-empty list",
        ));
    }
    Ok(())
}

/// Check that both calculation strategies are present
///
/// Returns borrowed trait objects for the two strategies so the
/// pipeline can invoke them without taking ownership.
///
/// # Errors
///
/// Returns `ReportError::MissingStrategy` naming the absent strategy.
pub fn validate_options(
    options: &AnalysisOptions,
) -> Result<(&dyn RevenueStrategy, &dyn BonusStrategy), ReportError> {
    let revenue = options
        .calculate_revenue
        .as_deref()
        .ok_or_else(|| ReportError::missing_strategy("calculate_revenue"))?;

    let bonus = options
        .calculate_bonus
        .as_deref()
        .ok_or_else(|| ReportError::missing_strategy("calculate_bonus"))?;

    Ok((revenue, bonus))
}
