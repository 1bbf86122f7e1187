//! Report engine orchestration
//!
//! This module provides the ReportEngine that runs the four pipeline
//! stages in sequence: validation, index construction, the fold over
//! purchase records, and ranking/finalization.
//!
//! The pipeline is single-threaded and synchronous by design: every
//! invocation operates on a fresh set of derived stats, data flows
//! strictly forward through the stages, and either the whole report
//! is produced or a validation error is returned before any
//! accumulation begins.

use crate::core::{accumulator, indexer, ranker, validator};
use crate::strategy::AnalysisOptions;
use crate::types::{Dataset, ReportError, SellerReport};

/// One-shot, in-memory report engine
///
/// Holds the strategy bundle and analyzes datasets against it. The
/// engine itself carries no mutable state; `analyze` can be called
/// any number of times with independent results.
pub struct ReportEngine {
    options: AnalysisOptions,
}

impl ReportEngine {
    /// Create an engine with the given strategy bundle
    pub fn new(options: AnalysisOptions) -> Self {
        ReportEngine { options }
    }

    /// Create an engine with the reference default strategies
    pub fn standard() -> Self {
        Self::new(AnalysisOptions::standard())
    }

    /// Compute the ranked per-seller report for a dataset
    ///
    /// Runs validation, builds the lookup indexes, folds the purchase
    /// records into per-seller stats, and returns the finalized report
    /// collection in rank order (best profit first).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any of the dataset's three sequences is empty (`InvalidData`)
    /// - Either calculation strategy is absent (`MissingStrategy`)
    ///
    /// Unresolved seller ids and SKUs inside the records are not
    /// errors; the offending unit is skipped and processing continues.
    pub fn analyze(&self, dataset: &Dataset) -> Result<Vec<SellerReport>, ReportError> {
        validator::validate_dataset(dataset)?;
        let (revenue, bonus) = validator::validate_options(&self.options)?;

        let mut stats = indexer::init_stats(&dataset.sellers);
        let index = indexer::index_dataset(&dataset.sellers, &dataset.products);

        accumulator::accumulate(
            &dataset.purchase_records,
            &dataset.products,
            &index,
            &mut stats,
            revenue,
        );

        Ok(ranker::rank_and_finalize(stats, bonus))
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::standard()
    }
}
