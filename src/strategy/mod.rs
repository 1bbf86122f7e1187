//! Calculation strategies for revenue and bonus computation
//!
//! This module defines the Strategy pattern for the two calculation
//! policies the pipeline treats as external: how a line item's revenue
//! is computed, and how a seller's rank translates into a bonus. Both
//! are injected through [`AnalysisOptions`] so callers can substitute
//! their own formulas without touching the pipeline.
//!
//! Plain closures with the matching signature implement the traits via
//! blanket impls, so a custom policy does not need a named type.

use crate::types::{LineItem, Product, SellerStat};
use rust_decimal::Decimal;

pub mod defaults;

pub use defaults::{DiscountedRevenue, TieredBonus};

/// Policy for computing the revenue of a single line item
///
/// Invoked once per matched line item during accumulation, with the
/// item and its catalog product. Implementations are expected to be
/// synchronous and side-effect-free.
pub trait RevenueStrategy {
    /// Compute the monetary revenue for one line item
    fn revenue(&self, item: &LineItem, product: &Product) -> Decimal;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&LineItem, &Product) -> Decimal,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> Decimal {
        self(item, product)
    }
}

/// Policy for computing a seller's bonus from their profit rank
///
/// Invoked once per seller after ranking, with the seller's 0-based
/// rank position, the total number of sellers, and the seller's
/// accumulated stats.
pub trait BonusStrategy {
    /// Compute the bonus for the seller at the given rank
    fn bonus(&self, rank: usize, total: usize, stat: &SellerStat) -> Decimal;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> Decimal,
{
    fn bonus(&self, rank: usize, total: usize, stat: &SellerStat) -> Decimal {
        self(rank, total, stat)
    }
}

/// Strategy bundle supplied alongside the dataset
///
/// Mirrors the caller-facing options object: either strategy may be
/// absent, in which case validation rejects the analysis with a
/// [`MissingStrategy`](crate::types::ReportError::MissingStrategy)
/// error before any computation starts.
pub struct AnalysisOptions {
    /// Per-item revenue formula
    pub calculate_revenue: Option<Box<dyn RevenueStrategy>>,

    /// Rank-to-bonus formula
    pub calculate_bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalysisOptions {
    /// Options with both reference default strategies installed
    pub fn standard() -> Self {
        AnalysisOptions {
            calculate_revenue: Some(Box::new(DiscountedRevenue)),
            calculate_bonus: Some(Box::new(TieredBonus)),
        }
    }

    /// Options with no strategies installed
    ///
    /// Analysis against these options fails validation; populate the
    /// fields through the builder methods.
    pub fn none() -> Self {
        AnalysisOptions {
            calculate_revenue: None,
            calculate_bonus: None,
        }
    }

    /// Replace the revenue strategy
    pub fn with_revenue<S: RevenueStrategy + 'static>(mut self, strategy: S) -> Self {
        self.calculate_revenue = Some(Box::new(strategy));
        self
    }

    /// Replace the bonus strategy
    pub fn with_bonus<S: BonusStrategy + 'static>(mut self, strategy: S) -> Self {
        self.calculate_bonus = Some(Box::new(strategy));
        self
    }
}

impl std::fmt::Debug for dyn RevenueStrategy + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("RevenueStrategy")
    }
}

impl std::fmt::Debug for dyn BonusStrategy + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BonusStrategy")
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}
