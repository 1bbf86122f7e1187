//! Ranking and report finalization
//!
//! Sorts the accumulated stats by profit, assigns rank-based bonuses
//! through the injected bonus strategy, derives each seller's
//! top-product list, and rounds monetary fields for output. The
//! emitted collection is in rank order, best performer first.

use crate::strategy::BonusStrategy;
use crate::types::{round_money, SellerReport, SellerStat};

/// Maximum number of entries in a seller's top-product list
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Rank stats by profit and produce the final report collection
///
/// The sort is stable, so sellers with exactly equal profit keep
/// their relative input order.
pub fn rank_and_finalize(
    mut stats: Vec<SellerStat>,
    bonus: &dyn BonusStrategy,
) -> Vec<SellerReport> {
    stats.sort_by(|a, b| b.profit.cmp(&a.profit));

    let total = stats.len();
    stats
        .iter()
        .enumerate()
        .map(|(rank, stat)| SellerReport {
            seller_id: stat.seller_id.clone(),
            name: stat.name.clone(),
            revenue: round_money(stat.revenue),
            profit: round_money(stat.profit),
            sales_count: stat.sales_count,
            top_products: stat.top_products(TOP_PRODUCTS_LIMIT),
            bonus: round_money(bonus.bonus(rank, total, stat)),
        })
        .collect()
}
