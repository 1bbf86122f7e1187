//! Derived statistics and report output types
//!
//! This module defines the mutable per-seller accumulator used during
//! the fold over purchase records, and the finalized report record
//! emitted once ranking is complete.

use crate::types::dataset::{Seller, SellerId, Sku};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Round a monetary value to exactly two decimal places
///
/// Midpoints round away from zero, and values with fewer than two
/// decimal places are rescaled so the output always carries two.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// One entry in a seller's best-selling product list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    /// Product SKU
    pub sku: Sku,

    /// Cumulative quantity sold by this seller
    pub quantity: u32,
}

/// Running per-seller totals, mutated during accumulation
///
/// One stat is created per input seller before the fold starts, with
/// all counters at zero. Only the accumulator mutates it; the ranker
/// reads it to derive bonuses and top-product lists.
///
/// Per-SKU quantities remember the order in which SKUs were first
/// sold, so equal quantities in the top-product list keep a stable,
/// reproducible order.
#[derive(Debug, Clone)]
pub struct SellerStat {
    /// Identifier of the seller these totals belong to
    pub seller_id: SellerId,

    /// Display name (first and last name, space-joined)
    pub name: String,

    /// Sum of receipt totals attributed to this seller
    pub revenue: Decimal,

    /// Sum of per-item profit (revenue minus cost) across all matched lines
    pub profit: Decimal,

    /// Number of purchase records attributed to this seller
    pub sales_count: u64,

    /// Cumulative quantity sold per SKU
    quantities: HashMap<Sku, u32>,

    /// SKUs in the order they were first sold
    sku_order: Vec<Sku>,
}

impl SellerStat {
    /// Create a zeroed stat for the given seller
    pub fn new(seller: &Seller) -> Self {
        SellerStat {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: Decimal::ZERO,
            profit: Decimal::ZERO,
            sales_count: 0,
            quantities: HashMap::new(),
            sku_order: Vec::new(),
        }
    }

    /// Record one purchase record attributed to this seller
    ///
    /// Increments the sales count and adds the receipt total to revenue.
    /// Called once per record, before any of its line items are examined.
    pub fn record_sale(&mut self, total_amount: Decimal) {
        self.sales_count += 1;
        self.revenue += total_amount;
    }

    /// Record one matched line item
    ///
    /// Adds the item's profit to the running total and the quantity to
    /// the per-SKU tally, remembering first-sold order for new SKUs.
    pub fn record_item(&mut self, sku: &str, quantity: u32, item_profit: Decimal) {
        self.profit += item_profit;

        match self.quantities.entry(sku.to_string()) {
            Entry::Occupied(mut entry) => *entry.get_mut() += quantity,
            Entry::Vacant(entry) => {
                entry.insert(quantity);
                self.sku_order.push(sku.to_string());
            }
        }
    }

    /// Cumulative quantity sold for a SKU (zero if never sold)
    pub fn quantity_sold(&self, sku: &str) -> u32 {
        self.quantities.get(sku).copied().unwrap_or(0)
    }

    /// Best-selling SKUs by cumulative quantity, capped at `limit`
    ///
    /// Sorted by quantity descending; the sort is stable, so equal
    /// quantities keep first-sold order.
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut products: Vec<TopProduct> = self
            .sku_order
            .iter()
            .map(|sku| TopProduct {
                sku: sku.clone(),
                quantity: self.quantities[sku],
            })
            .collect();

        products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        products.truncate(limit);
        products
    }
}

/// Finalized per-seller report record
///
/// Emitted in rank order (best profit first). Monetary fields are
/// rounded to exactly two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerReport {
    /// Seller identifier
    pub seller_id: SellerId,

    /// Display name
    pub name: String,

    /// Total revenue, rounded to two decimals
    pub revenue: Decimal,

    /// Total profit, rounded to two decimals
    pub profit: Decimal,

    /// Number of purchase records attributed to this seller
    pub sales_count: u64,

    /// Best-selling SKUs, at most ten entries, quantity descending
    pub top_products: Vec<TopProduct>,

    /// Rank-derived bonus, rounded to two decimals
    pub bonus: Decimal,
}
