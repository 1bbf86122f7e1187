//! The fold over purchase records
//!
//! Walks the purchase records in input order and folds each into the
//! per-seller running totals, using the injected revenue strategy for
//! per-item revenue. This stage mutates the stats in place and raises
//! no errors: unresolved references are skipped, best-effort.
//!
//! # Skip semantics
//!
//! - A record whose seller id is not in the index contributes nothing.
//! - A line item whose SKU is not in the index contributes nothing,
//!   but the enclosing record's total amount and sales count were
//!   already credited to the seller.

use crate::core::indexer::DatasetIndex;
use crate::strategy::RevenueStrategy;
use crate::types::{Product, PurchaseRecord, SellerStat};
use rust_decimal::Decimal;

/// Fold purchase records into the per-seller stats
pub fn accumulate(
    records: &[PurchaseRecord],
    products: &[Product],
    index: &DatasetIndex,
    stats: &mut [SellerStat],
    revenue: &dyn RevenueStrategy,
) {
    for record in records {
        let stat = match index.seller_pos.get(&record.seller_id) {
            Some(&pos) => &mut stats[pos],
            None => continue,
        };

        // Record-level counters are credited before any line item is
        // examined, so they stand even when every item is skipped.
        stat.record_sale(record.total_amount);

        for item in &record.items {
            let product = match index.product_pos.get(&item.sku) {
                Some(&pos) => &products[pos],
                None => continue,
            };

            let cost = product.purchase_price * Decimal::from(item.quantity);
            let item_revenue = revenue.revenue(item, product);
            stat.record_item(&item.sku, item.quantity, item_revenue - cost);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::indexer::{index_dataset, init_stats};
    use crate::strategy::DiscountedRevenue;
    use crate::types::{LineItem, Seller};

    fn seller(id: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: "Test".to_string(),
            last_name: "Seller".to_string(),
        }
    }

    fn product(sku: &str, price: i64) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price: Decimal::new(price, 0),
        }
    }

    fn item(sku: &str, quantity: u32, sale_price: i64, discount: i64) -> LineItem {
        LineItem {
            sku: sku.to_string(),
            quantity,
            sale_price: Decimal::new(sale_price, 0),
            discount: Decimal::new(discount, 0),
        }
    }

    fn record(seller_id: &str, total: i64, items: Vec<LineItem>) -> PurchaseRecord {
        PurchaseRecord {
            seller_id: seller_id.to_string(),
            total_amount: Decimal::new(total, 0),
            items,
        }
    }

    #[test]
    fn test_single_record_updates_all_counters() {
        let sellers = vec![seller("s1")];
        let products = vec![product("A", 10)];
        let records = vec![record("s1", 40, vec![item("A", 2, 20, 0)])];

        let index = index_dataset(&sellers, &products);
        let mut stats = init_stats(&sellers);
        accumulate(&records, &products, &index, &mut stats, &DiscountedRevenue);

        // revenue 40 from the receipt total; item: 2 * 20 = 40 revenue,
        // 2 * 10 = 20 cost, 20 profit
        assert_eq!(stats[0].revenue, Decimal::new(40, 0));
        assert_eq!(stats[0].profit, Decimal::new(20, 0));
        assert_eq!(stats[0].sales_count, 1);
        assert_eq!(stats[0].quantity_sold("A"), 2);
    }

    #[test]
    fn test_unknown_seller_record_is_skipped_entirely() {
        let sellers = vec![seller("s1")];
        let products = vec![product("A", 10)];
        let records = vec![record("ghost", 999, vec![item("A", 5, 20, 0)])];

        let index = index_dataset(&sellers, &products);
        let mut stats = init_stats(&sellers);
        accumulate(&records, &products, &index, &mut stats, &DiscountedRevenue);

        assert_eq!(stats[0].revenue, Decimal::ZERO);
        assert_eq!(stats[0].profit, Decimal::ZERO);
        assert_eq!(stats[0].sales_count, 0);
        assert_eq!(stats[0].quantity_sold("A"), 0);
    }

    #[test]
    fn test_unknown_sku_skips_item_but_keeps_record_counters() {
        let sellers = vec![seller("s1")];
        let products = vec![product("A", 10)];
        let records = vec![record(
            "s1",
            100,
            vec![item("Z", 9, 99, 0), item("A", 2, 20, 0)],
        )];

        let index = index_dataset(&sellers, &products);
        let mut stats = init_stats(&sellers);
        accumulate(&records, &products, &index, &mut stats, &DiscountedRevenue);

        // The receipt total and sales count stand; only the matched
        // item contributes profit and quantity.
        assert_eq!(stats[0].revenue, Decimal::new(100, 0));
        assert_eq!(stats[0].profit, Decimal::new(20, 0));
        assert_eq!(stats[0].sales_count, 1);
        assert_eq!(stats[0].quantity_sold("Z"), 0);
        assert_eq!(stats[0].quantity_sold("A"), 2);
    }

    #[test]
    fn test_items_only_record_still_counts() {
        let sellers = vec![seller("s1")];
        let products = vec![product("A", 10)];
        let records = vec![record("s1", 15, vec![])];

        let index = index_dataset(&sellers, &products);
        let mut stats = init_stats(&sellers);
        accumulate(&records, &products, &index, &mut stats, &DiscountedRevenue);

        assert_eq!(stats[0].revenue, Decimal::new(15, 0));
        assert_eq!(stats[0].profit, Decimal::ZERO);
        assert_eq!(stats[0].sales_count, 1);
    }

    #[test]
    fn test_multiple_records_accumulate_per_seller() {
        let sellers = vec![seller("s1"), seller("s2")];
        let products = vec![product("A", 10), product("B", 5)];
        let records = vec![
            record("s1", 40, vec![item("A", 2, 20, 0)]),
            record("s2", 10, vec![item("B", 1, 8, 0)]),
            record("s1", 20, vec![item("A", 1, 20, 50)]),
        ];

        let index = index_dataset(&sellers, &products);
        let mut stats = init_stats(&sellers);
        accumulate(&records, &products, &index, &mut stats, &DiscountedRevenue);

        // s1: 40 + 20 revenue; profit (40 - 20) + (10 - 10) = 20
        assert_eq!(stats[0].revenue, Decimal::new(60, 0));
        assert_eq!(stats[0].profit, Decimal::new(20, 0));
        assert_eq!(stats[0].sales_count, 2);
        assert_eq!(stats[0].quantity_sold("A"), 3);

        // s2: 10 revenue; profit 8 - 5 = 3
        assert_eq!(stats[1].revenue, Decimal::new(10, 0));
        assert_eq!(stats[1].profit, Decimal::new(3, 0));
        assert_eq!(stats[1].sales_count, 1);
    }

    #[test]
    fn test_custom_revenue_strategy_is_used() {
        // Ignore prices entirely: one unit of revenue per unit sold
        let per_unit = |item: &LineItem, _p: &Product| Decimal::from(item.quantity);

        let sellers = vec![seller("s1")];
        let products = vec![product("A", 0)];
        let records = vec![record("s1", 0, vec![item("A", 7, 100, 0)])];

        let index = index_dataset(&sellers, &products);
        let mut stats = init_stats(&sellers);
        accumulate(&records, &products, &index, &mut stats, &per_unit);

        assert_eq!(stats[0].profit, Decimal::new(7, 0));
    }
}
