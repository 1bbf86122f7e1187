//! Lookup index construction
//!
//! Builds the two hash indexes used during accumulation: seller id to
//! stat position and SKU to catalog position. Both exist purely to
//! turn the linear scans of the fold into O(1) lookups and are
//! discarded once accumulation completes.

use crate::types::{Product, Seller, SellerId, SellerStat, Sku};
use std::collections::HashMap;

/// Positional indexes over the input dataset
///
/// `seller_pos` maps a seller id to its position in the stats vector
/// produced by [`init_stats`]; `product_pos` maps a SKU to its
/// position in the input product slice. Duplicate ids or SKUs in the
/// input overwrite earlier entries (last write wins) - uniqueness is
/// the caller's responsibility.
#[derive(Debug)]
pub struct DatasetIndex {
    /// Seller id to stats-vector position
    pub seller_pos: HashMap<SellerId, usize>,

    /// SKU to product-slice position
    pub product_pos: HashMap<Sku, usize>,
}

/// Create one zeroed stat per input seller, preserving input order
pub fn init_stats(sellers: &[Seller]) -> Vec<SellerStat> {
    sellers.iter().map(SellerStat::new).collect()
}

/// Build the seller and product indexes
pub fn index_dataset(sellers: &[Seller], products: &[Product]) -> DatasetIndex {
    let seller_pos = sellers
        .iter()
        .enumerate()
        .map(|(pos, seller)| (seller.id.clone(), pos))
        .collect();

    let product_pos = products
        .iter()
        .enumerate()
        .map(|(pos, product)| (product.sku.clone(), pos))
        .collect();

    DatasetIndex {
        seller_pos,
        product_pos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn seller(id: &str, first: &str) -> Seller {
        Seller {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: "Seller".to_string(),
        }
    }

    fn product(sku: &str, price: i64) -> Product {
        Product {
            sku: sku.to_string(),
            purchase_price: Decimal::new(price, 0),
        }
    }

    #[test]
    fn test_init_stats_preserves_input_order() {
        let sellers = vec![seller("s2", "Bob"), seller("s1", "Alice")];
        let stats = init_stats(&sellers);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].seller_id, "s2");
        assert_eq!(stats[1].seller_id, "s1");
        assert_eq!(stats[0].revenue, Decimal::ZERO);
        assert_eq!(stats[0].sales_count, 0);
    }

    #[test]
    fn test_index_maps_ids_to_positions() {
        let sellers = vec![seller("s1", "Alice"), seller("s2", "Bob")];
        let products = vec![product("A", 10), product("B", 5)];

        let index = index_dataset(&sellers, &products);
        assert_eq!(index.seller_pos["s1"], 0);
        assert_eq!(index.seller_pos["s2"], 1);
        assert_eq!(index.product_pos["A"], 0);
        assert_eq!(index.product_pos["B"], 1);
        assert!(!index.seller_pos.contains_key("ghost"));
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let sellers = vec![seller("s1", "Alice"), seller("s1", "Alicia")];
        let products = vec![product("A", 10), product("A", 99)];

        let index = index_dataset(&sellers, &products);
        assert_eq!(index.seller_pos["s1"], 1);
        assert_eq!(index.product_pos["A"], 1);
    }
}
