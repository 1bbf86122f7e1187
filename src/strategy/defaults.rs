//! Reference default strategies
//!
//! These implement the stock revenue and bonus formulas. Both are
//! plain unit structs so the defaults stay cheap to construct and
//! trivially copyable.

use crate::strategy::{BonusStrategy, RevenueStrategy};
use crate::types::{LineItem, Product, SellerStat};
use rust_decimal::Decimal;

/// Discount-adjusted revenue: `sale_price * quantity * (1 - discount / 100)`
#[derive(Debug, Clone, Copy)]
pub struct DiscountedRevenue;

impl RevenueStrategy for DiscountedRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> Decimal {
        let discount_multiplier = Decimal::ONE - item.discount / Decimal::ONE_HUNDRED;
        item.sale_price * Decimal::from(item.quantity) * discount_multiplier
    }
}

/// Tiered bonus by profit rank
///
/// - rank 0 (first place): 15% of profit
/// - rank 1 or 2: 10% of profit
/// - rank == total - 1 (last place): nothing
/// - everyone else: 5% of profit
///
/// Branches are checked top to bottom and the first match wins, so
/// with three or fewer sellers the last-place branch never fires: a
/// sole seller earns the first-place rate, and with two or three
/// sellers the trailing seller still lands in the top-3 tier.
#[derive(Debug, Clone, Copy)]
pub struct TieredBonus;

impl BonusStrategy for TieredBonus {
    fn bonus(&self, rank: usize, total: usize, stat: &SellerStat) -> Decimal {
        if rank == 0 {
            stat.profit * Decimal::new(15, 2)
        } else if rank == 1 || rank == 2 {
            stat.profit * Decimal::new(10, 2)
        } else if rank + 1 == total {
            Decimal::ZERO
        } else {
            stat.profit * Decimal::new(5, 2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seller;
    use rstest::rstest;

    fn stat_with_profit(profit: i64) -> SellerStat {
        let seller = Seller {
            id: "s1".to_string(),
            first_name: "Test".to_string(),
            last_name: "Seller".to_string(),
        };
        let mut stat = SellerStat::new(&seller);
        stat.record_item("A", 1, Decimal::new(profit, 0));
        stat
    }

    #[rstest]
    #[case::no_discount(2, "20", "0", "40")]
    #[case::half_off(4, "10", "50", "20")]
    #[case::quarter_off(1, "8", "25", "6.00")]
    #[case::full_discount(3, "9", "100", "0")]
    fn test_discounted_revenue(
        #[case] quantity: u32,
        #[case] sale_price: &str,
        #[case] discount: &str,
        #[case] expected: &str,
    ) {
        let item = LineItem {
            sku: "A".to_string(),
            quantity,
            sale_price: sale_price.parse().unwrap(),
            discount: discount.parse().unwrap(),
        };
        let product = Product {
            sku: "A".to_string(),
            purchase_price: Decimal::new(1, 0),
        };

        let expected: Decimal = expected.parse().unwrap();
        assert_eq!(DiscountedRevenue.revenue(&item, &product), expected);
    }

    #[rstest]
    #[case::first_place(0, 5, "100", "15.00")]
    #[case::second_place(1, 5, "100", "10.00")]
    #[case::third_place(2, 5, "100", "10.00")]
    #[case::middle_of_pack(3, 5, "100", "5.00")]
    #[case::last_place(4, 5, "100", "0")]
    fn test_tiered_bonus_with_five_sellers(
        #[case] rank: usize,
        #[case] total: usize,
        #[case] profit: &str,
        #[case] expected: &str,
    ) {
        let stat = stat_with_profit(profit.parse().unwrap());
        let expected: Decimal = expected.parse().unwrap();
        assert_eq!(TieredBonus.bonus(rank, total, &stat), expected);
    }

    // With three or fewer sellers the earlier branches claim every rank,
    // so nobody lands in the zero-bonus last-place tier.
    #[rstest]
    #[case::sole_seller(0, 1, "15.00")]
    #[case::second_of_two(1, 2, "10.00")]
    #[case::third_of_three(2, 3, "10.00")]
    #[case::last_of_four(3, 4, "0")]
    fn test_tiered_bonus_branch_priority(
        #[case] rank: usize,
        #[case] total: usize,
        #[case] expected: &str,
    ) {
        let stat = stat_with_profit(100);
        let expected: Decimal = expected.parse().unwrap();
        assert_eq!(TieredBonus.bonus(rank, total, &stat), expected);
    }
}
