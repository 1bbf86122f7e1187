//! Input dataset types for the Sales Report Engine
//!
//! This module defines the read-only input types supplied by the caller:
//! the seller roster, the product catalog, and the purchase records to
//! aggregate. All types deserialize from the JSON dataset document.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Seller identifier
///
/// Sellers are keyed by an opaque string identifier supplied by the caller.
pub type SellerId = String;

/// Product stock keeping unit
///
/// Products are keyed by SKU, unique across the catalog.
pub type Sku = String;

/// A salesperson whose transactions are aggregated
///
/// Supplied by the caller, read-only. Seller identifiers are expected
/// to be unique across the seller list; a duplicate id overwrites the
/// earlier entry in the seller index (last write wins).
#[derive(Debug, Clone, Deserialize)]
pub struct Seller {
    /// Unique seller identifier
    pub id: SellerId,

    /// Seller's first name
    pub first_name: String,

    /// Seller's last name
    pub last_name: String,
}

impl Seller {
    /// Display name used in reports (first and last name, space-joined)
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A catalog item with a known purchase (cost) price
///
/// Supplied by the caller, read-only. The purchase price is the cost
/// basis used when computing per-item profit.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Unique stock keeping unit
    pub sku: Sku,

    /// Cost basis per unit
    pub purchase_price: Decimal,
}

/// One product line within a purchase record
///
/// The discount is a percentage in the 0-100 range and applies to the
/// line's sale price when computing revenue.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    /// SKU of the product sold
    pub sku: Sku,

    /// Units sold on this line
    pub quantity: u32,

    /// Sale price per unit before discount
    pub sale_price: Decimal,

    /// Discount percentage (0-100)
    #[serde(default)]
    pub discount: Decimal,
}

/// One transaction belonging to a seller
///
/// The total amount is the receipt total as recorded at the point of
/// sale. It counts toward the seller's revenue in full, even when line
/// items reference SKUs missing from the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseRecord {
    /// Identifier of the seller this transaction belongs to
    pub seller_id: SellerId,

    /// Total monetary amount of the receipt
    pub total_amount: Decimal,

    /// Ordered product lines of the receipt
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// The full input dataset: sellers, products, and purchase records
///
/// All three sequences must be non-empty for analysis to proceed.
/// Absent arrays in the input document deserialize as empty and are
/// rejected by validation.
#[derive(Debug, Clone, Deserialize)]
pub struct Dataset {
    /// Seller roster
    #[serde(default)]
    pub sellers: Vec<Seller>,

    /// Product catalog
    #[serde(default)]
    pub products: Vec<Product>,

    /// Purchase records to aggregate
    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}
