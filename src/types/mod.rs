//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `dataset`: input types (sellers, products, purchase records)
//! - `report`: derived statistics and finalized report records
//! - `error`: error types for the report engine

pub mod dataset;
pub mod error;
pub mod report;

pub use dataset::{Dataset, LineItem, Product, PurchaseRecord, Seller, SellerId, Sku};
pub use error::ReportError;
pub use report::{round_money, SellerReport, SellerStat, TopProduct};
