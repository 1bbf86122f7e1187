//! Sales Report Engine Library
//! # Overview
//!
//! This library computes per-salesperson performance statistics from a
//! batch of purchase transactions: total revenue, total profit, units
//! sold per product, a top-10 product list, and a rank-based bonus.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Dataset, SellerStat, SellerReport, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - The aggregation pipeline:
//!   - [`core::validator`] - Dataset shape and strategy presence checks
//!   - [`core::indexer`] - Seller and product lookup indexes
//!   - [`core::accumulator`] - The fold over purchase records
//!   - [`core::ranker`] - Profit ranking, bonuses, and finalization
//!   - [`core::engine`] - Orchestration of the four stages
//! - [`strategy`] - Pluggable revenue and bonus calculation policies
//! - [`io`] - JSON dataset input and CSV/JSON report output
//!
//! # Pipeline
//!
//! Analysis runs as four sequential, purely in-memory stages: validate
//! the dataset shape, index sellers and products for O(1) lookup, fold
//! purchase records into per-seller running totals, then rank sellers
//! by profit and derive bonuses and top-product lists.
//!
//! # Calculation Strategies
//!
//! The per-item revenue formula and the rank-to-bonus formula are
//! injected as strategies rather than hardcoded, so callers can swap
//! either without touching the pipeline. [`DiscountedRevenue`] and
//! [`TieredBonus`] provide the reference defaults.
//!
//! # Example
//!
//! ```no_run
//! use sales_report_engine::{read_dataset, ReportEngine};
//! use std::path::Path;
//!
//! let dataset = read_dataset(Path::new("sales.json")).unwrap();
//! let reports = ReportEngine::standard().analyze(&dataset).unwrap();
//! for report in &reports {
//!     println!("{}: profit {}, bonus {}", report.name, report.profit, report.bonus);
//! }
//! ```

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{ReportEngine, TOP_PRODUCTS_LIMIT};
pub use io::{read_dataset, write_reports_csv, write_reports_json};
pub use strategy::{
    AnalysisOptions, BonusStrategy, DiscountedRevenue, RevenueStrategy, TieredBonus,
};
pub use types::{
    Dataset, LineItem, Product, PurchaseRecord, ReportError, Seller, SellerId, SellerReport,
    SellerStat, Sku, TopProduct,
};
