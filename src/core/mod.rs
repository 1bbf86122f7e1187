//! Core pipeline module
//!
//! The aggregation pipeline, decomposed into four sequential stages:
//! - `validator` - dataset shape and strategy presence checks
//! - `indexer` - lookup index construction for sellers and products
//! - `accumulator` - the fold over purchase records
//! - `ranker` - profit ranking, bonuses, and report finalization
//! - `engine` - orchestration of the four stages

pub mod accumulator;
pub mod engine;
pub mod indexer;
pub mod ranker;
pub mod validator;

pub use engine::ReportEngine;
pub use ranker::TOP_PRODUCTS_LIMIT;
