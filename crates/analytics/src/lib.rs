//! # Sales Analytics Engine
//!
//! This crate turns a fully loaded set of sellers, products and purchase records
//! into a ranked, per-seller performance report.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O. It depends only on `core-types`, `configuration` and
//!   `strategies`.
//! - **Stateless Calculation:** The `SalesAnalyzer` holds settings only. Every call
//!   builds its own accumulators and lookup indices and drops them on return, so
//!   independent callers can share one analyzer freely.
//!
//! ## Public API
//!
//! - `SalesAnalyzer` / `analyze`: The aggregation and ranking logic.
//! - `AnalysisStrategies`: The revenue and bonus slots a run is given.
//! - `SellerReport` / `TopProduct`: The output records.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

pub mod engine;
pub mod error;
pub mod report;
pub mod strategy_set;

pub use engine::{analyze, SalesAnalyzer};
pub use error::AnalyticsError;
pub use report::{SellerReport, TopProduct};
pub use strategy_set::AnalysisStrategies;
