//! Trade-show ROI metrics engine
//!
//! This crate derives the financial picture of exhibiting at a trade show
//! from two small input records:
//! - [`Investment`]: seven cost lines (booth, services, space, travel, ...)
//! - [`Returns`]: leads generated, conversion rate and customer lifetime value
//!
//! From those it computes [`CalculatedMetrics`] (total investment, new
//! customers, lead value, net profit, ROI, cost per lead), compares them
//! against industry averages, and renders a fixed-layout CSV export.
//!
//! # Session
//!
//! [`Session`] is the stateful entry point for interactive front-ends:
//!
//! ```ignore
//! use boothroi_core::{Session, config::InvestmentField};
//!
//! let mut session = Session::default();
//! session.set_investment_field(InvestmentField::Travel, 6_000.0);
//! session.select_industry("Technology");
//!
//! let metrics = session.metrics();
//! if let Some(cmp) = session.comparison() {
//!     println!("ROI {:.1}% vs {:.1}%", cmp.roi, cmp.roi_benchmark);
//! }
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod cache;
pub mod calculator;
pub mod comparison;
pub mod error;
pub mod export;
pub mod format;
pub mod session;
pub mod validation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use calculator::compute_metrics;
pub use comparison::{compare_for_industry, compare_to_benchmark};
pub use config::{BenchmarkTable, InputField, InvestmentField, ReturnField};
pub use model::{
    BenchmarkComparison, CalculatedMetrics, ExhibitorInfo, IndustryBenchmark, Investment, Returns,
};
pub use session::Session;
