//! Integration tests for the ROI metrics engine
//!
//! Tests are organized by topic:
//! - `calculator` - Derived metrics and the zero-denominator guards
//! - `benchmark` - Industry comparison and its directionality rules
//! - `export` - CSV layout, row order and number formatting
//! - `session` - Reactive recomputation and memoization

mod calculator;
