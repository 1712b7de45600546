//! Static configuration: input field descriptors and the benchmark table
//!
//! Both are read-only reference data. The slider ranges live beside the
//! fields they constrain, and the benchmark table is the single source of
//! industry averages used by the comparator.

pub mod benchmarks;
pub mod descriptors;

pub use benchmarks::{BenchmarkTable, SELECTABLE_INDUSTRIES};
pub use descriptors::{FieldRange, InputField, InvestmentField, ReturnField, Unit};
