mod benchmark;
mod exhibitor;
mod investment;
mod metrics;
mod returns;

pub use benchmark::{BenchmarkComparison, IndustryBenchmark, ParsedBenchmark};
pub use exhibitor::ExhibitorInfo;
pub use investment::Investment;
pub use metrics::CalculatedMetrics;
pub use returns::Returns;
