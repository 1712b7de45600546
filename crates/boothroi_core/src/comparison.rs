//! Benchmark comparator

use crate::config::BenchmarkTable;
use crate::model::{BenchmarkComparison, CalculatedMetrics, IndustryBenchmark};

/// Pair the actual metrics with an industry's averages.
///
/// Returns `None` when no benchmark is supplied. The benchmark's new-customer
/// figure is what `leads_generated` would convert to at the industry's
/// average rate. Malformed benchmark strings come through as NaN.
#[must_use]
pub fn compare_to_benchmark(
    metrics: &CalculatedMetrics,
    leads_generated: f64,
    benchmark: Option<&IndustryBenchmark>,
) -> Option<BenchmarkComparison> {
    let benchmark = benchmark?;
    let new_customers_benchmark = leads_generated * (benchmark.conversion_rate() / 100.0);

    Some(BenchmarkComparison {
        roi: metrics.roi,
        roi_benchmark: benchmark.roi(),
        new_customers: metrics.new_customers,
        new_customers_benchmark,
        cost_per_lead: metrics.cost_per_lead,
        cost_per_lead_benchmark: benchmark.cost_per_lead(),
    })
}

/// Resolve an optional industry selection against a table, then compare.
///
/// An unselected industry or one missing from the table yields `None`.
#[must_use]
pub fn compare_for_industry(
    metrics: &CalculatedMetrics,
    leads_generated: f64,
    industry: Option<&str>,
    table: &BenchmarkTable,
) -> Option<BenchmarkComparison> {
    let benchmark = industry.and_then(|name| table.get(name));
    compare_to_benchmark(metrics, leads_generated, benchmark)
}
