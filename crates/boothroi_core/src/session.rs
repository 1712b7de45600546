//! Reactive calculator session
//!
//! A `Session` owns the two input records plus the industry selection and
//! keeps the derived records current. Every mutation recomputes
//! synchronously in dependency order: metrics first, then the benchmark
//! comparison built from those metrics. Derived values are memoized on an
//! input version that only moves when a value actually changes, so repeated
//! reads and no-op edits cost nothing.

use std::convert::Infallible;

use crate::cache::CachedValue;
use crate::calculator::compute_metrics;
use crate::comparison::compare_for_industry;
use crate::config::{BenchmarkTable, InputField, InvestmentField, ReturnField};
use crate::export::{ExportRow, export_csv, export_rows};
use crate::model::{
    BenchmarkComparison, CalculatedMetrics, ExhibitorInfo, IndustryBenchmark, Investment, Returns,
};

#[derive(Debug, Clone)]
pub struct Session {
    investment: Investment,
    returns: Returns,
    industry: Option<String>,
    exhibitor: ExhibitorInfo,
    table: BenchmarkTable,

    /// Bumped when investment or returns change
    inputs_version: u64,
    /// Bumped when anything the comparison depends on changes
    comparison_version: u64,

    metrics: CachedValue<CalculatedMetrics>,
    comparison: CachedValue<Option<BenchmarkComparison>>,
    recompute_count: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BenchmarkTable::builtin())
    }
}

impl Session {
    /// Start a session with the default inputs and no industry selected
    #[must_use]
    pub fn new(table: BenchmarkTable) -> Self {
        Self::with_inputs(Investment::default(), Returns::default(), table)
    }

    #[must_use]
    pub fn with_inputs(investment: Investment, returns: Returns, table: BenchmarkTable) -> Self {
        let mut session = Self {
            investment,
            returns,
            industry: None,
            exhibitor: ExhibitorInfo::default(),
            table,
            inputs_version: 0,
            comparison_version: 0,
            metrics: CachedValue::new(),
            comparison: CachedValue::new(),
            recompute_count: 0,
        };
        session.refresh();
        session
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    pub fn investment(&self) -> &Investment {
        &self.investment
    }

    pub fn returns(&self) -> &Returns {
        &self.returns
    }

    /// Current value of any slider-backed input
    pub fn input(&self, field: InputField) -> f64 {
        match field {
            InputField::Investment(f) => self.investment.get(f),
            InputField::Returns(f) => self.returns.get(f),
        }
    }

    /// Returns `true` if the value changed
    pub fn set_investment_field(&mut self, field: InvestmentField, value: f64) -> bool {
        let next = self.investment.with(field, value);
        self.set_investment(next)
    }

    /// Returns `true` if the value changed
    pub fn set_return_field(&mut self, field: ReturnField, value: f64) -> bool {
        let next = self.returns.with(field, value);
        self.set_returns(next)
    }

    pub fn set_input(&mut self, field: InputField, value: f64) -> bool {
        match field {
            InputField::Investment(f) => self.set_investment_field(f, value),
            InputField::Returns(f) => self.set_return_field(f, value),
        }
    }

    /// Move an input by whole slider steps, clamped to its range
    pub fn step_input(&mut self, field: InputField, steps: i32) -> bool {
        let range = field.range();
        let current = self.input(field);
        let next = if steps >= 0 {
            range.step_up(current, steps.unsigned_abs())
        } else {
            range.step_down(current, steps.unsigned_abs())
        };
        self.set_input(field, next)
    }

    pub fn set_investment(&mut self, investment: Investment) -> bool {
        if same_investment(&self.investment, &investment) {
            return false;
        }
        self.investment = investment;
        self.inputs_changed();
        true
    }

    pub fn set_returns(&mut self, returns: Returns) -> bool {
        if same_returns(&self.returns, &returns) {
            return false;
        }
        self.returns = returns;
        self.inputs_changed();
        true
    }

    // =========================================================================
    // Industry selection
    // =========================================================================

    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref()
    }

    /// Select an industry by name. Names missing from the table are accepted
    /// and simply produce no comparison.
    pub fn select_industry(&mut self, industry: impl Into<String>) -> bool {
        let industry = industry.into();
        if self.industry.as_deref() == Some(industry.as_str()) {
            return false;
        }
        tracing::debug!(industry = %industry, "industry selected");
        self.industry = Some(industry);
        self.selection_changed();
        true
    }

    pub fn clear_industry(&mut self) -> bool {
        if self.industry.take().is_none() {
            return false;
        }
        self.selection_changed();
        true
    }

    /// Benchmark entry for the selected industry, if the table has one
    pub fn selected_benchmark(&self) -> Option<&IndustryBenchmark> {
        self.industry().and_then(|name| self.table.get(name))
    }

    pub fn benchmark_table(&self) -> &BenchmarkTable {
        &self.table
    }

    pub fn set_benchmark_table(&mut self, table: BenchmarkTable) {
        self.table = table;
        self.selection_changed();
    }

    // =========================================================================
    // Exhibitor details (never affect the metrics)
    // =========================================================================

    pub fn exhibitor(&self) -> &ExhibitorInfo {
        &self.exhibitor
    }

    pub fn exhibitor_mut(&mut self) -> &mut ExhibitorInfo {
        &mut self.exhibitor
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    /// Metrics for the latest inputs
    pub fn metrics(&self) -> CalculatedMetrics {
        self.metrics
            .get(self.inputs_version)
            .copied()
            .unwrap_or_else(|| compute_metrics(&self.investment, &self.returns))
    }

    /// Comparison for the latest inputs and selection; `None` when no
    /// benchmark applies
    pub fn comparison(&self) -> Option<BenchmarkComparison> {
        match self.comparison.get(self.comparison_version) {
            Some(cached) => *cached,
            None => compare_for_industry(
                &self.metrics(),
                self.returns.leads_generated,
                self.industry(),
                &self.table,
            ),
        }
    }

    pub fn export_rows(&self) -> Vec<ExportRow> {
        export_rows(&self.investment, &self.returns, &self.metrics())
    }

    pub fn export_csv(&self) -> String {
        export_csv(&self.investment, &self.returns, &self.metrics())
    }

    /// How many times metrics were actually recomputed
    pub fn recompute_count(&self) -> u64 {
        self.recompute_count
    }

    fn inputs_changed(&mut self) {
        self.inputs_version += 1;
        self.comparison_version += 1;
        self.refresh();
    }

    fn selection_changed(&mut self) {
        self.comparison_version += 1;
        self.refresh();
    }

    /// Bring every derived value up to date, metrics before comparison
    fn refresh(&mut self) {
        let Self {
            investment,
            returns,
            industry,
            table,
            metrics,
            comparison,
            recompute_count,
            inputs_version,
            comparison_version,
            ..
        } = self;

        let Ok(&latest) = metrics.get_or_compute(*inputs_version, || {
            *recompute_count += 1;
            Ok::<_, Infallible>(compute_metrics(investment, returns))
        });

        let _ = comparison.get_or_compute(*comparison_version, || {
            Ok::<_, Infallible>(compare_for_industry(
                &latest,
                returns.leads_generated,
                industry.as_deref(),
                table,
            ))
        });

        tracing::trace!(
            inputs_version = *inputs_version,
            roi = latest.roi,
            "session refreshed"
        );
    }
}

fn same_investment(a: &Investment, b: &Investment) -> bool {
    a.values()
        .zip(b.values())
        .all(|((_, x), (_, y))| x.to_bits() == y.to_bits())
}

fn same_returns(a: &Returns, b: &Returns) -> bool {
    ReturnField::ALL
        .iter()
        .all(|&field| a.get(field).to_bits() == b.get(field).to_bits())
}
