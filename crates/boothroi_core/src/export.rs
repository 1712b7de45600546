//! Delimited export of the current scenario
//!
//! The layout is a fixed contract consumed by spreadsheets: a
//! `Category,Field,Value` header followed by sixteen rows in a stable order.
//! Fields are never quoted; no label contains a comma.

use std::fmt;

use jiff::civil::Date;

use crate::config::ReturnField;
use crate::format::{plain_number, to_fixed};
use crate::model::{CalculatedMetrics, Investment, Returns};

pub const EXPORT_HEADER: &str = "Category,Field,Value";

/// Rows per export, excluding the header
pub const EXPORT_ROW_COUNT: usize = 7 + 1 + 3 + 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportCategory {
    InvestmentCosts,
    ProjectedReturns,
    CalculatedMetrics,
}

impl ExportCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ExportCategory::InvestmentCosts => "Investment Costs",
            ExportCategory::ProjectedReturns => "Projected Returns",
            ExportCategory::CalculatedMetrics => "Calculated Metrics",
        }
    }
}

impl fmt::Display for ExportCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub category: ExportCategory,
    pub field: &'static str,
    pub value: String,
}

impl ExportRow {
    fn new(category: ExportCategory, field: &'static str, value: String) -> Self {
        Self {
            category,
            field,
            value,
        }
    }
}

impl fmt::Display for ExportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.category, self.field, self.value)
    }
}

/// Build the sixteen export rows.
///
/// Inputs are written as entered; derived metrics are fixed-point (one
/// decimal for new customers, two for money and ROI).
#[must_use]
pub fn export_rows(
    investment: &Investment,
    returns: &Returns,
    metrics: &CalculatedMetrics,
) -> Vec<ExportRow> {
    let costs = ExportCategory::InvestmentCosts;
    let projected = ExportCategory::ProjectedReturns;
    let derived = ExportCategory::CalculatedMetrics;

    let mut rows = Vec::with_capacity(EXPORT_ROW_COUNT);

    rows.extend(investment.values().map(|(field, value)| {
        ExportRow::new(costs, field.export_label(), plain_number(value))
    }));
    rows.push(ExportRow::new(
        costs,
        "Total Investment",
        plain_number(metrics.total_investment),
    ));

    rows.extend(ReturnField::ALL.iter().map(|field| {
        ExportRow::new(
            projected,
            field.export_label(),
            plain_number(returns.get(*field)),
        )
    }));

    rows.push(ExportRow::new(
        derived,
        "New Customers",
        to_fixed(metrics.new_customers, 1),
    ));
    rows.push(ExportRow::new(
        derived,
        "Total Lead Value",
        to_fixed(metrics.total_lead_value, 2),
    ));
    rows.push(ExportRow::new(
        derived,
        "Net Profit",
        to_fixed(metrics.net_profit, 2),
    ));
    rows.push(ExportRow::new(
        derived,
        "ROI (%)",
        to_fixed(metrics.roi, 2),
    ));
    rows.push(ExportRow::new(
        derived,
        "Cost Per Lead",
        to_fixed(metrics.cost_per_lead, 2),
    ));

    debug_assert_eq!(rows.len(), EXPORT_ROW_COUNT);
    rows
}

/// Join the header and rows with `\n` (no trailing newline)
#[must_use]
pub fn rows_to_csv(rows: &[ExportRow]) -> String {
    std::iter::once(EXPORT_HEADER.to_string())
        .chain(rows.iter().map(ToString::to_string))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Complete CSV document for a scenario
#[must_use]
pub fn export_csv(
    investment: &Investment,
    returns: &Returns,
    metrics: &CalculatedMetrics,
) -> String {
    rows_to_csv(&export_rows(investment, returns, metrics))
}

/// `roi-calculator-2025-03-14.csv`
#[must_use]
pub fn export_filename(date: Date) -> String {
    format!("roi-calculator-{date}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_uses_iso_date() {
        let date = jiff::civil::date(2025, 3, 4);
        assert_eq!(export_filename(date), "roi-calculator-2025-03-04.csv");
    }

    #[test]
    fn test_row_display() {
        let row = ExportRow::new(
            ExportCategory::CalculatedMetrics,
            "ROI (%)",
            "25.00".to_string(),
        );
        assert_eq!(row.to_string(), "Calculated Metrics,ROI (%),25.00");
    }
}
