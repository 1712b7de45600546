//! Metrics calculator
//!
//! Turns the cost inputs and return assumptions into the derived figures
//! shown to the user. The computation is total: every finite input yields a
//! finite output, and the only special cases are the two zero-denominator
//! guards on ROI and cost per lead.

use crate::model::{CalculatedMetrics, Investment, Returns};

/// Sum of all seven cost fields
#[must_use]
pub fn total_investment(investment: &Investment) -> f64 {
    investment.values().map(|(_, value)| value).sum()
}

/// Derive every metric from scratch.
///
/// Negative or out-of-range inputs are neither rejected nor clamped. Values
/// are returned unrounded; rounding belongs to presentation.
#[must_use]
pub fn compute_metrics(investment: &Investment, returns: &Returns) -> CalculatedMetrics {
    let total_investment = total_investment(investment);
    let new_customers = returns.leads_generated * (returns.conversion_rate / 100.0);
    let total_lead_value = new_customers * returns.ltv;
    let net_profit = total_lead_value - total_investment;

    let roi = if total_investment > 0.0 {
        (net_profit / total_investment) * 100.0
    } else {
        0.0
    };

    let cost_per_lead = if returns.leads_generated > 0.0 {
        total_investment / returns.leads_generated
    } else {
        0.0
    };

    CalculatedMetrics {
        total_investment,
        new_customers,
        total_lead_value,
        net_profit,
        roi,
        cost_per_lead,
    }
}
