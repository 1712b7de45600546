use serde::{Deserialize, Serialize};

/// Figures derived from an [`Investment`](super::Investment) and
/// [`Returns`](super::Returns) pair.
///
/// Always produced whole by [`compute_metrics`](crate::calculator::compute_metrics);
/// values are unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedMetrics {
    pub total_investment: f64,
    pub new_customers: f64,
    pub total_lead_value: f64,
    pub net_profit: f64,
    /// Percentage, 0 when there is no investment
    pub roi: f64,
    /// 0 when no leads were generated
    pub cost_per_lead: f64,
}
