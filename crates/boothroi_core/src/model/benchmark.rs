//! Industry reference figures and the comparison derived from them

use serde::{Deserialize, Serialize};

use crate::error::{BenchmarkError, BenchmarkField};

/// Industry averages as published, e.g. `"185%"` or `"$8,500"`.
///
/// The strings are kept verbatim and parsed on demand. Two formats exist:
/// percentages (trailing `%`) and currency (`$` prefix, `,` separators).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    pub avg_roi: String,
    pub avg_conversion_rate: String,
    pub avg_ltv: String,
    pub avg_cost_per_lead: String,
}

/// Numeric form of an [`IndustryBenchmark`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedBenchmark {
    pub avg_roi: f64,
    pub avg_conversion_rate: f64,
    pub avg_ltv: f64,
    pub avg_cost_per_lead: f64,
}

impl IndustryBenchmark {
    pub fn new(
        avg_roi: impl Into<String>,
        avg_conversion_rate: impl Into<String>,
        avg_ltv: impl Into<String>,
        avg_cost_per_lead: impl Into<String>,
    ) -> Self {
        Self {
            avg_roi: avg_roi.into(),
            avg_conversion_rate: avg_conversion_rate.into(),
            avg_ltv: avg_ltv.into(),
            avg_cost_per_lead: avg_cost_per_lead.into(),
        }
    }

    /// Average ROI in percent. NaN when the source string is malformed.
    #[must_use]
    pub fn roi(&self) -> f64 {
        parse_percentage(&self.avg_roi).unwrap_or(f64::NAN)
    }

    /// Average conversion rate in percent. NaN when malformed.
    #[must_use]
    pub fn conversion_rate(&self) -> f64 {
        parse_percentage(&self.avg_conversion_rate).unwrap_or(f64::NAN)
    }

    /// Average customer lifetime value. NaN when malformed.
    #[must_use]
    pub fn ltv(&self) -> f64 {
        parse_currency(&self.avg_ltv).unwrap_or(f64::NAN)
    }

    /// Average cost per lead. NaN when malformed.
    #[must_use]
    pub fn cost_per_lead(&self) -> f64 {
        parse_currency(&self.avg_cost_per_lead).unwrap_or(f64::NAN)
    }

    /// Parse every field, failing on the first malformed one.
    ///
    /// Used when a table is loaded from outside the crate so bad data is
    /// rejected up front instead of showing up as NaN later.
    pub fn parsed(&self, industry: &str) -> Result<ParsedBenchmark, BenchmarkError> {
        let field = |field: BenchmarkField, raw: &str, value: Option<f64>| {
            value.ok_or_else(|| BenchmarkError::MalformedField {
                industry: industry.to_string(),
                field,
                value: raw.to_string(),
            })
        };

        Ok(ParsedBenchmark {
            avg_roi: field(
                BenchmarkField::Roi,
                &self.avg_roi,
                parse_percentage(&self.avg_roi),
            )?,
            avg_conversion_rate: field(
                BenchmarkField::ConversionRate,
                &self.avg_conversion_rate,
                parse_percentage(&self.avg_conversion_rate),
            )?,
            avg_ltv: field(BenchmarkField::Ltv, &self.avg_ltv, parse_currency(&self.avg_ltv))?,
            avg_cost_per_lead: field(
                BenchmarkField::CostPerLead,
                &self.avg_cost_per_lead,
                parse_currency(&self.avg_cost_per_lead),
            )?,
        })
    }
}

/// Parse `"185%"` (or a bare `"185"`) into `185.0`
pub fn parse_percentage(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    parse_finite(number)
}

/// Parse `"$8,500"` (or `"8500"`) into `8500.0`
pub fn parse_currency(raw: &str) -> Option<f64> {
    let number: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    parse_finite(number.trim())
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Actual figures paired with their industry counterparts.
///
/// `new_customers_benchmark` is what the current lead count would yield at
/// the industry's average conversion rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub roi: f64,
    pub roi_benchmark: f64,
    pub new_customers: f64,
    pub new_customers_benchmark: f64,
    pub cost_per_lead: f64,
    pub cost_per_lead_benchmark: f64,
}

impl BenchmarkComparison {
    /// Higher is better; a tie counts as better
    #[must_use]
    pub fn roi_is_better(&self) -> bool {
        self.roi >= self.roi_benchmark
    }

    /// Higher is better; a tie counts as better
    #[must_use]
    pub fn new_customers_is_better(&self) -> bool {
        self.new_customers >= self.new_customers_benchmark
    }

    /// Lower is better; a tie counts as better
    #[must_use]
    pub fn cost_per_lead_is_better(&self) -> bool {
        self.cost_per_lead <= self.cost_per_lead_benchmark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("185%"), Some(185.0));
        assert_eq!(parse_percentage(" 12.5 % "), Some(12.5));
        assert_eq!(parse_percentage("8"), Some(8.0));
        assert_eq!(parse_percentage("abc%"), None);
        assert_eq!(parse_percentage(""), None);
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$8,500"), Some(8_500.0));
        assert_eq!(parse_currency("$125"), Some(125.0));
        assert_eq!(parse_currency("$1,234,567.50"), Some(1_234_567.5));
        assert_eq!(parse_currency("$"), None);
        assert_eq!(parse_currency("12 dollars"), None);
    }

    #[test]
    fn test_malformed_fields_are_nan_not_zero() {
        let bench = IndustryBenchmark::new("lots", "12%", "$8,500", "cheap");
        assert!(bench.roi().is_nan());
        assert!(bench.cost_per_lead().is_nan());
        assert_eq!(bench.conversion_rate(), 12.0);
        assert_eq!(bench.ltv(), 8_500.0);
    }

    #[test]
    fn test_parsed_reports_first_bad_field() {
        let bench = IndustryBenchmark::new("185%", "twelve", "$8,500", "$125");
        let err = bench.parsed("Technology").unwrap_err();
        match err {
            BenchmarkError::MalformedField {
                industry,
                field,
                value,
            } => {
                assert_eq!(industry, "Technology");
                assert_eq!(field, BenchmarkField::ConversionRate);
                assert_eq!(value, "twelve");
            }
        }
    }

    #[test]
    fn test_ties_count_as_better() {
        let cmp = BenchmarkComparison {
            roi: 185.0,
            roi_benchmark: 185.0,
            new_customers: 18.0,
            new_customers_benchmark: 18.0,
            cost_per_lead: 125.0,
            cost_per_lead_benchmark: 125.0,
        };
        assert!(cmp.roi_is_better());
        assert!(cmp.new_customers_is_better());
        assert!(cmp.cost_per_lead_is_better());
    }
}
