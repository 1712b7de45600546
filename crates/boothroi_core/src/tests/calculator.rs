//! Tests for the metrics calculator
//!
//! These tests verify that:
//! - The total is the exact sum of every cost line, in any order
//! - ROI and cost per lead are 0 instead of NaN/Infinity on zero denominators
//! - Zero conversion or zero LTV flows through without special casing
//! - Repeated calls are bit-identical

use crate::calculator::{compute_metrics, total_investment};
use crate::config::InvestmentField;
use crate::model::{Investment, Returns};

fn investment_totaling_60k() -> Investment {
    Investment {
        booth_design: 25_000.0,
        show_services: 5_000.0,
        space_rental: 12_000.0,
        travel: 6_000.0,
        staffing: 6_500.0,
        promotions: 2_500.0,
        marketing: 3_000.0,
    }
}

#[test]
fn test_reference_scenario() {
    let investment = investment_totaling_60k();
    let returns = Returns::new(150.0, 10.0, 5_000.0);

    let m = compute_metrics(&investment, &returns);

    assert_eq!(m.total_investment, 60_000.0);
    assert!((m.new_customers - 15.0).abs() < 1e-9);
    assert!((m.total_lead_value - 75_000.0).abs() < 1e-6);
    assert!((m.net_profit - 15_000.0).abs() < 1e-6);
    assert!((m.roi - 25.0).abs() < 1e-9, "roi was {}", m.roi);
    assert!((m.cost_per_lead - 400.0).abs() < 1e-9);
}

#[test]
fn test_total_is_order_independent() {
    let investment = investment_totaling_60k();
    let forward = total_investment(&investment);

    let reversed: f64 = InvestmentField::ALL
        .iter()
        .rev()
        .map(|&f| investment.get(f))
        .sum();
    let shuffled = investment.marketing
        + investment.booth_design
        + investment.travel
        + investment.show_services
        + investment.promotions
        + investment.space_rental
        + investment.staffing;

    assert_eq!(forward, reversed);
    assert_eq!(forward, shuffled);
    assert_eq!(compute_metrics(&investment, &Returns::default()).total_investment, forward);
}

#[test]
fn test_zero_investment_never_divides() {
    for leads in [0.0, 1.0, 500.0] {
        let m = compute_metrics(&Investment::zero(), &Returns::new(leads, 25.0, 10_000.0));
        assert_eq!(m.roi, 0.0);
        assert!(m.roi.is_finite());
        assert_eq!(m.cost_per_lead, 0.0);
    }
}

#[test]
fn test_zero_leads() {
    let investment = Investment::default();
    for (rate, ltv) in [(0.0, 0.0), (10.0, 5_000.0), (100.0, 50_000.0)] {
        let m = compute_metrics(&investment, &Returns::new(0.0, rate, ltv));
        assert_eq!(m.new_customers, 0.0);
        assert_eq!(m.total_lead_value, 0.0);
        assert_eq!(m.net_profit, -55_000.0);
        assert_eq!(m.roi, -100.0);
        assert_eq!(m.cost_per_lead, 0.0);
    }
}

#[test]
fn test_zero_conversion_loses_whole_investment() {
    let m = compute_metrics(&Investment::default(), &Returns::new(150.0, 0.0, 5_000.0));
    assert_eq!(m.new_customers, 0.0);
    assert_eq!(m.net_profit, -m.total_investment);
    assert_eq!(m.roi, -100.0);
    assert!(m.cost_per_lead > 0.0);
}

#[test]
fn test_zero_ltv() {
    let m = compute_metrics(&Investment::default(), &Returns::new(150.0, 10.0, 0.0));
    assert_eq!(m.total_lead_value, 0.0);
    assert_eq!(m.roi, -100.0);
}

#[test]
fn test_out_of_range_inputs_are_not_clamped() {
    let mut investment = Investment::default();
    investment.booth_design = 250_000.0; // above the slider max
    let returns = Returns::new(2_000.0, 150.0, 5_000.0); // >100% conversion

    let m = compute_metrics(&investment, &returns);
    assert_eq!(m.total_investment, 280_000.0);
    assert_eq!(m.new_customers, 3_000.0);
    assert_eq!(m.total_lead_value, 15_000_000.0);
}

#[test]
fn test_values_are_not_rounded() {
    let m = compute_metrics(&Investment::default(), &Returns::new(7.0, 3.0, 1_000.0));
    // 7 leads at 3% is 0.21 customers, not 0.2
    assert!((m.new_customers - 0.21).abs() < 1e-12);
    assert!((m.cost_per_lead - 55_000.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_referentially_transparent() {
    let investment = investment_totaling_60k();
    let returns = Returns::new(333.0, 7.5, 4_321.0);
    let a = compute_metrics(&investment, &returns);
    let b = compute_metrics(&investment, &returns);
    assert_eq!(a.roi.to_bits(), b.roi.to_bits());
    assert_eq!(a.cost_per_lead.to_bits(), b.cost_per_lead.to_bits());
    assert_eq!(a, b);
}
