//! Descriptors for every editable input
//!
//! Each field knows its display label, its export label, its unit and the
//! `(min, max, step)` range the slider enforces. The calculator itself never
//! consults these ranges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Slider bounds and granularity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value into the range
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Move `value` up by `steps` steps, staying within the range
    #[must_use]
    pub fn step_up(&self, value: f64, steps: u32) -> f64 {
        self.clamp(value + self.step * f64::from(steps))
    }

    /// Move `value` down by `steps` steps, staying within the range
    #[must_use]
    pub fn step_down(&self, value: f64, steps: u32) -> f64 {
        self.clamp(value - self.step * f64::from(steps))
    }

    /// Fill ratio (0.0 to 1.0) for rendering a slider
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            0.0
        } else {
            ((value - self.min) / span).clamp(0.0, 1.0)
        }
    }

    /// Number of distinct slider positions
    #[must_use]
    pub fn positions(&self) -> usize {
        if self.step <= 0.0 || self.max <= self.min {
            1
        } else {
            ((self.max - self.min) / self.step).floor() as usize + 1
        }
    }
}

/// How a value is presented next to its slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Currency,
    Percent,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvestmentField {
    BoothDesign,
    ShowServices,
    SpaceRental,
    Travel,
    Staffing,
    Promotions,
    Marketing,
}

impl InvestmentField {
    /// Display and export order
    pub const ALL: [InvestmentField; 7] = [
        InvestmentField::BoothDesign,
        InvestmentField::ShowServices,
        InvestmentField::SpaceRental,
        InvestmentField::Travel,
        InvestmentField::Staffing,
        InvestmentField::Promotions,
        InvestmentField::Marketing,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InvestmentField::BoothDesign => "Booth Design & Build",
            InvestmentField::ShowServices => "Show Services (Electricity, Rigging)",
            InvestmentField::SpaceRental => "Space Rental",
            InvestmentField::Travel => "Travel & Accommodation",
            InvestmentField::Staffing => "Staffing",
            InvestmentField::Promotions => "Promotions & Giveaways",
            InvestmentField::Marketing => "Pre-show Marketing",
        }
    }

    pub fn export_label(&self) -> &'static str {
        match self {
            InvestmentField::ShowServices => "Show Services",
            other => other.label(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            InvestmentField::BoothDesign => "booth-design",
            InvestmentField::ShowServices => "show-services",
            InvestmentField::SpaceRental => "space-rental",
            InvestmentField::Travel => "travel",
            InvestmentField::Staffing => "staffing",
            InvestmentField::Promotions => "promotions",
            InvestmentField::Marketing => "marketing",
        }
    }

    pub const fn range(&self) -> FieldRange {
        match self {
            InvestmentField::BoothDesign => FieldRange::new(0.0, 100_000.0, 1_000.0),
            InvestmentField::ShowServices => FieldRange::new(0.0, 20_000.0, 500.0),
            InvestmentField::SpaceRental => FieldRange::new(0.0, 50_000.0, 1_000.0),
            InvestmentField::Travel => FieldRange::new(0.0, 20_000.0, 500.0),
            InvestmentField::Staffing => FieldRange::new(0.0, 30_000.0, 500.0),
            InvestmentField::Promotions => FieldRange::new(0.0, 10_000.0, 250.0),
            InvestmentField::Marketing => FieldRange::new(0.0, 15_000.0, 500.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnField {
    LeadsGenerated,
    ConversionRate,
    Ltv,
}

impl ReturnField {
    pub const ALL: [ReturnField; 3] = [
        ReturnField::LeadsGenerated,
        ReturnField::ConversionRate,
        ReturnField::Ltv,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReturnField::LeadsGenerated => "Leads Generated",
            ReturnField::ConversionRate => "Lead Conversion Rate",
            ReturnField::Ltv => "Avg. Customer Lifetime Value (LTV)",
        }
    }

    pub fn export_label(&self) -> &'static str {
        match self {
            ReturnField::LeadsGenerated => "Leads Generated",
            ReturnField::ConversionRate => "Conversion Rate (%)",
            ReturnField::Ltv => "Customer Lifetime Value (LTV)",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ReturnField::LeadsGenerated => "leads",
            ReturnField::ConversionRate => "conversion-rate",
            ReturnField::Ltv => "ltv",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            ReturnField::LeadsGenerated => Unit::Count,
            ReturnField::ConversionRate => Unit::Percent,
            ReturnField::Ltv => Unit::Currency,
        }
    }

    pub const fn range(&self) -> FieldRange {
        match self {
            ReturnField::LeadsGenerated => FieldRange::new(0.0, 1_000.0, 10.0),
            ReturnField::ConversionRate => FieldRange::new(0.0, 100.0, 1.0),
            ReturnField::Ltv => FieldRange::new(0.0, 50_000.0, 500.0),
        }
    }
}

/// Any of the ten slider-backed inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    Investment(InvestmentField),
    Returns(ReturnField),
}

impl InputField {
    /// Investment fields first, then returns, matching the on-screen order
    pub const ALL: [InputField; 10] = [
        InputField::Investment(InvestmentField::BoothDesign),
        InputField::Investment(InvestmentField::ShowServices),
        InputField::Investment(InvestmentField::SpaceRental),
        InputField::Investment(InvestmentField::Travel),
        InputField::Investment(InvestmentField::Staffing),
        InputField::Investment(InvestmentField::Promotions),
        InputField::Investment(InvestmentField::Marketing),
        InputField::Returns(ReturnField::LeadsGenerated),
        InputField::Returns(ReturnField::ConversionRate),
        InputField::Returns(ReturnField::Ltv),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InputField::Investment(f) => f.label(),
            InputField::Returns(f) => f.label(),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            InputField::Investment(f) => f.key(),
            InputField::Returns(f) => f.key(),
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            InputField::Investment(_) => Unit::Currency,
            InputField::Returns(f) => f.unit(),
        }
    }

    pub fn range(&self) -> FieldRange {
        match self {
            InputField::Investment(f) => f.range(),
            InputField::Returns(f) => f.range(),
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InputField {
    type Err = FieldError;

    /// Accepts the kebab-case key (`booth-design`, `leads`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        InputField::ALL
            .into_iter()
            .find(|field| field.key() == wanted)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}
