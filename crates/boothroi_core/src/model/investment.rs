//! Exhibition cost inputs

use serde::{Deserialize, Serialize};

use crate::config::InvestmentField;

/// Costs of exhibiting at a single show.
///
/// Each field is edited independently; the total is always derived and never
/// stored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Investment {
    pub booth_design: f64,
    pub show_services: f64,
    pub space_rental: f64,
    pub travel: f64,
    pub staffing: f64,
    pub promotions: f64,
    pub marketing: f64,
}

impl Default for Investment {
    fn default() -> Self {
        Self {
            booth_design: 25_000.0,
            show_services: 5_000.0,
            space_rental: 10_000.0,
            travel: 4_000.0,
            staffing: 6_000.0,
            promotions: 2_000.0,
            marketing: 3_000.0,
        }
    }
}

impl Investment {
    /// All-zero costs
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            booth_design: 0.0,
            show_services: 0.0,
            space_rental: 0.0,
            travel: 0.0,
            staffing: 0.0,
            promotions: 0.0,
            marketing: 0.0,
        }
    }

    #[must_use]
    pub fn get(&self, field: InvestmentField) -> f64 {
        match field {
            InvestmentField::BoothDesign => self.booth_design,
            InvestmentField::ShowServices => self.show_services,
            InvestmentField::SpaceRental => self.space_rental,
            InvestmentField::Travel => self.travel,
            InvestmentField::Staffing => self.staffing,
            InvestmentField::Promotions => self.promotions,
            InvestmentField::Marketing => self.marketing,
        }
    }

    pub fn set(&mut self, field: InvestmentField, value: f64) {
        let slot = match field {
            InvestmentField::BoothDesign => &mut self.booth_design,
            InvestmentField::ShowServices => &mut self.show_services,
            InvestmentField::SpaceRental => &mut self.space_rental,
            InvestmentField::Travel => &mut self.travel,
            InvestmentField::Staffing => &mut self.staffing,
            InvestmentField::Promotions => &mut self.promotions,
            InvestmentField::Marketing => &mut self.marketing,
        };
        *slot = value;
    }

    /// Copy with one field replaced
    #[must_use]
    pub fn with(mut self, field: InvestmentField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// Field values in display/export order
    pub fn values(&self) -> impl Iterator<Item = (InvestmentField, f64)> + '_ {
        InvestmentField::ALL.iter().map(|&field| (field, self.get(field)))
    }
}
