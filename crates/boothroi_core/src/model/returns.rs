//! Expected-return assumptions

use serde::{Deserialize, Serialize};

use crate::config::ReturnField;

/// Projected outcome of the show.
///
/// `conversion_rate` is a percentage (10.0 means 10%) and is not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Returns {
    pub leads_generated: f64,
    pub conversion_rate: f64,
    pub ltv: f64,
}

impl Default for Returns {
    fn default() -> Self {
        Self {
            leads_generated: 150.0,
            conversion_rate: 10.0,
            ltv: 5_000.0,
        }
    }
}

impl Returns {
    #[must_use]
    pub fn new(leads_generated: f64, conversion_rate: f64, ltv: f64) -> Self {
        Self {
            leads_generated,
            conversion_rate,
            ltv,
        }
    }

    #[must_use]
    pub fn get(&self, field: ReturnField) -> f64 {
        match field {
            ReturnField::LeadsGenerated => self.leads_generated,
            ReturnField::ConversionRate => self.conversion_rate,
            ReturnField::Ltv => self.ltv,
        }
    }

    pub fn set(&mut self, field: ReturnField, value: f64) {
        match field {
            ReturnField::LeadsGenerated => self.leads_generated = value,
            ReturnField::ConversionRate => self.conversion_rate = value,
            ReturnField::Ltv => self.ltv = value,
        }
    }

    #[must_use]
    pub fn with(mut self, field: ReturnField, value: f64) -> Self {
        self.set(field, value);
        self
    }
}
