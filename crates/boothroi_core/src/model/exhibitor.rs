use serde::{Deserialize, Serialize};

use crate::validation::{validate_email, validate_phone};

/// Contact details typed into the exhibitor form.
///
/// Purely informational: nothing here feeds the metrics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhibitorInfo {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

impl ExhibitorInfo {
    /// Advisory message for the email field, if any
    #[must_use]
    pub fn email_error(&self) -> Option<&'static str> {
        validate_email(&self.email)
    }

    /// Advisory message for the phone field, if any
    #[must_use]
    pub fn phone_error(&self) -> Option<&'static str> {
        validate_phone(&self.phone)
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.email_error().is_none() && self.phone_error().is_none()
    }
}
