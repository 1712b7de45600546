//! Advisory validation for exhibitor contact fields
//!
//! Messages are for display only. Nothing here blocks recomputation or
//! export, and an empty field is always acceptable.

use std::sync::LazyLock;

use regex::Regex;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const INVALID_PHONE: &str = "Please enter a valid phone number (at least 10 digits)";

/// Minimum digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s\-()+.]+$").expect("valid phone regex"));

pub fn validate_email(email: &str) -> Option<&'static str> {
    if email.is_empty() || EMAIL_RE.is_match(email) {
        None
    } else {
        Some(INVALID_EMAIL)
    }
}

/// Accepts `(123) 456-7890`, `123-456-7890`, `+1 555.123.4567` and the like
pub fn validate_phone(phone: &str) -> Option<&'static str> {
    if phone.is_empty() {
        return None;
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if PHONE_RE.is_match(phone) && digits >= MIN_PHONE_DIGITS {
        None
    } else {
        Some(INVALID_PHONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert_eq!(validate_email(""), None);
        assert_eq!(validate_email("sam@example.com"), None);
        assert_eq!(validate_email("a.b@c.co.uk"), None);
        assert_eq!(validate_email("sam@example"), Some(INVALID_EMAIL));
        assert_eq!(validate_email("sam example@x.com"), Some(INVALID_EMAIL));
        assert_eq!(validate_email("@example.com"), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_phone() {
        assert_eq!(validate_phone(""), None);
        assert_eq!(validate_phone("(123) 456-7890"), None);
        assert_eq!(validate_phone("+1 555.123.4567"), None);
        assert_eq!(validate_phone("1234567890"), None);
        assert_eq!(validate_phone("123-4567"), Some(INVALID_PHONE));
        assert_eq!(validate_phone("555-CALL-NOW1"), Some(INVALID_PHONE));
    }
}
