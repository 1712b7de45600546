//! Display formatting for the terminal views

use boothroi_core::format::to_fixed;

/// Which side of a benchmark counts as good
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    HigherIsBetter,
    LowerIsBetter,
}

/// Insert thousands separators into a run of ASCII digits
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format a currency value, dropping the cents when they are zero
/// (`$55,000`, `-$54,750`, `$366.67`)
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let cents = (value.abs() * 100.0).round();
    let dollars = (cents / 100.0).trunc();
    let remainder = cents - dollars * 100.0;
    let sign = if value < 0.0 && cents > 0.0 { "-" } else { "" };

    let dollars = group_thousands(&format!("{dollars:.0}"));
    if remainder == 0.0 {
        format!("{sign}${dollars}")
    } else {
        format!("{sign}${dollars}.{remainder:02.0}")
    }
}

/// Format a currency value that always shows two decimals (`$366.67`, `$125.00`)
pub fn format_currency_cents(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let fixed = to_fixed(value.abs(), 2);
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{frac}", group_thousands(whole))
}

/// ROI with one decimal. Non-finite values show as `0.0%`.
pub fn format_roi(roi: f64) -> String {
    if roi.is_finite() {
        format!("{}%", to_fixed(roi, 1))
    } else {
        "0.0%".to_string()
    }
}

/// Percentage for benchmark figures; malformed values show as `n/a`
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{}%", to_fixed(value, 1))
    } else {
        "n/a".to_string()
    }
}

pub fn format_count(value: f64) -> String {
    if value.is_finite() {
        to_fixed(value, 1)
    } else {
        "n/a".to_string()
    }
}

/// Plain integer with separators, used for slider counts (`1,000`)
pub fn format_whole(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&format!("{:.0}", value.abs())))
}

/// Relative distance from a benchmark, e.g. `✓ 12.5% above benchmark`.
///
/// Returns `n/a` when the benchmark is zero or either side is not finite.
pub fn benchmark_delta(actual: f64, benchmark: f64, preference: Preference) -> String {
    if benchmark == 0.0 || !benchmark.is_finite() || !actual.is_finite() {
        return "n/a".to_string();
    }
    let ratio = actual / benchmark;
    let above = |pct: f64| format!("{}% above benchmark", to_fixed(pct, 1));
    let below = |pct: f64| format!("{}% below benchmark", to_fixed(pct, 1));

    match preference {
        Preference::HigherIsBetter if actual >= benchmark => {
            format!("✓ {}", above((ratio - 1.0) * 100.0))
        }
        Preference::HigherIsBetter => format!("⚠ {}", below((1.0 - ratio) * 100.0)),
        Preference::LowerIsBetter if actual <= benchmark => {
            format!("✓ {}", below((1.0 - ratio) * 100.0))
        }
        Preference::LowerIsBetter => format!("⚠ {}", above((ratio - 1.0) * 100.0)),
    }
}
