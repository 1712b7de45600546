//! Number rendering shared by the export and the front-end
//!
//! `to_fixed` rounds exact ties away from zero (`0.25` to one decimal is
//! `0.3`). Rust's `{:.N}` rounds such ties to even, so ties are detected
//! here before falling back to the standard formatter.

/// Digits after the point needed to expand any double >= 2^-8 exactly
const EXACT_DIGITS: usize = 60;

/// Render `value` with exactly `decimals` fractional digits.
///
/// Non-finite values render as `NaN`, `Infinity` or `-Infinity` so they
/// stay conspicuous.
#[must_use]
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if let Some(text) = non_finite(value) {
        return text.to_string();
    }
    let value = normalize_zero(value);

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some(dot) = exact.find('.') else {
        return format!("{:.*}", decimals, value);
    };

    let cut = dot + 1 + decimals;
    let tail = &exact[cut..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", decimals, value);
    }

    let kept = if decimals == 0 {
        &exact[..dot]
    } else {
        &exact[..cut]
    };
    let rounded = increment_last_digit(kept);
    if value < 0.0 {
        format!("-{rounded}")
    } else {
        rounded
    }
}

/// Render an input value the way it was entered: `25000`, `12.5`
#[must_use]
pub fn plain_number(value: f64) -> String {
    match non_finite(value) {
        Some(text) => text.to_string(),
        None => normalize_zero(value).to_string(),
    }
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// `-0.0` prints as `-0`; collapse it to `0`
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Add one unit in the last place of a plain decimal string
fn increment_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;
    for b in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                carry = false;
            }
        }
    }
    let mut out = String::from_utf8(bytes).unwrap_or_default();
    if carry {
        out.insert(0, '1');
    }
    out
}
