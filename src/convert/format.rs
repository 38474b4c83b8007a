//! Number formatting for display
//!
//! Renders results the way the dashboard shows them: grouped thousands,
//! up to eight fraction digits, no trailing zeros.

/// Maximum fraction digits kept in a formatted result
pub const MAX_FRACTION_DIGITS: usize = 8;

/// Format a number for display (`1234567.5` -> `"1,234,567.5"`)
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let (negative, digits) = match int_part.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, int_part),
    };

    // Anything that rounds to zero prints as plain "0"
    let is_zero = frac.is_empty() && digits.bytes().all(|b| b == b'0');

    let mut out = String::with_capacity(fixed.len() + digits.len() / 3 + 1);
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(digits));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number(1234567.891), "1,234,567.891");
        assert_eq!(format_number(1.0 / 3.0), "0.33333333");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_negative_and_zero() {
        assert_eq!(format_number(-1234.5), "-1,234.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.000000001), "0");
        assert_eq!(format_number(0.000000001), "0");
    }

    #[test]
    fn test_large_values() {
        assert_eq!(format_number(6.242e18), "6,242,000,000,000,000,000");
    }
}
