//! Calorie Total
//!
//! The running total can become "not a number" when the stored value is
//! garbage. That state is kept and shown rather than silently reset.

use std::fmt;

use serde::{Serialize, Serializer};

/// Day total: a whole count, or the poisoned value left by a bad stored string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalorieTotal {
    Count(i64),
    NotANumber,
}

impl Default for CalorieTotal {
    fn default() -> Self {
        CalorieTotal::Count(0)
    }
}

impl CalorieTotal {
    /// Interpret a stored string. Anything without a leading integer is `NotANumber`.
    pub fn from_stored(raw: &str) -> Self {
        match parse_int_prefix(raw) {
            Some(n) => CalorieTotal::Count(n),
            None => CalorieTotal::NotANumber,
        }
    }

    /// Add an amount. `NotANumber` absorbs everything.
    pub fn add(self, amount: i64) -> Self {
        match self {
            CalorieTotal::Count(n) => CalorieTotal::Count(n.saturating_add(amount)),
            CalorieTotal::NotANumber => CalorieTotal::NotANumber,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, CalorieTotal::NotANumber)
    }
}

impl fmt::Display for CalorieTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalorieTotal::Count(n) => write!(f, "{}", n),
            CalorieTotal::NotANumber => f.write_str("NaN"),
        }
    }
}

// JSON has no NaN; it goes out as null.
impl Serialize for CalorieTotal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CalorieTotal::Count(n) => serializer.serialize_i64(*n),
            CalorieTotal::NotANumber => serializer.serialize_none(),
        }
    }
}

/// Parse the leading integer of `input`.
///
/// Leading whitespace and one sign are allowed, then the longest run of
/// digits is taken and the rest ignored: `"12abc"` is 12, `"3.7"` is 3.
/// A `0x`/`0X` prefix switches to hexadecimal (`"0x1F"` is 31).
/// Values beyond `i64` saturate. Returns `None` when there are no digits.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(radix))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }
    let radix = i64::from(radix);
    let saturated = if negative { i64::MIN } else { i64::MAX };
    // accumulate toward the sign so i64::MIN stays reachable
    let value = digits.iter().try_fold(0i64, |acc, &digit| {
        let shifted = acc.checked_mul(radix)?;
        if negative {
            shifted.checked_sub(digit)
        } else {
            shifted.checked_add(digit)
        }
    });
    Some(value.unwrap_or(saturated))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_signed() {
        assert_eq!(parse_int_prefix("250"), Some(250));
        assert_eq!(parse_int_prefix("  42"), Some(42));
        assert_eq!(parse_int_prefix("-5"), Some(-5));
        assert_eq!(parse_int_prefix("+7"), Some(7));
    }

    #[test]
    fn test_parse_ignores_trailing_garbage() {
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("3.7"), Some(3));
        assert_eq!(parse_int_prefix("100 kcal"), Some(100));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix(".5"), None);
        assert_eq!(parse_int_prefix("0x"), None);
        assert_eq!(parse_int_prefix("0xzz"), None);
    }

    #[test]
    fn test_parse_hex_prefix() {
        assert_eq!(parse_int_prefix("0x1F"), Some(31));
        assert_eq!(parse_int_prefix("0X10kcal"), Some(16));
        assert_eq!(parse_int_prefix("-0xff"), Some(-255));
    }

    #[test]
    fn test_parse_overflow_saturates() {
        assert_eq!(parse_int_prefix("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_int_prefix("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_int_prefix("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn test_from_stored_garbage_is_nan() {
        assert_eq!(CalorieTotal::from_stored("1200"), CalorieTotal::Count(1200));
        assert_eq!(CalorieTotal::from_stored("lots"), CalorieTotal::NotANumber);
        assert_eq!(CalorieTotal::from_stored("NaN"), CalorieTotal::NotANumber);
        assert_eq!(
            CalorieTotal::from_stored("100000000000000000000"),
            CalorieTotal::Count(i64::MAX)
        );
    }

    #[test]
    fn test_nan_absorbs_additions() {
        assert_eq!(CalorieTotal::NotANumber.add(300), CalorieTotal::NotANumber);
        assert_eq!(CalorieTotal::Count(100).add(300), CalorieTotal::Count(400));
        assert_eq!(CalorieTotal::Count(i64::MAX).add(1), CalorieTotal::Count(i64::MAX));
    }

    #[test]
    fn test_display_and_json() {
        assert_eq!(CalorieTotal::Count(500).to_string(), "500");
        assert_eq!(CalorieTotal::NotANumber.to_string(), "NaN");
        assert_eq!(serde_json::to_string(&CalorieTotal::Count(500)).unwrap(), "500");
        assert_eq!(serde_json::to_string(&CalorieTotal::NotANumber).unwrap(), "null");
    }
}
