//! Numeric classification for loosely-typed wallet data
//!
//! Wallet payloads carry amounts either as JSON numbers or as decimal
//! strings, depending on which daemon produced them. These helpers decide
//! whether such a value is usable as a finite number before any conversion
//! touches it.

use serde_json::Value;

/// Extract a finite `f64` from a numeric-like JSON value.
///
/// A JSON number qualifies if it is finite; a string qualifies if its whole
/// trimmed text parses to a finite float (so `"1e-8"` and `" 0.5 "` pass,
/// `"12abc"` and `"inf"` do not). Everything else yields `None`.
pub fn as_finite_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// True iff the value parses to a finite floating-point number.
pub fn is_number(value: &Value) -> bool {
    as_finite_f64(value).is_some()
}

/// True iff the value parses to a finite number strictly greater than zero.
pub fn is_positive_number(value: &Value) -> bool {
    matches!(as_finite_f64(value), Some(v) if v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_number_accepts_numbers_and_numeric_strings() {
        assert!(is_number(&json!(0)));
        assert!(is_number(&json!(-1.5)));
        assert!(is_number(&json!("0.00000001")));
        assert!(is_number(&json!("1e-8")));
        assert!(is_number(&json!(" 42 ")));
    }

    #[test]
    fn test_is_number_rejects_non_numeric_values() {
        assert!(!is_number(&json!("12abc")));
        assert!(!is_number(&json!("")));
        assert!(!is_number(&json!("inf")));
        assert!(!is_number(&json!("NaN")));
        assert!(!is_number(&json!(true)));
        assert!(!is_number(&json!(null)));
        assert!(!is_number(&json!([1, 2])));
    }

    #[test]
    fn test_is_positive_number() {
        assert!(is_positive_number(&json!(0.1)));
        assert!(is_positive_number(&json!("100000000")));
        assert!(!is_positive_number(&json!(0)));
        assert!(!is_positive_number(&json!("-0.5")));
        assert!(!is_positive_number(&json!("abc")));
    }

    #[test]
    fn test_as_finite_f64_extraction() {
        assert_eq!(as_finite_f64(&json!("1e-8")), Some(1e-8));
        assert_eq!(as_finite_f64(&json!(21.5)), Some(21.5));
        assert_eq!(as_finite_f64(&json!(null)), None);
    }
}
