//! Field comparison rules shared by the sorting helpers.

use serde_json::Value;
use std::cmp::Ordering;

use crate::numeric::as_finite_f64;

/// Compare two optional record fields with loose relational semantics.
///
/// Two strings compare lexicographically. Otherwise both sides are coerced
/// to finite numbers and compared as such. When either side is missing, not
/// coercible, or the pair is incomparable, the fields count as equal; a sort
/// built on this comparator then leaves their relative order alone.
pub fn compare_fields(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return Ordering::Equal,
    };

    if let (Value::String(x), Value::String(y)) = (a, b) {
        return x.cmp(y);
    }

    match (as_finite_f64(a), as_finite_f64(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// True when a field counts as "absent" for transaction ordering purposes.
///
/// Mirrors the loose emptiness rules of upstream wallet payloads: a missing
/// key, `null`, `false`, zero, or an empty string all mean "no height yet",
/// i.e. the transaction is unconfirmed.
pub(crate) fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |v| v == 0.0 || v.is_nan()),
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}
