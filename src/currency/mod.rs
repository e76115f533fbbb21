//! Currency unit conversion and balance arithmetic
//!
//! The wallet stores amounts in satoshis (1 coin = 100,000,000 sats) and
//! shows them as decimal coin strings. Conversions here go through integer
//! or decimal-string arithmetic so no coin amount a wallet can hold picks
//! up floating-point drift on the way to or from the display.

use serde_json::Value;

use crate::display::trim_insignificant_zeros;
use crate::error::{Result, UtilError};
use crate::numeric::as_finite_f64;
use crate::sort::Record;

/// Number of satoshis in one coin (same as Bitcoin)
pub const SATS_PER_COIN: u64 = 100_000_000;

/// Fractional decimal digits a coin amount carries
pub const COIN_DECIMALS: u32 = 8;

/// Per-input byte cost of a legacy-format transaction
const TX_INPUT_SIZE: u64 = 180;

/// Per-output byte cost of a legacy-format transaction
const TX_OUTPUT_SIZE: u64 = 34;

/// Fixed overhead bytes of a legacy-format transaction
const TX_OVERHEAD_SIZE: u64 = 11;

/// Convert a satoshi amount to a plain decimal coin string.
///
/// The result never uses exponential notation and carries no trailing
/// fractional zeros: `from_sats(1)` is `"0.00000001"`, `from_sats(150_000_000)`
/// is `"1.5"`. Exact integer arithmetic throughout.
pub fn from_sats(sats: i64) -> String {
    let sign = if sats < 0 { "-" } else { "" };
    let magnitude = sats.unsigned_abs();
    let whole = magnitude / SATS_PER_COIN;
    let frac = magnitude % SATS_PER_COIN;

    if frac == 0 {
        return format!("{sign}{whole}");
    }

    let rendered = format!("{sign}{whole}.{frac:08}");
    trim_insignificant_zeros(&rendered).to_string()
}

/// Convert a numeric-like coin amount to whole satoshis.
///
/// The amount is rounded to 8 decimal places first, then scaled by 10⁸ in
/// decimal-string space, so `to_sats` never multiplies in floating point.
/// Non-numeric input fails with [`UtilError::NotANumber`]; amounts too
/// large for an `i64` satoshi count fail with [`UtilError::ValueOutOfRange`].
pub fn to_sats(value: &Value) -> Result<i64> {
    let amount = as_finite_f64(value).ok_or_else(|| UtilError::NotANumber(value.to_string()))?;

    // Same rounding step the display path uses, rendered in decimal so the
    // 10^8 scale becomes digit shuffling instead of a float multiply.
    let fixed = format!("{amount:.8}");
    let (unsigned, negative) = match fixed.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (fixed.as_str(), false),
    };
    let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, "00000000"));

    let whole: i64 = whole
        .parse()
        .map_err(|_| UtilError::ValueOutOfRange(fixed.clone()))?;
    let frac: i64 = frac
        .parse()
        .map_err(|_| UtilError::ValueOutOfRange(fixed.clone()))?;

    let sats = whole
        .checked_mul(SATS_PER_COIN as i64)
        .and_then(|scaled| scaled.checked_add(frac))
        .ok_or_else(|| UtilError::ValueOutOfRange(fixed.clone()))?;

    Ok(if negative { -sats } else { sats })
}

/// Estimated size in bytes of a legacy-format transaction.
pub fn estimate_tx_size(num_inputs: u64, num_outputs: u64) -> u64 {
    num_inputs * TX_INPUT_SIZE + num_outputs * TX_OUTPUT_SIZE + TX_OVERHEAD_SIZE
}

/// Sum the spendable `value` fields of a utxo list, less an optional fee.
///
/// An empty list is worth 0 no matter the fee. When a fee is given the
/// result is rounded back to 8 decimal places. A utxo with a missing or
/// non-numeric `value` fails with [`UtilError::NotANumber`].
pub fn max_spend_balance(utxos: &[Record], fee: Option<f64>) -> Result<f64> {
    if utxos.is_empty() {
        return Ok(0.0);
    }

    let mut balance = 0.0;
    for utxo in utxos {
        let value = utxo
            .get("value")
            .and_then(as_finite_f64)
            .ok_or_else(|| match utxo.get("value") {
                Some(v) => UtilError::NotANumber(v.to_string()),
                None => UtilError::NotANumber("missing utxo value".to_string()),
            })?;
        balance += value;
    }

    match fee {
        Some(fee) => Ok(round_to_coin_precision(balance - fee)),
        None => Ok(balance),
    }
}

/// Round an amount to the 8 decimal places a coin can represent.
fn round_to_coin_precision(value: f64) -> f64 {
    let scale = 10f64.powi(COIN_DECIMALS as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn utxo(value: Value) -> Record {
        let mut record = Record::new();
        record.insert("value".to_string(), value);
        record
    }

    #[test]
    fn test_from_sats_whole_coins() {
        assert_eq!(from_sats(0), "0");
        assert_eq!(from_sats(100_000_000), "1");
        assert_eq!(from_sats(2_100_000_000_000_000), "21000000");
    }

    #[test]
    fn test_from_sats_fractional_coins() {
        assert_eq!(from_sats(1), "0.00000001");
        assert_eq!(from_sats(150_000_000), "1.5");
        assert_eq!(from_sats(12_345_678), "0.12345678");
        assert_eq!(from_sats(-50_000_000), "-0.5");
    }

    #[test]
    fn test_to_sats_from_numbers_and_strings() {
        assert_eq!(to_sats(&json!(1)).unwrap(), 100_000_000);
        assert_eq!(to_sats(&json!(0.1)).unwrap(), 10_000_000);
        assert_eq!(to_sats(&json!("0.00000001")).unwrap(), 1);
        assert_eq!(to_sats(&json!("-0.5")).unwrap(), -50_000_000);
    }

    #[test]
    fn test_to_sats_rounds_excess_precision() {
        assert_eq!(to_sats(&json!(0.123456789)).unwrap(), 12_345_679);
    }

    #[test]
    fn test_to_sats_rejects_non_numeric_input() {
        assert_eq!(
            to_sats(&json!("abc")).unwrap_err(),
            UtilError::NotANumber("\"abc\"".to_string())
        );
        assert!(to_sats(&json!(null)).is_err());
    }

    #[test]
    fn test_sats_round_trip() {
        // Representative wallet magnitudes, up to the full 21M coin supply
        for sats in [0, 1, 100_000_000, 2_100_000_000_000_000] {
            let coins = from_sats(sats);
            assert_eq!(to_sats(&json!(coins)).unwrap(), sats, "coins: {coins}");
        }
    }

    #[test]
    fn test_estimate_tx_size() {
        assert_eq!(estimate_tx_size(0, 0), 11);
        assert_eq!(estimate_tx_size(1, 1), 225);
        assert_eq!(estimate_tx_size(2, 2), 439);
    }

    #[test]
    fn test_max_spend_balance_sums_values() {
        let utxos = vec![utxo(json!(0.5)), utxo(json!("0.25")), utxo(json!(1))];
        assert_eq!(max_spend_balance(&utxos, None).unwrap(), 1.75);
    }

    #[test]
    fn test_max_spend_balance_subtracts_fee() {
        let utxos = vec![utxo(json!(1.0)), utxo(json!(0.5))];
        let spendable = max_spend_balance(&utxos, Some(0.0001)).unwrap();
        assert_eq!(spendable, 1.4999);
    }

    #[test]
    fn test_max_spend_balance_empty_list_is_zero() {
        assert_eq!(max_spend_balance(&[], None).unwrap(), 0.0);
        assert_eq!(max_spend_balance(&[], Some(0.0001)).unwrap(), 0.0);
    }

    #[test]
    fn test_max_spend_balance_rejects_bad_utxo() {
        let utxos = vec![utxo(json!(1.0)), utxo(json!("oops"))];
        assert!(matches!(
            max_spend_balance(&utxos, None),
            Err(UtilError::NotANumber(_))
        ));

        let no_value = vec![Record::new()];
        assert!(max_spend_balance(&no_value, None).is_err());
    }
}
