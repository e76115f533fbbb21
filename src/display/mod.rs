//! Display formatting for amounts and sizes
//!
//! These helpers shape raw numbers for the wallet UI. They never change the
//! stored value, only how it reads on screen.

pub mod bytes;

pub use bytes::format_bytes;

use crate::error::{Result, UtilError};

/// Scale factor for the 8 fractional digits a coin amount can carry.
const COIN_SCALE: f64 = 1e8;

/// Round a coin amount for display.
///
/// Whole numbers pass through untouched. Fractional amounts are first
/// truncated at 8 decimal places; amounts of one coin or more are then
/// rounded to 4 places, while sub-coin amounts keep all 8. The UI shows
/// more precision exactly where the small digits matter.
pub fn format_value(value: f64) -> f64 {
    if value.fract() == 0.0 {
        return value;
    }

    let truncated = (value * COIN_SCALE).trunc() / COIN_SCALE;
    if truncated.trunc() != 0.0 {
        (truncated * 1e4).round() / 1e4
    } else {
        truncated
    }
}

/// Re-render an exponential numeric string in plain fixed-point notation.
///
/// `"1e-8"` becomes `"0.00000001"`; text without an exponent marker is
/// returned unchanged. The fixed-point precision equals the magnitude of
/// the exponent, so no significant digit of a small amount is lost.
pub fn exponential_to_decimal(value: &str) -> Result<String> {
    let marker = match value.find(['e', 'E']) {
        Some(pos) => pos,
        None => return Ok(value.to_string()),
    };

    let parsed: f64 = value
        .parse()
        .map_err(|_| UtilError::NotANumber(value.to_string()))?;
    let exponent: i32 = value[marker + 1..]
        .parse()
        .map_err(|_| UtilError::NotANumber(value.to_string()))?;

    let precision = exponent.unsigned_abs() as usize;
    Ok(format!("{parsed:.precision$}"))
}

/// Drop trailing fractional zeros (and a dangling dot) from a rendering.
pub(crate) fn trim_insignificant_zeros(rendered: &str) -> &str {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered
    }
}
