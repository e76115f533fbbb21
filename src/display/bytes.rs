//! Human-readable byte size rendering.

use crate::display::trim_insignificant_zeros;
use crate::error::{Result, UtilError};

/// Base-1000 unit labels, as block explorers report sizes.
const UNITS: [&str; 9] = ["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

const UNIT_BASE: f64 = 1000.0;

/// Render a byte count as `"<value> <unit>"` with base-1000 units.
///
/// `decimals` controls precision: `Some(d)` for `d + 1` fractional digits,
/// with `None` or `Some(0)` falling back to 3. Trailing zeros are trimmed,
/// so `format_bytes(1000, Some(2))` reads `"1 KB"`. Counts at or beyond
/// 1000⁹ have no unit label and fail with [`UtilError::ValueOutOfRange`].
pub fn format_bytes(bytes: u128, decimals: Option<u32>) -> Result<String> {
    if bytes == 0 {
        return Ok("0 Bytes".to_string());
    }

    let precision = match decimals {
        None | Some(0) => 3,
        Some(d) => d as usize + 1,
    };

    // Integer division instead of floor(log) keeps the 1000^n boundaries exact
    let mut exponent = 0usize;
    let mut remaining = bytes;
    while remaining >= 1000 {
        remaining /= 1000;
        exponent += 1;
    }
    if exponent >= UNITS.len() {
        return Err(UtilError::ValueOutOfRange(format!(
            "{bytes} bytes exceeds the yottabyte range"
        )));
    }

    let scaled = bytes as f64 / UNIT_BASE.powi(exponent as i32);
    let rendered = format!("{scaled:.precision$}");
    Ok(format!(
        "{} {}",
        trim_insignificant_zeros(&rendered),
        UNITS[exponent]
    ))
}
