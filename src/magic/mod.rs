//! Network magic number encoding
//!
//! Komodo asset chains identify themselves with a 32-bit "magic" constant.
//! Chain parameter generators need it rendered as hex, sometimes with the
//! byte order flipped to match the wire format.

/// Render a chain magic number as lowercase hex.
///
/// Negative input is read as its unsigned 32-bit two's-complement value, so
/// `convert_kmd_magic(-1, false)` is `"ffffffff"`. Leading zero digits are
/// not rendered. With `reverse` the hex is first padded to whole bytes and
/// its byte order flipped: `convert_kmd_magic(0x1234, true)` is `"3412"`.
pub fn convert_kmd_magic(num: i32, reverse: bool) -> String {
    let magic = num as u32;
    if !reverse {
        return format!("{magic:x}");
    }

    // Keep only the significant bytes, matching the unpadded hex rendering
    let be = magic.to_be_bytes();
    let skip = be.iter().take_while(|&&b| b == 0).count().min(be.len() - 1);
    let mut bytes = be[skip..].to_vec();
    bytes.reverse();
    hex::encode(bytes)
}
