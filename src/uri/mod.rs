//! Payment link parsing
//!
//! Wallets hand around `scheme:address?amount=...` style links (BIP 21 and
//! its Komodo-flavored cousins). The parser here is deliberately forgiving:
//! an unrecognizable link is `None`, a malformed query parameter is simply
//! dropped, and only the address format itself is enforced.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

/// Shortest base58 address a payment link can carry.
const MIN_ADDRESS_LEN: usize = 27;

/// Longest base58 address a payment link can carry.
const MAX_ADDRESS_LEN: usize = 34;

/// A parsed payment link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentUrl {
    /// The link exactly as it was given
    pub url: String,
    /// The recipient address between the scheme and the query
    pub address: String,
    /// Well-formed `key=value` query parameters, values url-decoded
    pub params: HashMap<String, String>,
}

/// Parse a `scheme:address[?key=value&...]` payment link.
///
/// The scheme may be any alphanumeric run, including empty; the address
/// must be 27 to 34 alphanumeric characters. Query values are url-decoded
/// with `+` read as a space. Query segments without exactly one `=`, or
/// with an undecodable value, are skipped. Returns `None` when the string
/// as a whole does not look like a payment link.
pub fn parse_bitcoin_url(url: &str) -> Option<PaymentUrl> {
    let (scheme, rest) = url.split_once(':')?;
    if !scheme.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let (address, query) = match rest.split_once('?') {
        Some((address, query)) => (address, Some(query)),
        None => (rest, None),
    };

    if address.len() < MIN_ADDRESS_LEN
        || address.len() > MAX_ADDRESS_LEN
        || !address.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }

    let mut params = HashMap::new();
    if let Some(query) = query {
        for segment in query.split('&') {
            let mut pieces = segment.split('=');
            if let (Some(key), Some(value), None) = (pieces.next(), pieces.next(), pieces.next()) {
                match urlencoding::decode(&value.replace('+', " ")) {
                    Ok(decoded) => {
                        params.insert(key.to_string(), decoded.into_owned());
                    }
                    Err(_) => debug!("dropping undecodable query segment {segment:?}"),
                }
            }
        }
    }

    Some(PaymentUrl {
        url: url.to_string(),
        address: address.to_string(),
        params,
    })
}
