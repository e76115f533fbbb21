//! # Komodo Wallet Utils - Stateless Wallet Helper Functions
//!
//! This crate collects the pure helper functions a Komodo-style SPV wallet
//! needs around its edges: amount formatting, satoshi conversion, record
//! sorting, random electrum server selection, and payment link parsing.
//! Nothing in here keeps state, touches the network, or blocks.
//!
//! ## How the Code Is Organized
//! - `sort/`: key-based record sorting, transaction ordering, key-sorted maps
//! - `random/`: inclusive random integers and random peer selection
//! - `numeric/`: classification of loosely-typed numeric values
//! - `display/`: UI rounding, byte sizes, exponential-to-decimal rendering
//! - `currency/`: satoshi conversion, tx size estimation, balance math
//! - `uri/`: payment link parsing
//! - `magic/`: network magic number hex encoding
//! - `error/`: the shared error type and `Result` alias
//!
//! ## Key Design Decisions
//! - Records from daemons are loosely typed, so record-shaped inputs are
//!   `serde_json` objects rather than bespoke structs
//! - Satoshi conversion runs on integer and decimal-string arithmetic; no
//!   float multiply can smear the 8th decimal place
//! - Everything fallible reports through one `UtilError` enum; helpers that
//!   classify or parse degrade to `false`/`None` instead of failing
//! - Both sort functions mutate their argument in place and are stable
//!
//! The randomness helpers draw from `rand`'s thread-local generator. That
//! is fine for spreading load across electrum servers and useless for key
//! generation; key material never comes from this crate.

pub mod currency;
pub mod display;
pub mod error;
pub mod magic;
pub mod numeric;
pub mod random;
pub mod sort;
pub mod uri;

// Re-export commonly used items for convenience
pub use currency::{
    estimate_tx_size, from_sats, max_spend_balance, to_sats, COIN_DECIMALS, SATS_PER_COIN,
};
pub use display::{exponential_to_decimal, format_bytes, format_value};
pub use error::{Result, UtilError};
pub use magic::convert_kmd_magic;
pub use numeric::{as_finite_f64, is_number, is_positive_number};
pub use random::{random_electrum_server, random_int_inclusive, ElectrumServer};
pub use sort::{compare_fields, sort_object, sort_records, sort_transactions, Record};
pub use uri::{parse_bitcoin_url, PaymentUrl};
