//! Peer selection randomness
//!
//! The wallet spreads electrum traffic by picking a random server from its
//! configured list. The RNG here is `rand`'s thread-local generator: good
//! enough for load spreading, never for key material.

pub mod server;

pub use server::{random_electrum_server, ElectrumServer};

use rand::Rng;

/// Uniform random integer in `[ceil(min), floor(max)]`, both inclusive.
///
/// Fractional bounds are tightened inward before drawing. A degenerate
/// range (floor(max) at or below ceil(min)) collapses to the lower bound.
pub fn random_int_inclusive(min: f64, max: f64) -> i64 {
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    if hi <= lo {
        return lo;
    }
    rand::thread_rng().gen_range(lo..=hi)
}
