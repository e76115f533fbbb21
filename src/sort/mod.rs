//! Record sorting helpers
//!
//! Wallet views sort loosely-typed records (transactions, orders, server
//! lists) by a caller-chosen field. Records are `serde_json` objects, so the
//! same helpers work for anything a daemon hands back. Both sort functions
//! mutate their argument in place; `sort_object` is the exception and
//! returns a fresh map.

pub mod compare;

pub use compare::compare_fields;

use serde_json::{Map, Value};
use std::cmp::Ordering;

use compare::is_absent;

/// A loosely-typed record, as decoded from a daemon or electrum response.
pub type Record = Map<String, Value>;

/// Field transactions sort by when the caller does not pick one.
const DEFAULT_TX_SORT_FIELD: &str = "height";

/// Stable in-place sort of records by the value under `key`.
///
/// Ordering follows [`compare_fields`]: numbers compare numerically, strings
/// lexicographically, and records whose fields are missing or incomparable
/// keep their relative order. `descending` swaps the comparator's arguments
/// rather than negating its result, so equal fields stay equal either way.
pub fn sort_records(records: &mut [Record], key: &str, descending: bool) {
    if descending {
        records.sort_by(|a, b| compare_fields(b.get(key), a.get(key)));
    } else {
        records.sort_by(|a, b| compare_fields(a.get(key), b.get(key)));
    }
}

/// Stable in-place sort of transactions, unconfirmed last.
///
/// Sorts ascending by `sort_by` (default `"height"`). A transaction without
/// a usable height is unconfirmed and sorts after every confirmed one; two
/// unconfirmed transactions keep their relative order.
pub fn sort_transactions(transactions: &mut [Record], sort_by: Option<&str>) {
    let key = sort_by.unwrap_or(DEFAULT_TX_SORT_FIELD);

    transactions.sort_by(|a, b| {
        let (av, bv) = (a.get(key), b.get(key));
        match (is_absent(av), is_absent(bv)) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => compare_fields(av, bv),
        }
    });
}

/// Return a copy of `map` with keys in lexicographic order.
///
/// Used to make serialization deterministic before hashing or display.
pub fn sort_object(map: &Record) -> Record {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();

    let mut sorted = Map::with_capacity(map.len());
    for key in keys {
        if let Some(value) = map.get(key) {
            sorted.insert(key.clone(), value.clone());
        }
    }
    sorted
}
