//! Error handling for the wallet utilities
//!
//! Every fallible helper in this crate reports through the same error type,
//! so callers only deal with one `Result` alias.

use std::fmt;

/// Result type alias for wallet utility operations
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for wallet utility operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// No electrum server remains after filtering out the excluded one
    EmptyServerList,
    /// A server descriptor was not a valid `host:port:protocol` triplet
    InvalidServer(String),
    /// A value expected to be numeric-like did not parse to a finite number
    NotANumber(String),
    /// A value was numeric but outside the range the operation can represent
    ValueOutOfRange(String),
}

impl fmt::Display for UtilError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UtilError::EmptyServerList => {
                write!(f, "No electrum server available after exclusion")
            }
            UtilError::InvalidServer(descriptor) => {
                write!(f, "Invalid server descriptor: {descriptor}")
            }
            UtilError::NotANumber(value) => write!(f, "Not a number: {value}"),
            UtilError::ValueOutOfRange(value) => write!(f, "Value out of range: {value}"),
        }
    }
}

impl std::error::Error for UtilError {}
