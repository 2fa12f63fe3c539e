//! Error types for the sim_octree crate
//!
//! The spatial index itself never fails on insert or query (rejections are
//! reported through `bool` results). Errors only arise when building an
//! index from an invalid configuration or when a shared index lock is
//! poisoned.

use std::fmt;

/// Result type for sim_octree operations
pub type Result<T> = std::result::Result<T, Error>;

/// sim_octree errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Node capacity must be at least 1
    InvalidCapacity(usize),

    /// A shared index lock was poisoned by a panicking writer
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(capacity) => {
                write!(f, "Invalid capacity: {} (must be at least 1)", capacity)
            }
            Error::LockPoisoned(msg) => write!(f, "Lock poisoned: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity and hand it back (internal use)
///
/// Every error the crate raises goes through here so that failures show
/// up in the configured logger even when the caller discards them.
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    match &error {
        Error::InvalidCapacity(capacity) => {
            crate::octree_error!(source, "Rejected configuration: capacity {}", capacity);
        }
        Error::LockPoisoned(msg) => {
            crate::octree_error!(source, "Lock poisoned: {}", msg);
        }
    }
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
