//! Error types for growable-sequence construction.
//!
//! Container operations themselves are total: invalid indices are
//! signalled by `Option`/`bool` return values, never by an error or a
//! panic. Only configuration can fail.

use std::error::Error;
use std::fmt;

/// Errors from constructing a [`GrowVec`](crate::GrowVec) out of a
/// [`GrowthConfig`](crate::GrowthConfig).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrowVecError {
    /// The supplied configuration violates a container invariant.
    InvalidConfig {
        /// Human-readable description of the rejected value.
        reason: String,
    },
}

impl fmt::Display for GrowVecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => {
                write!(f, "invalid config: {reason}")
            }
        }
    }
}

impl Error for GrowVecError {}
