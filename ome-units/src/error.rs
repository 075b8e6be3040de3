//! Errors raised around the unit tables
//!
//! Conversion itself cannot fail: every pair of units in a dimension has a
//! scale relationship. What can go wrong is a malformed table for a
//! plugged-in dimension, or an ordinal that names no unit.

use thiserror::Error;

/// Error type for unit table operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    /// The enumeration and its exponent table disagree
    #[error("unit table for {dimension} is inconsistent: {reason}")]
    Configuration {
        dimension: &'static str,
        reason: String,
    },

    /// A raw ordinal outside the closed enumeration
    #[error("no {dimension} unit with ordinal {ordinal}")]
    UndefinedUnit {
        dimension: &'static str,
        ordinal: usize,
    },
}

impl UnitsError {
    pub(crate) fn configuration(dimension: &'static str, reason: impl Into<String>) -> Self {
        UnitsError::Configuration { dimension, reason: reason.into() }
    }
}
