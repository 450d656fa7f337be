use crate::precision::MAX_PRECISION;
use thiserror::Error;

/// Errors raised when a caller hands the core inputs outside its contract.
///
/// Formatting itself is total, so every variant here is detected before any
/// output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Precision outside `0..=12`.
    #[error("invalid precision {0}: must be between 0 and {max}", max = MAX_PRECISION)]
    InvalidPrecision(i64),

    /// Raw value does not match the encoding of its precision tier.
    #[error("invalid representation for timestamp({precision}): {reason}")]
    InvalidRepresentation { precision: u8, reason: String },

    /// Declared output capacity differs from the exact length bound.
    #[error("declared capacity {declared} for timestamp({precision}) must equal {required}")]
    CapacityMismatch {
        precision: u8,
        declared: usize,
        required: usize,
    },
}

impl Error {
    pub(crate) fn representation(precision: u8, reason: impl Into<String>) -> Self {
        Error::InvalidRepresentation {
            precision,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
