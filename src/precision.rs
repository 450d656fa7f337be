/// Declared fractional-second precision of a timestamp type.
///
/// The precision picks both the raw encoding a value arrives in and how many
/// fraction digits the formatter emits.
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest precision a timestamp type may declare.
pub const MAX_PRECISION: u8 = 12;

/// Largest precision for which every emitted digit comes from the input.
///
/// Micros supply six digits and `picos_of_micro` three more.
pub const MAX_RESOLVED_PRECISION: u8 = 9;

/// Encoding bucket a precision falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecisionTier {
    /// 0..=3: compact value in milliseconds.
    Millis,
    /// 4..=6: compact value in microseconds.
    Micros,
    /// 7..=12: microseconds plus a sub-microsecond remainder.
    Extended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Precision(u8);

impl Precision {
    pub fn new(value: i64) -> Result<Self> {
        u8::try_from(value)
            .ok()
            .filter(|p| *p <= MAX_PRECISION)
            .map(Precision)
            .ok_or(Error::InvalidPrecision(value))
    }

    /// Every precision in `0..=12`, ascending.
    pub fn all() -> impl Iterator<Item = Precision> {
        (0..=MAX_PRECISION).map(Precision)
    }

    pub fn digits(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> PrecisionTier {
        match self.0 {
            0..=3 => PrecisionTier::Millis,
            4..=6 => PrecisionTier::Micros,
            _ => PrecisionTier::Extended,
        }
    }

    /// False for precisions asking for digits finer than any input carries.
    pub fn is_fully_resolved(self) -> bool {
        self.0 <= MAX_RESOLVED_PRECISION
    }
}

impl TryFrom<i64> for Precision {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Precision::new(value)
    }
}

impl From<Precision> for i64 {
    fn from(p: Precision) -> Self {
        i64::from(p.0)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
