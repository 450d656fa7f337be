/// Normalizes the two raw timestamp encodings into a `CanonicalInstant`.
use crate::error::{Error, Result};
use crate::precision::{Precision, PrecisionTier};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

pub const MICROS_PER_MILLI: i64 = 1_000;
pub const MICROS_PER_SECOND: i64 = 1_000_000;
pub const NANOS_PER_MICRO: u32 = 1_000;

/// Exclusive upper limit of `picos_of_micro`.
pub const PICOS_OF_MICRO_LIMIT: u16 = 1_000;

/// A point on the UTC timeline at sub-microsecond resolution.
///
/// `picos_of_micro` is kept in `0..=999` and supplies fraction digits 7-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CanonicalInstant {
    pub epoch_micros: i64,
    pub picos_of_micro: u16,
}

impl CanonicalInstant {
    pub fn from_micros(epoch_micros: i64) -> Self {
        CanonicalInstant {
            epoch_micros,
            picos_of_micro: 0,
        }
    }

    /// Seconds since the epoch, floored so pre-epoch instants keep a
    /// non-negative fraction.
    pub fn epoch_seconds(&self) -> i64 {
        self.epoch_micros.div_euclid(MICROS_PER_SECOND)
    }

    /// Always in `0..1_000_000`.
    pub fn micros_of_second(&self) -> u32 {
        self.epoch_micros.rem_euclid(MICROS_PER_SECOND) as u32
    }

    /// Build an instant from a chrono UTC timestamp, keeping nanosecond digits.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        let nanos = dt.timestamp_subsec_nanos();
        CanonicalInstant {
            epoch_micros: dt.timestamp() * MICROS_PER_SECOND
                + i64::from(nanos / NANOS_PER_MICRO),
            picos_of_micro: (nanos % NANOS_PER_MICRO) as u16,
        }
    }

    /// The same instant as a chrono timestamp, or `None` outside chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let nanos = self.micros_of_second() * NANOS_PER_MICRO + u32::from(self.picos_of_micro);
        Utc.timestamp_opt(self.epoch_seconds(), nanos).single()
    }
}

/// Raw timestamp value as handed over by the caller.
///
/// Which variant is valid depends on the precision tier; the two are never
/// interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawTimestamp {
    /// Milliseconds for precision 0..=3, microseconds for 4..=6.
    Compact(i64),
    /// Precision 7..=12.
    Extended {
        epoch_micros: i64,
        picos_of_micro: u16,
    },
}

impl RawTimestamp {
    fn kind(&self) -> &'static str {
        match self {
            RawTimestamp::Compact(_) => "compact",
            RawTimestamp::Extended { .. } => "extended",
        }
    }
}

pub fn decode(precision: Precision, raw: RawTimestamp) -> Result<CanonicalInstant> {
    let p = precision.digits();
    let instant = match (precision.tier(), raw) {
        (PrecisionTier::Millis, RawTimestamp::Compact(millis)) => {
            let epoch_micros = millis.checked_mul(MICROS_PER_MILLI).ok_or_else(|| {
                Error::representation(
                    p,
                    format!("{millis} milliseconds overflows the microsecond range"),
                )
            })?;
            CanonicalInstant::from_micros(epoch_micros)
        }
        (PrecisionTier::Micros, RawTimestamp::Compact(micros)) => {
            CanonicalInstant::from_micros(micros)
        }
        (
            PrecisionTier::Extended,
            RawTimestamp::Extended {
                epoch_micros,
                picos_of_micro,
            },
        ) => {
            if picos_of_micro >= PICOS_OF_MICRO_LIMIT {
                return Err(Error::representation(
                    p,
                    format!("picos_of_micro {picos_of_micro} is outside 0..=999"),
                ));
            }
            CanonicalInstant {
                epoch_micros,
                picos_of_micro,
            }
        }
        (tier, raw) => {
            let expected = match tier {
                PrecisionTier::Extended => "an extended",
                PrecisionTier::Millis | PrecisionTier::Micros => "a compact",
            };
            return Err(Error::representation(
                p,
                format!("expected {expected} value, got {}", raw.kind()),
            ));
        }
    };

    tracing::trace!(precision = p, ?raw, ?instant, "decoded timestamp");
    Ok(instant)
}
