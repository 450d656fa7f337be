use crate::bound::length_bound;
use crate::calendar::CivilDateTime;
use crate::decode::{decode, CanonicalInstant, RawTimestamp};
use crate::error::Result;
use crate::precision::{Precision, MAX_RESOLVED_PRECISION};

const MICRO_DIGITS: usize = 6;
const SUB_MICRO_DIGITS: usize = 3;

/// Format an instant as `YYYY-MM-DDTHH:mm:ss[.fraction]` in UTC.
///
/// Fraction digits are truncated to `precision`, never rounded. No zone
/// designator is appended.
pub fn format(precision: Precision, instant: &CanonicalInstant) -> String {
    let digits = usize::from(precision.digits());
    let mut out = String::with_capacity(length_bound(precision));
    out.push_str(&CivilDateTime::from_epoch_seconds(instant.epoch_seconds()).to_string());

    if digits == 0 {
        return out;
    }

    out.push('.');
    let micros = format!("{:06}", instant.micros_of_second());
    out.push_str(&micros[..digits.min(MICRO_DIGITS)]);

    if digits > MICRO_DIGITS {
        let wanted = digits - MICRO_DIGITS;
        let available = wanted.min(SUB_MICRO_DIGITS);
        let sub_micros = format!("{:03}", instant.picos_of_micro);
        out.push_str(&sub_micros[..available]);

        if wanted > available {
            tracing::debug!(
                precision = digits,
                resolved = MAX_RESOLVED_PRECISION,
                "no input carries fraction digits past the ninth, padding with zeros"
            );
            out.extend(std::iter::repeat('0').take(wanted - available));
        }
    }

    debug_assert!(out.len() <= length_bound(precision));
    out
}

/// Decode and format a raw value in one step.
pub fn to_iso8601(precision: Precision, raw: RawTimestamp) -> Result<String> {
    let instant = decode(precision, raw)?;
    Ok(format(precision, &instant))
}

/// Format a compact value of a `timestamp(0..=6)`.
pub fn to_iso8601_compact(precision: i64, compact: i64) -> Result<String> {
    to_iso8601(Precision::new(precision)?, RawTimestamp::Compact(compact))
}

/// Format an extended value of a `timestamp(7..=12)`.
pub fn to_iso8601_extended(
    precision: i64,
    epoch_micros: i64,
    picos_of_micro: u16,
) -> Result<String> {
    to_iso8601(
        Precision::new(precision)?,
        RawTimestamp::Extended {
            epoch_micros,
            picos_of_micro,
        },
    )
}
