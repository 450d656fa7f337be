/// Worst-case output length of the ISO-8601 formatter, by precision.
use crate::error::{Error, Result};
use crate::precision::Precision;

/// Slot for the sign of a negative or five-plus-digit year.
const YEAR_SIGN: usize = 1;
/// Widest year field an `i64` microsecond count can produce (-290308, +294247).
const YEAR_DIGITS: usize = 6;
/// `-MM-DDTHH:mm:ss`
const MONTH_TO_SECOND: usize = 15;

/// Exact maximum length of a formatted `timestamp(precision)`.
///
/// Reached by both `i64::MIN` and `i64::MAX` epoch microseconds at every
/// precision, so it can be used to declare an output container's capacity
/// exactly.
pub fn length_bound(precision: Precision) -> usize {
    let digits = usize::from(precision.digits());
    let point = usize::from(digits > 0);
    YEAR_SIGN + YEAR_DIGITS + MONTH_TO_SECOND + point + digits
}

/// Checks a declared output capacity against the bound.
///
/// The declared capacity must equal the bound, not just cover it.
pub fn check_declared_capacity(precision: Precision, declared: usize) -> Result<()> {
    let required = length_bound(precision);
    if declared != required {
        return Err(Error::CapacityMismatch {
            precision: precision.digits(),
            declared,
            required,
        });
    }
    Ok(())
}
