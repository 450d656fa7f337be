// Library exports for the binary and integration tests
pub mod batch;
pub mod bound;
pub mod calendar;
pub mod decode;
pub mod error;
pub mod logging;
pub mod precision;
pub mod timefmt;

pub use bound::{check_declared_capacity, length_bound};
pub use decode::{decode, CanonicalInstant, RawTimestamp};
pub use error::{Error, Result};
pub use precision::{Precision, PrecisionTier};
pub use timefmt::{format, to_iso8601, to_iso8601_compact, to_iso8601_extended};
