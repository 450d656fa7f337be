/// Proleptic-Gregorian calendar arithmetic over the full `i64` seconds range.
use std::fmt;

const SECONDS_PER_DAY: i64 = 86_400;
/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT_DAYS: i64 = 719_468;
const DAYS_PER_ERA: i64 = 146_097;
/// Widest year printed without a sign.
const MAX_UNSIGNED_YEAR: i64 = 9_999;

/// UTC calendar date and time of day, at whole-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilDateTime {
    /// Proleptic year: 0 is 1 BC, -1 is 2 BC.
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl CivilDateTime {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        let days = epoch_seconds.div_euclid(SECONDS_PER_DAY);
        let seconds_of_day = epoch_seconds.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = civil_from_days(days);

        CivilDateTime {
            year,
            month,
            day,
            hour: (seconds_of_day / 3_600) as u8,
            minute: (seconds_of_day % 3_600 / 60) as u8,
            second: (seconds_of_day % 60) as u8,
        }
    }
}

/// Converts days since 1970-01-01 to `(year, month, day)`.
///
/// Counts in 400-year eras starting on March 1st so the leap day falls at the
/// end of each computational year.
pub fn civil_from_days(days: i64) -> (i64, u8, u8) {
    // Any i64 second count gives |days| <= i64::MAX / 86_400 (about 1.07e14), so
    // the shift and the era products stay far inside i64.
    let shifted = days + EPOCH_SHIFT_DAYS;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted.rem_euclid(DAYS_PER_ERA);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * month_index + 2) / 5 + 1) as u8;
    let month = (if month_index < 10 {
        month_index + 3
    } else {
        month_index - 9
    }) as u8;
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Renders `YYYY-MM-DDTHH:mm:ss`.
///
/// Years are padded to four digits. Negative years carry a leading `-` and
/// years wider than four digits a leading `+`.
impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", self.year.unsigned_abs())?;
        } else if self.year > MAX_UNSIGNED_YEAR {
            write!(f, "+{}", self.year)?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    #[test]
    fn test_epoch() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(
            CivilDateTime::from_epoch_seconds(0).to_string(),
            "1970-01-01T00:00:00"
        );
    }

    #[test]
    fn test_leap_days() {
        let feb29 = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
        let days = feb29
            .signed_duration_since(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
            .num_days();
        assert_eq!(civil_from_days(days), (2000, 2, 29));
        assert_eq!(civil_from_days(days + 1), (2000, 3, 1));

        // 1900 is not a leap year
        let mar1 = NaiveDate::from_ymd_opt(1900, 3, 1).unwrap();
        let days = mar1
            .signed_duration_since(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap())
            .num_days();
        assert_eq!(civil_from_days(days - 1), (1900, 2, 28));
    }

    #[test]
    fn test_matches_chrono_across_range() {
        let mut seconds = -62_167_219_200i64 * 3; // around year -3938
        while seconds < 253_402_300_800 * 2 {
            let civil = CivilDateTime::from_epoch_seconds(seconds);
            let expected = chrono::DateTime::from_timestamp(seconds, 0)
                .unwrap()
                .naive_utc();
            assert_eq!(civil.year, i64::from(expected.year()), "at {seconds}");
            assert_eq!(u32::from(civil.month), expected.month());
            assert_eq!(u32::from(civil.day), expected.day());
            assert_eq!(u32::from(civil.hour), expected.hour());
            assert_eq!(u32::from(civil.minute), expected.minute());
            assert_eq!(u32::from(civil.second), expected.second());
            seconds += 7_654_321;
        }
    }

    #[test]
    fn test_year_rendering() {
        let at = |year| CivilDateTime {
            year,
            month: 1,
            day: 2,
            hour: 3,
            minute: 4,
            second: 5,
        };
        assert_eq!(at(0).to_string(), "0000-01-02T03:04:05");
        assert_eq!(at(7).to_string(), "0007-01-02T03:04:05");
        assert_eq!(at(-1).to_string(), "-0001-01-02T03:04:05");
        assert_eq!(at(9_999).to_string(), "9999-01-02T03:04:05");
        assert_eq!(at(10_000).to_string(), "+10000-01-02T03:04:05");
        assert_eq!(at(294_247).to_string(), "+294247-01-02T03:04:05");
        assert_eq!(at(-290_308).to_string(), "-290308-01-02T03:04:05");
    }

    #[test]
    fn test_before_common_era() {
        assert_eq!(
            CivilDateTime::from_epoch_seconds(-62_167_219_200).to_string(),
            "0000-01-01T00:00:00"
        );
        assert_eq!(
            CivilDateTime::from_epoch_seconds(-62_167_219_201).to_string(),
            "-0001-12-31T23:59:59"
        );
    }

    #[test]
    fn test_first_five_digit_year() {
        assert_eq!(
            CivilDateTime::from_epoch_seconds(253_402_300_799).to_string(),
            "9999-12-31T23:59:59"
        );
        assert_eq!(
            CivilDateTime::from_epoch_seconds(253_402_300_800).to_string(),
            "+10000-01-01T00:00:00"
        );
    }

    #[test]
    fn test_extreme_seconds() {
        assert_eq!(
            CivilDateTime::from_epoch_seconds(i64::MIN.div_euclid(1_000_000)).to_string(),
            "-290308-12-21T19:59:05"
        );
        assert_eq!(
            CivilDateTime::from_epoch_seconds(i64::MAX / 1_000_000).to_string(),
            "+294247-01-10T04:00:54"
        );
    }
}
