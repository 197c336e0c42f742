//! Holds the error type of this crate.

use thiserror::Error;

/// Everything that can go wrong while converting or formatting a date.
#[derive(Debug, Error)]
pub enum Error {
    /// The Gregorian month is not in 1..=12.
    #[error("month {0} is out of range (1 to 12)")]
    InvalidMonth(u8),
    /// The Gregorian day is not in 1..=31.
    #[error("day {0} is out of range (1 to 31)")]
    InvalidDay(u8),
    /// The Jalali year of this Gregorian year does not fit in an `i32`.
    #[error("the Jalali year of Gregorian year {0} is out of range")]
    YearOutOfRange(i32),
    /// A free-form date could not be parsed.
    #[error("could not parse `{input}` as a date")]
    Parse {
        input: String,
        #[source]
        source: parse_datetime::ParseDateTimeError,
    },
    /// Reading, parsing or formatting time failed.
    #[error(transparent)]
    Time(#[from] jiff::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidMonth(13).to_string(),
            "month 13 is out of range (1 to 12)"
        );
        assert_eq!(
            Error::InvalidDay(0).to_string(),
            "day 0 is out of range (1 to 31)"
        );
    }
}
