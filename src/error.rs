//! Error types for the myanmar_date crate.

use crate::consts::{
    MAX_DAY_NUMBER, MAX_MONTH, MAX_MYANMAR_YEAR, MAX_YEAR, MIN_DAY_NUMBER, MIN_MYANMAR_YEAR,
};
use crate::prelude::*;

/// Failure to read a Gregorian date field.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Input the converter refuses to work with.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    /// A Gregorian field is outside its domain.
    #[error(transparent)]
    Date(#[from] ParseError),

    /// The Julian Day is NaN or infinite.
    #[error("Julian day {jd} is not a finite number")]
    NonFinite { jd: f64 },

    /// The Julian day number is past the proleptic Gregorian years
    /// -9999..=9999.
    #[error("Julian day number {jdn} is outside the supported range {min}..={max}", min = MIN_DAY_NUMBER, max = MAX_DAY_NUMBER)]
    DayNumberOutOfRange { jdn: i64 },

    /// The Gregorian year is not one a `GregorianDate` can hold.
    #[error("Gregorian year {year} is outside the supported range 1..={max}", max = MAX_YEAR)]
    GregorianYearOutOfRange { year: i32 },

    /// The date falls in a Myanmar year the calendar is not validated for.
    #[error("Myanmar year {year} is outside the supported range {min}..={max}", min = MIN_MYANMAR_YEAR, max = MAX_MYANMAR_YEAR)]
    OutOfRange { year: i64 },
}

/// Error type for every fallible conversion in this crate.
///
/// None of these are recoverable by the converter itself: callers should
/// handle the error rather than fall back to a guessed lunar date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// The caller supplied a date or Julian Day the converter cannot use.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// No watat year was found to anchor the year, or the anchor produced
    /// an impossible full moon spacing.
    #[error("cannot classify Myanmar year {year}: no consistent watat anchor within {lookback} years")]
    YearClassificationUnresolved { year: i64, lookback: i64 },

    /// The decomposer produced a month index missing from the month table.
    /// This is a bug, never a user error.
    #[error("month index {index} is not in the Myanmar month table")]
    UnknownMonthIndex { index: i64 },
}

impl From<ParseError> for CalendarError {
    fn from(err: ParseError) -> Self {
        Self::InvalidInput(InvalidInput::Date(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            ParseError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ParseError::InvalidDay {
                month: 2,
                day: 30,
                year: 2024
            }
            .to_string(),
            "Invalid day 30 for month 2024-02"
        );
        assert_eq!(ParseError::EmptyInput.to_string(), "Empty date string");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = InvalidInput::OutOfRange { year: 1311 };
        assert_eq!(
            err.to_string(),
            "Myanmar year 1311 is outside the supported range 1312..=9999"
        );
    }

    #[test]
    fn test_gregorian_range_display() {
        assert_eq!(
            InvalidInput::DayNumberOutOfRange { jdn: 6_000_000 }.to_string(),
            "Julian day number 6000000 is outside the supported range -1930999..=5373484"
        );
        assert_eq!(
            InvalidInput::GregorianYearOutOfRange { year: -44 }.to_string(),
            "Gregorian year -44 is outside the supported range 1..=9999"
        );
    }

    #[test]
    fn test_parse_error_converts_to_invalid_input() {
        let err: CalendarError = ParseError::InvalidYear(0).into();
        assert!(matches!(
            err,
            CalendarError::InvalidInput(InvalidInput::Date(ParseError::InvalidYear(0)))
        ));
        assert_eq!(
            err.to_string(),
            "invalid input: Invalid year: 0 (must be 1-9999)"
        );
    }

    #[test]
    fn test_unknown_month_index_display() {
        let err = CalendarError::UnknownMonthIndex { index: 15 };
        assert_eq!(
            err.to_string(),
            "month index 15 is not in the Myanmar month table"
        );
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ParseError>();
        assert_impl::<InvalidInput>();
        assert_impl::<CalendarError>();
    }
}
