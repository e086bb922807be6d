//! Conversion of Gregorian dates into the traditional Myanmar lunar calendar.
//!
//! The pipeline is three pure steps: a Gregorian date becomes a
//! [`JulianDay`], the Julian Day is placed in a classified Myanmar year
//! ([`classify_year`]), and the day within that year is split into month,
//! day and moon phase ([`decompose`]). The result, a [`MyanmarDate`], can
//! be flattened into a [`MyanmarDateRecord`] for presentation code.
//!
//! Only the modern era of the calendar is supported, Myanmar years 1312
//! (April 1950) to 9999.
//!
//! ```
//! use myanmar_date::{convert, MoonPhase};
//!
//! let date = convert(2026, 1, 15).unwrap();
//! assert_eq!(date.year(), 1387);
//! assert_eq!(date.month_name(), "Pyatho");
//! assert_eq!(date.moon_phase(), MoonPhase::Waning);
//! assert_eq!(date.fortnight_day(), 13);
//! ```
//!
//! Errors are values: a date before 1950 or a malformed field comes back
//! as a [`CalendarError`] rather than a guessed lunar date.
//!
//! ```
//! use myanmar_date::{convert, CalendarError};
//!
//! assert!(matches!(convert(1900, 1, 1), Err(CalendarError::InvalidInput(_))));
//! assert!(matches!(convert(2020, 13, 1), Err(CalendarError::InvalidInput(_))));
//! ```

mod consts;
mod date;
mod decompose;
mod error;
mod gregorian;
mod julian;
mod month;
mod prelude;
mod record;
mod year;

pub use consts::*;
pub use date::{MoonPhase, MyanmarDate, Sabbath};
pub use decompose::decompose;
pub use error::{CalendarError, InvalidInput, ParseError};
pub use gregorian::{Day, GregorianDate, Month, Year, days_in_month, is_leap_year};
pub use julian::JulianDay;
pub use month::MyanmarMonth;
pub use record::{MyanmarDateRecord, to_public_record};
pub use year::{MyanmarYearInfo, YearType, classify_year};

/// Converts a Gregorian calendar date into a Myanmar date.
///
/// # Errors
/// Returns `CalendarError::InvalidInput` if a field is out of its domain or
/// the date is outside the supported Myanmar years, and passes on the
/// errors of [`decompose`].
#[tracing::instrument(level = "debug")]
pub fn convert(year: u16, month: u8, day: u8) -> Result<MyanmarDate, CalendarError> {
    convert_date(GregorianDate::new(year, month, day)?)
}

/// Converts an already validated Gregorian date.
///
/// # Errors
/// See [`decompose`].
pub fn convert_date(date: GregorianDate) -> Result<MyanmarDate, CalendarError> {
    decompose(date.julian_day())
}

/// Parses an ISO 8601 date (`YYYY-MM-DD`) and converts it.
///
/// # Errors
/// Returns `CalendarError::InvalidInput` for unparseable input, otherwise
/// see [`convert`].
///
/// ```
/// use myanmar_date::convert_str;
///
/// let date = convert_str("2023-08-01").unwrap();
/// assert_eq!(date.to_string(), "1385 ME Second Waso Full Moon");
/// ```
pub fn convert_str(s: &str) -> Result<MyanmarDate, CalendarError> {
    convert_date(s.parse()?)
}

/// Converts a Gregorian date straight into the public record.
///
/// # Errors
/// See [`convert`] and [`to_public_record`].
pub fn convert_to_record(year: u16, month: u8, day: u8) -> Result<MyanmarDateRecord, CalendarError> {
    to_public_record(&convert(year, month, day)?)
}
