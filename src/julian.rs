//! Continuous day count shared by every calendar in this crate.

use crate::consts::{MAX_DAY_NUMBER, MIN_DAY_NUMBER};
use crate::error::InvalidInput;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A Julian Day: days since noon UT on January 1, 4713 BC (proleptic Julian).
///
/// Dates built from a Gregorian calendar day sit on the `.5` boundary, the
/// midnight that starts that day.
///
/// ```
/// use myanmar_date::JulianDay;
///
/// let jd = JulianDay::from_gregorian(2000, 1, 1);
/// assert_eq!(jd.get(), 2_451_544.5);
/// assert_eq!(jd.day_number().unwrap(), 2_451_545);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(f64);

impl JulianDay {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Computes the Julian Day at the start of a proleptic Gregorian date.
    ///
    /// January and February count as months 13 and 14 of the previous year,
    /// which folds the leap day into the end of the shifted year so the
    /// century correction stays plain integer arithmetic.
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Self {
        let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
        let (year, month) = if month <= 2 {
            (year - 1, month + 12)
        } else {
            (year, month)
        };
        let century = year.div_euclid(100);
        let correction = 2 - century + century.div_euclid(4);

        Self(
            (365.25 * (year + 4716) as f64).floor()
                + (30.6001 * (month + 1) as f64).floor()
                + (day + correction) as f64
                - 1524.5,
        )
    }

    /// Julian Day at the midnight starting the day numbered `jdn`.
    pub fn from_day_number(jdn: i64) -> Self {
        Self(jdn as f64 - 0.5)
    }

    /// The Julian day number: the integer day containing this instant.
    ///
    /// # Errors
    /// Returns `InvalidInput::NonFinite` for NaN or infinite values.
    pub fn day_number(self) -> Result<i64, InvalidInput> {
        if !self.0.is_finite() {
            return Err(InvalidInput::NonFinite { jd: self.0 });
        }
        Ok((self.0 + 0.5).floor() as i64)
    }

    /// Proleptic Gregorian `(year, month, day)` of the day containing this
    /// instant. `year` is astronomical, so 1 BC is `0`.
    ///
    /// # Errors
    /// Returns `InvalidInput::NonFinite` for NaN or infinite values and
    /// `InvalidInput::DayNumberOutOfRange` for days outside the years
    /// -9999..=9999.
    pub fn to_gregorian(self) -> Result<(i32, i32, i32), InvalidInput> {
        let jdn = self.day_number()?;
        if !(MIN_DAY_NUMBER..=MAX_DAY_NUMBER).contains(&jdn) {
            return Err(InvalidInput::DayNumberOutOfRange { jdn });
        }
        let f = jdn + 1401 + (((4 * jdn + 274_277).div_euclid(146_097)) * 3).div_euclid(4) - 38;
        let e = 4 * f + 3;
        let g = e.rem_euclid(1461).div_euclid(4);
        let h = 5 * g + 2;
        let day = h.rem_euclid(153).div_euclid(5) + 1;
        let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
        let year = e.div_euclid(1461) - 4716 + (12 + 2 - month).div_euclid(12);
        Ok((year as i32, month as i32, day as i32))
    }
}

impl Add<i64> for JulianDay {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        Self(self.0 + days as f64)
    }
}

impl Sub for JulianDay {
    type Output = f64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}
