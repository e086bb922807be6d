//! Myanmar year classification: watat detection and the start of the year.
//!
//! A year is classified from two quantities per era: the excess of the
//! solar year count over whole lunar months, which decides whether the
//! year carries an intercalary month, and the full moon day of (second)
//! Waso, which pins the year to the lunar cycle. Only watat years give an
//! exact full moon, so ordinary years are counted forward from the nearest
//! watat year before them.

use crate::consts::{
    BIG_WATAT_YEAR_DAYS, COMMON_YEAR_DAYS, ERAS, Era, KALI_YUGA_OFFSET, LITTLE_WATAT_YEAR_DAYS,
    LUNAR_MONTH, MAX_MYANMAR_YEAR, MIN_MYANMAR_YEAR, MYANMAR_EPOCH, SOLAR_YEAR,
    TAGU_BEFORE_FULL_MOON, WATAT_LOOKBACK,
};
use crate::error::{CalendarError, InvalidInput};
use crate::julian::JulianDay;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordinary, little watat or big watat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum YearType {
    #[display(fmt = "common")]
    Common,
    /// Watat year with an intercalary month.
    #[display(fmt = "little watat")]
    LittleWatat,
    /// Watat year with an intercalary month and an extra day in Nayon.
    #[display(fmt = "big watat")]
    BigWatat,
}

impl YearType {
    /// Returns `true` if the year carries First Waso.
    pub const fn is_watat(self) -> bool {
        !matches!(self, Self::Common)
    }

    /// Returns `true` if Nayon also has 30 days.
    pub const fn is_big_watat(self) -> bool {
        matches!(self, Self::BigWatat)
    }

    /// Number of days from the 1st of Tagu to the next 1st of Tagu.
    pub const fn length(self) -> u16 {
        match self {
            Self::Common => COMMON_YEAR_DAYS,
            Self::LittleWatat => LITTLE_WATAT_YEAR_DAYS,
            Self::BigWatat => BIG_WATAT_YEAR_DAYS,
        }
    }
}

/// Classification of one Myanmar year.
///
/// Only built by [`classify_year`], so it serializes but never
/// deserializes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MyanmarYearInfo {
    year: i64,
    year_type: YearType,
    start: i64,
    full_moon: i64,
}

impl MyanmarYearInfo {
    /// Myanmar Era year number.
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns whether the year is common, little watat or big watat.
    pub const fn year_type(&self) -> YearType {
        self.year_type
    }

    /// Returns `true` for little and big watat years.
    pub const fn is_watat(&self) -> bool {
        self.year_type.is_watat()
    }

    /// Returns `true` for big watat years.
    pub const fn is_big_watat(&self) -> bool {
        self.year_type.is_big_watat()
    }

    /// Returns the number of days from this year's 1st of Tagu to the next.
    pub const fn length(&self) -> u16 {
        self.year_type.length()
    }

    /// Julian day number of the 1st waxing of Tagu.
    pub const fn start_day_number(&self) -> i64 {
        self.start
    }

    /// Julian Day at the midnight starting the 1st waxing of Tagu.
    pub fn start_day(&self) -> JulianDay {
        JulianDay::from_day_number(self.start)
    }

    /// Julian day number of the full moon of Waso (Second Waso in a watat
    /// year).
    pub const fn full_moon_day_number(&self) -> i64 {
        self.full_moon
    }
}

/// Watat status and Waso full moon of a single year, before anchoring.
#[derive(Debug, Clone, Copy)]
struct WatatTest {
    full_moon: i64,
    is_watat: bool,
}

impl Era {
    /// The era a Myanmar year belongs to, if the calendar knows it.
    pub fn for_year(year: i64) -> Option<&'static Self> {
        ERAS.iter().find(|era| year >= era.first_year)
    }

    fn full_moon_offset_for(&self, year: i64) -> f64 {
        self.full_moon_offset
            + self
                .full_moon_exceptions
                .iter()
                .find(|(y, _)| *y == year)
                .map_or(0.0, |(_, days)| *days)
    }

    fn watat_exception_for(&self, year: i64) -> Option<bool> {
        self.watat_exceptions
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, watat)| *watat)
    }
}

fn watat_test(year: i64) -> Result<WatatTest, CalendarError> {
    let era = Era::for_year(year).ok_or(InvalidInput::OutOfRange { year })?;

    // mean excess of a twelfth of the solar year over a lunar month
    let monthly_excess = SOLAR_YEAR / 12.0 - LUNAR_MONTH;
    let adjust_threshold = monthly_excess * (12.0 - era.intercalation);
    let mut excess = (SOLAR_YEAR * (year + KALI_YUGA_OFFSET) as f64) % LUNAR_MONTH;
    if excess < adjust_threshold {
        excess += LUNAR_MONTH;
    }

    let full_moon = (SOLAR_YEAR * year as f64 + MYANMAR_EPOCH - excess
        + 4.5 * LUNAR_MONTH
        + era.full_moon_offset_for(year))
    .round() as i64;

    let watat_threshold = LUNAR_MONTH - monthly_excess * era.intercalation;
    let is_watat = era
        .watat_exception_for(year)
        .unwrap_or(excess >= watat_threshold);

    Ok(WatatTest {
        full_moon,
        is_watat,
    })
}

/// Classifies a Myanmar year and finds the day it starts on.
///
/// # Errors
/// Returns `InvalidInput::OutOfRange` for years outside
/// `MIN_MYANMAR_YEAR..=MAX_MYANMAR_YEAR`, and
/// `CalendarError::YearClassificationUnresolved` when no watat year within
/// `WATAT_LOOKBACK` years anchors it.
///
/// ```
/// use myanmar_date::{classify_year, YearType};
///
/// let info = classify_year(1385).unwrap();
/// assert_eq!(info.year_type(), YearType::BigWatat);
/// assert_eq!(info.length(), 385);
/// ```
#[tracing::instrument(level = "trace")]
pub fn classify_year(year: i64) -> Result<MyanmarYearInfo, CalendarError> {
    if !(MIN_MYANMAR_YEAR..=MAX_MYANMAR_YEAR).contains(&year) {
        return Err(InvalidInput::OutOfRange { year }.into());
    }

    let this = watat_test(year)?;
    let mut anchor = None;
    for back in 1..=WATAT_LOOKBACK {
        let candidate = watat_test(year - back)?;
        if candidate.is_watat {
            anchor = Some((back, candidate));
            break;
        }
    }
    let unresolved = CalendarError::YearClassificationUnresolved {
        year,
        lookback: WATAT_LOOKBACK,
    };
    let Some((back, anchor)) = anchor else {
        return Err(unresolved);
    };

    let counted_full_moon = anchor.full_moon + i64::from(COMMON_YEAR_DAYS) * back;
    let (year_type, full_moon) = if this.is_watat {
        // Waso full moons of consecutive watat years are 30 or 31 days
        // apart modulo a common year.
        match (this.full_moon - anchor.full_moon).rem_euclid(i64::from(COMMON_YEAR_DAYS)) {
            30 => (YearType::LittleWatat, this.full_moon),
            31 => (YearType::BigWatat, this.full_moon),
            _ => return Err(unresolved),
        }
    } else {
        (YearType::Common, counted_full_moon)
    };

    let info = MyanmarYearInfo {
        year,
        year_type,
        start: counted_full_moon - TAGU_BEFORE_FULL_MOON,
        full_moon,
    };
    debug!(year, %year_type, start = info.start, anchor_back = back, "classified year");
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_types() {
        for (year, expected) in [
            (1312, YearType::BigWatat),
            (1361, YearType::LittleWatat),
            (1377, YearType::BigWatat),
            (1381, YearType::Common),
            (1382, YearType::LittleWatat),
            (1383, YearType::Common),
            (1384, YearType::Common),
            (1385, YearType::BigWatat),
            (1386, YearType::Common),
            (1387, YearType::Common),
            (1388, YearType::BigWatat),
        ] {
            assert_eq!(classify_year(year).unwrap().year_type(), expected, "ME {year}");
        }
    }

    #[test]
    fn test_decreed_watat_exceptions() {
        // ME 1344 was declared watat in place of ME 1345.
        assert!(classify_year(1344).unwrap().is_watat());
        assert!(!classify_year(1345).unwrap().is_watat());
    }

    #[test]
    fn test_start_days() {
        for (year, start, full_moon) in [
            (1344, 2_445_054, 2_445_186),
            (1361, 2_451_255, 2_451_387),
            (1377, 2_457_102, 2_457_235),
            (1381, 2_458_579, 2_458_681),
            (1385, 2_460_025, 2_460_158),
            (1387, 2_460_764, 2_460_866),
        ] {
            let info = classify_year(year).unwrap();
            assert_eq!(info.start_day_number(), start, "ME {year} start");
            assert_eq!(info.full_moon_day_number(), full_moon, "ME {year} full moon");
        }
    }

    #[test]
    fn test_start_day_is_midnight() {
        let info = classify_year(1381).unwrap();
        assert_eq!(info.start_day().to_gregorian().unwrap(), (2019, 4, 5));
        assert_eq!(info.start_day().get(), 2_458_578.5);
    }

    #[test]
    fn test_year_lengths_match_start_days() {
        for year in 1312..1500 {
            let this = classify_year(year).unwrap();
            let next = classify_year(year + 1).unwrap();
            assert_eq!(
                next.start_day_number() - this.start_day_number(),
                i64::from(this.length()),
                "ME {year} ({})",
                this.year_type()
            );
        }
    }

    #[test]
    fn test_start_day_strictly_increases() {
        let mut previous = classify_year(MIN_MYANMAR_YEAR).unwrap().start_day_number();
        for year in MIN_MYANMAR_YEAR + 1..=2500 {
            let start = classify_year(year).unwrap().start_day_number();
            assert!(start > previous, "ME {year}");
            previous = start;
        }
    }

    #[test]
    fn test_watat_cadence() {
        let watat_years: Vec<i64> = (MIN_MYANMAR_YEAR..=3000)
            .filter(|&y| classify_year(y).unwrap().is_watat())
            .collect();
        for pair in watat_years.windows(2) {
            let gap = pair[1] - pair[0];
            assert!((2..=3).contains(&gap), "gap {gap} after ME {}", pair[0]);
        }
        // seven intercalations in nineteen years, on average
        let ratio = watat_years.len() as f64 / (3000 - MIN_MYANMAR_YEAR + 1) as f64;
        assert!((ratio - 7.0 / 19.0).abs() < 0.01, "ratio {ratio}");
    }

    #[test]
    fn test_out_of_range_years() {
        assert!(matches!(
            classify_year(1311),
            Err(CalendarError::InvalidInput(InvalidInput::OutOfRange {
                year: 1311
            }))
        ));
        assert!(classify_year(MAX_MYANMAR_YEAR).is_ok());
        assert!(classify_year(MAX_MYANMAR_YEAR + 1).is_err());
    }

    #[test]
    fn test_era_lookup() {
        assert_eq!(Era::for_year(1312).map(|e| e.first_year), Some(1312));
        assert_eq!(Era::for_year(1311).map(|e| e.first_year), Some(1217));
        assert!(Era::for_year(1216).is_none());
    }

    #[test]
    fn test_year_info_serializes() {
        let json = serde_json::to_string(&classify_year(1385).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"year":1385,"year_type":"BigWatat","start":2460025,"full_moon":2460158}"#
        );
    }

    #[test]
    fn test_year_type_lengths() {
        assert_eq!(YearType::Common.length(), 354);
        assert_eq!(YearType::LittleWatat.length(), 384);
        assert_eq!(YearType::BigWatat.length(), 385);
        assert!(!YearType::Common.is_watat());
        assert!(YearType::LittleWatat.is_watat());
        assert!(!YearType::LittleWatat.is_big_watat());
        assert!(YearType::BigWatat.is_big_watat());
    }
}
