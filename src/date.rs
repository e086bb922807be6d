use crate::error::CalendarError;
use crate::julian::JulianDay;
use crate::month::MyanmarMonth;
use crate::prelude::*;
use crate::record::MyanmarDateRecord;
use crate::year::YearType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Waxing (1st to 14th), full moon (15th), waning, or new moon (last day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum MoonPhase {
    #[display(fmt = "Waxing")]
    Waxing,
    #[display(fmt = "Full Moon")]
    FullMoon,
    #[display(fmt = "Waning")]
    Waning,
    #[display(fmt = "New Moon")]
    NewMoon,
}

impl MoonPhase {
    /// Phase of a day in a month of `month_length` days.
    pub const fn for_day(day: u8, month_length: u8) -> Self {
        if day == 15 {
            Self::FullMoon
        } else if day == month_length {
            Self::NewMoon
        } else if day < 15 {
            Self::Waxing
        } else {
            Self::Waning
        }
    }

    /// `true` for the full and new moon, whose day number is not spoken.
    pub const fn is_named_day(self) -> bool {
        matches!(self, Self::FullMoon | Self::NewMoon)
    }
}

/// Buddhist sabbath (uposatha) status of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Sabbath {
    /// 8th waxing, full moon, 8th waning and new moon.
    #[display(fmt = "Sabbath")]
    Sabbath,
    /// The day before a sabbath.
    #[display(fmt = "Sabbath Eve")]
    SabbathEve,
}

impl Sabbath {
    /// Sabbath status of a day in a month of `month_length` days.
    pub const fn for_day(day: u8, month_length: u8) -> Option<Self> {
        if day == 8 || day == 15 || day == 23 || day == month_length {
            Some(Self::Sabbath)
        } else if day == 7 || day == 14 || day == 22 || day + 1 == month_length {
            Some(Self::SabbathEve)
        } else {
            None
        }
    }
}

/// A date in the Myanmar lunar calendar.
///
/// Built in one piece by [`decompose`](crate::decompose); every field is
/// consistent with the others, so it serializes but never deserializes.
///
/// ```
/// use myanmar_date::{convert, MoonPhase, MyanmarMonth};
///
/// let date = convert(2020, 1, 1).unwrap();
/// assert_eq!(date.year(), 1381);
/// assert_eq!(date.month(), MyanmarMonth::Pyatho);
/// assert_eq!(date.moon_phase(), MoonPhase::Waxing);
/// assert_eq!(date.fortnight_day(), 7);
/// assert_eq!(date.to_string(), "1381 ME Pyatho Waxing 7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MyanmarDate {
    pub(crate) day_number: i64,
    pub(crate) year: i64,
    pub(crate) year_type: YearType,
    pub(crate) month: MyanmarMonth,
    pub(crate) day: u8,
}

impl MyanmarDate {
    /// Converts a Julian Day.
    ///
    /// # Errors
    /// See [`decompose`](crate::decompose).
    pub fn from_julian_day(jd: JulianDay) -> Result<Self, CalendarError> {
        crate::decompose(jd)
    }

    /// Julian day number this date was computed from.
    pub const fn day_number(&self) -> i64 {
        self.day_number
    }

    /// Myanmar Era year.
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the type of the Myanmar year this date falls in.
    pub const fn year_type(&self) -> YearType {
        self.year_type
    }

    /// Returns `true` if the year carries First Waso.
    pub const fn is_watat(&self) -> bool {
        self.year_type.is_watat()
    }

    /// Returns the month of the date.
    pub const fn month(&self) -> MyanmarMonth {
        self.month
    }

    /// Returns the month index, 0 to 14.
    pub const fn month_index(&self) -> u8 {
        self.month.index()
    }

    /// Returns the month name, Second Waso for Waso in a watat year.
    pub const fn month_name(&self) -> &'static str {
        self.month.name_in(self.year_type)
    }

    /// Returns the number of days in the month, 29 or 30.
    pub const fn month_length(&self) -> u8 {
        self.month.length(self.year_type)
    }

    /// Day of the month, 1 to 29 or 30.
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day within the waxing or waning fortnight, 1 to 15.
    pub const fn fortnight_day(&self) -> u8 {
        if self.day > 15 { self.day - 15 } else { self.day }
    }

    /// Returns the moon phase of the day.
    pub const fn moon_phase(&self) -> MoonPhase {
        MoonPhase::for_day(self.day, self.month_length())
    }

    /// Returns the sabbath status of the day, if any.
    pub const fn sabbath(&self) -> Option<Sabbath> {
        Sabbath::for_day(self.day, self.month_length())
    }

    /// Flattens this date into the record handed to presentation code.
    ///
    /// # Errors
    /// See [`to_public_record`](crate::to_public_record).
    pub fn to_record(&self) -> Result<MyanmarDateRecord, CalendarError> {
        crate::to_public_record(self)
    }
}

impl fmt::Display for MyanmarDate {
    /// `1381 ME Pyatho Waxing 7`, or `1381 ME Nadaw Full Moon` on the
    /// full and new moon.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = self.moon_phase();
        write!(f, "{} ME {} {}", self.year, self.month_name(), phase)?;
        if !phase.is_named_day() {
            write!(f, " {}", self.fortnight_day())?;
        }
        Ok(())
    }
}
