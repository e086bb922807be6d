use crate::consts::{MYANMAR_MONTH_COUNT, MYANMAR_MONTH_NAMES, SECOND_WASO};
use crate::error::CalendarError;
use crate::year::YearType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Myanmar lunar month, numbered by its month index.
///
/// The numbering is fixed and shared with every presentation layer:
/// `FirstWaso` (0) only occurs in watat years, and `LateTagu` (13) and
/// `LateKason` (14) are the Tagu and Kason that begin before the Myanmar
/// new year and so still belong to the old year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MyanmarMonth {
    FirstWaso = 0,
    Tagu = 1,
    Kason = 2,
    Nayon = 3,
    Waso = 4,
    Wagaung = 5,
    Tawthalin = 6,
    Thadingyut = 7,
    Tazaungmon = 8,
    Nadaw = 9,
    Pyatho = 10,
    Tabodwe = 11,
    Tabaung = 12,
    LateTagu = 13,
    LateKason = 14,
}

impl MyanmarMonth {
    /// Every month in index order.
    pub const ALL: [Self; MYANMAR_MONTH_COUNT] = [
        Self::FirstWaso,
        Self::Tagu,
        Self::Kason,
        Self::Nayon,
        Self::Waso,
        Self::Wagaung,
        Self::Tawthalin,
        Self::Thadingyut,
        Self::Tazaungmon,
        Self::Nadaw,
        Self::Pyatho,
        Self::Tabodwe,
        Self::Tabaung,
        Self::LateTagu,
        Self::LateKason,
    ];

    /// Looks a month up by index.
    ///
    /// # Errors
    /// Returns `CalendarError::UnknownMonthIndex` for indices outside `0..=14`.
    pub fn from_index(index: i64) -> Result<Self, CalendarError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(CalendarError::UnknownMonthIndex { index })
    }

    /// Returns the month index, 0 to 14.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Table name of the month, ignoring the watat naming of Waso.
    pub const fn name(self) -> &'static str {
        MYANMAR_MONTH_NAMES[self as usize]
    }

    /// Name of the month in a year of the given type: Waso that follows
    /// First Waso is called Second Waso.
    pub const fn name_in(self, year_type: YearType) -> &'static str {
        match self {
            Self::Waso if year_type.is_watat() => SECOND_WASO,
            _ => self.name(),
        }
    }

    /// Number of days in the month: even indices have 30 days, odd 29,
    /// and Nayon gains a day in a big watat year.
    pub const fn length(self, year_type: YearType) -> u8 {
        let base = 30 - self.index() % 2;
        match self {
            Self::Nayon if year_type.is_big_watat() => base + 1,
            _ => base,
        }
    }

    /// Position of the month in the course of a Myanmar year, 1 for Tagu to
    /// 15 for Late Kason. First Waso falls between Nayon and Waso.
    pub const fn sequence(self) -> u8 {
        match self.index() {
            0 => 4,
            i @ 1..=3 => i,
            i => i + 1,
        }
    }

    /// `true` for the month inserted in watat years.
    pub const fn is_intercalary(self) -> bool {
        matches!(self, Self::FirstWaso)
    }

    /// `true` for Late Tagu and Late Kason.
    pub const fn is_late(self) -> bool {
        matches!(self, Self::LateTagu | Self::LateKason)
    }
}

impl TryFrom<u8> for MyanmarMonth {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_index(i64::from(value))
    }
}

impl From<MyanmarMonth> for u8 {
    fn from(month: MyanmarMonth) -> Self {
        month.index()
    }
}

impl fmt::Display for MyanmarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, month) in MyanmarMonth::ALL.iter().enumerate() {
            assert_eq!(usize::from(month.index()), i);
            assert_eq!(MyanmarMonth::from_index(i as i64).unwrap(), *month);
        }
    }

    #[test]
    fn test_unknown_index() {
        assert!(matches!(
            MyanmarMonth::from_index(15),
            Err(CalendarError::UnknownMonthIndex { index: 15 })
        ));
        assert!(matches!(
            MyanmarMonth::from_index(-1),
            Err(CalendarError::UnknownMonthIndex { index: -1 })
        ));
        assert!(MyanmarMonth::try_from(200u8).is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(MyanmarMonth::Tagu.name(), "Tagu");
        assert_eq!(MyanmarMonth::LateKason.to_string(), "Late Kason");
        assert_eq!(MyanmarMonth::FirstWaso.name(), "First Waso");
    }

    #[test]
    fn test_second_waso_only_in_watat_years() {
        assert_eq!(MyanmarMonth::Waso.name_in(YearType::Common), "Waso");
        assert_eq!(MyanmarMonth::Waso.name_in(YearType::LittleWatat), "Second Waso");
        assert_eq!(MyanmarMonth::Waso.name_in(YearType::BigWatat), "Second Waso");
        assert_eq!(MyanmarMonth::Nayon.name_in(YearType::BigWatat), "Nayon");
    }

    #[test]
    fn test_sequence_places_first_waso_before_waso() {
        assert_eq!(MyanmarMonth::Tagu.sequence(), 1);
        assert_eq!(MyanmarMonth::Nayon.sequence(), 3);
        assert_eq!(MyanmarMonth::FirstWaso.sequence(), 4);
        assert_eq!(MyanmarMonth::Waso.sequence(), 5);
        assert_eq!(MyanmarMonth::LateKason.sequence(), 15);
    }

    #[test]
    fn test_lengths() {
        assert_eq!(MyanmarMonth::FirstWaso.length(YearType::LittleWatat), 30);
        assert_eq!(MyanmarMonth::Tagu.length(YearType::Common), 29);
        assert_eq!(MyanmarMonth::Kason.length(YearType::Common), 30);
        assert_eq!(MyanmarMonth::Nayon.length(YearType::Common), 29);
        assert_eq!(MyanmarMonth::Nayon.length(YearType::LittleWatat), 29);
        assert_eq!(MyanmarMonth::Nayon.length(YearType::BigWatat), 30);
        assert_eq!(MyanmarMonth::Tabaung.length(YearType::Common), 30);
        assert_eq!(MyanmarMonth::LateTagu.length(YearType::Common), 29);
    }

    #[test]
    fn test_regular_year_lengths_add_up() {
        for year_type in [YearType::Common, YearType::LittleWatat, YearType::BigWatat] {
            let total: u16 = MyanmarMonth::ALL[1..=12]
                .iter()
                .map(|m| u16::from(m.length(year_type)))
                .sum::<u16>()
                + if year_type.is_watat() {
                    u16::from(MyanmarMonth::FirstWaso.length(year_type))
                } else {
                    0
                };
            assert_eq!(total, year_type.length(), "{year_type}");
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&MyanmarMonth::Pyatho).unwrap();
        assert_eq!(json, r#""Pyatho""#);
        let parsed: MyanmarMonth = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, MyanmarMonth::Pyatho);
    }
}
