//! Flat record of a Myanmar date for presentation layers.

use crate::consts::MYANMAR_MONTH_NAMES;
use crate::date::{MoonPhase, MyanmarDate};
use crate::error::CalendarError;
use serde::{Deserialize, Serialize};

/// The public shape of a converted date.
///
/// Field names and month indices are a stable contract with UI code, which
/// serializes this record with camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyanmarDateRecord {
    pub myanmar_year: i64,
    pub month_index: u8,
    pub month_name: String,
    /// Day of the month, 1 to 30.
    pub day: u8,
    pub moon_phase: MoonPhase,
    pub is_watat: bool,
    /// Day within the fortnight, 1 to 15.
    pub fortnight_day: u8,
}

/// Flattens a date into its public record.
///
/// # Errors
/// Returns `CalendarError::UnknownMonthIndex` if the month index is missing
/// from the month name table.
pub fn to_public_record(date: &MyanmarDate) -> Result<MyanmarDateRecord, CalendarError> {
    let index = date.month_index();
    if usize::from(index) >= MYANMAR_MONTH_NAMES.len() {
        return Err(CalendarError::UnknownMonthIndex {
            index: i64::from(index),
        });
    }

    Ok(MyanmarDateRecord {
        myanmar_year: date.year(),
        month_index: index,
        month_name: date.month_name().to_owned(),
        day: date.day(),
        moon_phase: date.moon_phase(),
        is_watat: date.is_watat(),
        fortnight_day: date.fortnight_day(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::MyanmarMonth;
    use crate::year::YearType;

    #[test]
    fn test_record_fields() {
        let date = MyanmarDate {
            day_number: 2_458_850,
            year: 1381,
            year_type: YearType::Common,
            month: MyanmarMonth::Pyatho,
            day: 7,
        };
        let record = to_public_record(&date).unwrap();
        assert_eq!(
            record,
            MyanmarDateRecord {
                myanmar_year: 1381,
                month_index: 10,
                month_name: "Pyatho".to_owned(),
                day: 7,
                moon_phase: MoonPhase::Waxing,
                is_watat: false,
                fortnight_day: 7,
            }
        );
    }

    #[test]
    fn test_record_names_second_waso() {
        let date = MyanmarDate {
            day_number: 0,
            year: 1382,
            year_type: YearType::LittleWatat,
            month: MyanmarMonth::Waso,
            day: 20,
        };
        let record = to_public_record(&date).unwrap();
        assert_eq!(record.month_name, "Second Waso");
        assert_eq!(record.month_index, 4);
        assert_eq!(record.fortnight_day, 5);
        assert_eq!(record.moon_phase, MoonPhase::Waning);
        assert!(record.is_watat);
    }

    #[test]
    fn test_record_name_matches_date_name() {
        for year_type in [YearType::Common, YearType::LittleWatat, YearType::BigWatat] {
            for month in MyanmarMonth::ALL {
                let date = MyanmarDate {
                    day_number: 0,
                    year: 1385,
                    year_type,
                    month,
                    day: 1,
                };
                let record = to_public_record(&date).unwrap();
                assert_eq!(record.month_name, date.month_name(), "{month:?} {year_type}");
                assert_eq!(record.month_index, month.index());
            }
        }
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let date = MyanmarDate {
            day_number: 0,
            year: 1381,
            year_type: YearType::Common,
            month: MyanmarMonth::Nadaw,
            day: 15,
        };
        let json = serde_json::to_string(&to_public_record(&date).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"myanmarYear":1381,"monthIndex":9,"monthName":"Nadaw","day":15,"moonPhase":"FullMoon","isWatat":false,"fortnightDay":15}"#
        );
        let parsed: MyanmarDateRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.month_name, "Nadaw");
    }
}
