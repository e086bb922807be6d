/// Maximum valid Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Julian day number of -9999-01-01, the first day `JulianDay::to_gregorian`
/// accepts (astronomical year numbering).
pub const MIN_DAY_NUMBER: i64 = -1_930_999;

/// Julian day number of 9999-12-31.
pub const MAX_DAY_NUMBER: i64 = 5_373_484;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Mean length of the solar year in days (≈365.2587565).
pub const SOLAR_YEAR: f64 = 1_577_917_828.0 / 4_320_000.0;

/// Mean length of the synodic month in days (≈29.53058795).
pub const LUNAR_MONTH: f64 = 1_577_917_828.0 / 53_433_336.0;

/// Julian Day of the beginning of Myanmar Era year 0.
pub const MYANMAR_EPOCH: f64 = 1_954_168.050_623;

/// Offset added to a Myanmar year to count solar years from the Kali Yuga.
pub(crate) const KALI_YUGA_OFFSET: i64 = 3739;

/// First Myanmar year of the modern (post-independence) era.
pub const MIN_MYANMAR_YEAR: i64 = 1312;

/// Last Myanmar year accepted by the converter.
pub const MAX_MYANMAR_YEAR: i64 = 9999;

/// How far back the classifier searches for an anchoring watat year.
pub const WATAT_LOOKBACK: i64 = 3;

/// Days in an ordinary year: twelve months alternating 30 and 29 days.
pub const COMMON_YEAR_DAYS: u16 = 354;
/// Days in a watat year carrying the intercalary 30-day First Waso.
pub const LITTLE_WATAT_YEAR_DAYS: u16 = 384;
/// A big watat year also adds a day to Nayon.
pub const BIG_WATAT_YEAR_DAYS: u16 = 385;

/// Distance from the second Waso full moon back to the 1st of Tagu.
pub(crate) const TAGU_BEFORE_FULL_MOON: i64 = 102;

/// Number of entries in the Myanmar month table.
pub const MYANMAR_MONTH_COUNT: usize = 15;

/// English month names indexed by month index. Index 0 is the intercalary
/// month inserted in watat years, 13 and 14 are the late months that close a
/// Myanmar year after the 1st of Tagu.
pub const MYANMAR_MONTH_NAMES: [&str; MYANMAR_MONTH_COUNT] = [
    "First Waso",
    "Tagu",
    "Kason",
    "Nayon",
    "Waso",
    "Wagaung",
    "Tawthalin",
    "Thadingyut",
    "Tazaungmon",
    "Nadaw",
    "Pyatho",
    "Tabodwe",
    "Tabaung",
    "Late Tagu",
    "Late Kason",
];

/// Name of Waso in a watat year, following First Waso.
pub const SECOND_WASO: &str = "Second Waso";

/// Calendar parameters for one era of the Myanmar calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Era {
    /// First Myanmar year of the era.
    pub first_year: i64,
    /// Full moon offset in days (`WO`).
    pub full_moon_offset: f64,
    /// Intercalation parameter (`NM`): number of months to adjust the
    /// excess-days threshold by.
    pub intercalation: f64,
    /// Per-year corrections to the full moon offset.
    pub full_moon_exceptions: &'static [(i64, f64)],
    /// Years whose watat status is fixed by decree.
    pub watat_exceptions: &'static [(i64, bool)],
}

/// The era after independence.
pub const THIRD_ERA: Era = Era {
    first_year: MIN_MYANMAR_YEAR,
    full_moon_offset: -0.5,
    intercalation: 8.0,
    full_moon_exceptions: &[(1377, 1.0)],
    watat_exceptions: &[(1344, true), (1345, false)],
};

/// Only consulted as the watat anchor for the first years of the third era.
pub const SECOND_ERA: Era = Era {
    first_year: 1217,
    full_moon_offset: -1.0,
    intercalation: 4.0,
    full_moon_exceptions: &[],
    watat_exceptions: &[],
};

/// Known eras, newest first.
pub static ERAS: [Era; 2] = [THIRD_ERA, SECOND_ERA];
