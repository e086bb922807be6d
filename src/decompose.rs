//! Julian Day to Myanmar date.

use crate::consts::{MAX_MYANMAR_YEAR, MIN_MYANMAR_YEAR, MYANMAR_EPOCH, SOLAR_YEAR};
use crate::date::MyanmarDate;
use crate::error::{CalendarError, InvalidInput};
use crate::julian::JulianDay;
use crate::month::MyanmarMonth;
use crate::year::classify_year;
use tracing::{error, trace};

/// Mean month length used by the closed-form month split.
const MEAN_MONTH: f64 = 29.544;
/// Phase offset of the closed-form month split.
const MONTH_OFFSET: f64 = 29.26;

/// Myanmar year whose new year has passed on day `jdn`.
fn estimate_year(jdn: i64) -> Result<i64, InvalidInput> {
    let year = ((jdn as f64 - 0.5 - MYANMAR_EPOCH) / SOLAR_YEAR).floor() as i64;
    if (MIN_MYANMAR_YEAR..=MAX_MYANMAR_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(InvalidInput::OutOfRange { year })
    }
}

/// Converts a Julian Day into a Myanmar date.
///
/// The Myanmar year number changes at the new year in April, while the
/// month count restarts at the 1st of Tagu a few days earlier. Days past the
/// end of the Tagu-to-Tagu year therefore stay in the old year as
/// Late Tagu and Late Kason.
///
/// # Errors
/// Returns `InvalidInput` for non-finite input or dates outside the
/// supported Myanmar years, `YearClassificationUnresolved` if the year
/// cannot be anchored, and `UnknownMonthIndex` if the month split lands
/// outside the month table (a bug).
///
/// ```
/// use myanmar_date::{decompose, JulianDay, MoonPhase, MyanmarMonth};
///
/// let date = decompose(JulianDay::from_gregorian(2025, 10, 6)).unwrap();
/// assert_eq!(date.month(), MyanmarMonth::Thadingyut);
/// assert_eq!(date.moon_phase(), MoonPhase::FullMoon);
/// ```
#[tracing::instrument(level = "trace")]
pub fn decompose(jd: JulianDay) -> Result<MyanmarDate, CalendarError> {
    let jdn = jd.day_number()?;
    let year = estimate_year(jdn)?;
    let info = classify_year(year)?;
    let year_type = info.year_type();

    let big = i64::from(year_type.is_big_watat());
    let common = i64::from(!year_type.is_watat());
    let year_length = i64::from(info.length());

    // 1-based day counted from the 1st of Tagu
    let mut day_of_year = jdn - info.start_day_number() + 1;
    let late = (day_of_year - 1).div_euclid(year_length);
    day_of_year -= late * year_length;

    // past Nayon the big watat day and the missing First Waso shift the
    // month boundaries
    let shift = (day_of_year + 423).div_euclid(512);
    let mut index = (((day_of_year - big * shift + common * shift * 30) as f64 + MONTH_OFFSET)
        / MEAN_MONTH)
        .floor() as i64;
    let after_nayon = (index + 12).div_euclid(16);
    let ordinary_after_nayon = (index + 11).div_euclid(16);
    let day = day_of_year - (MEAN_MONTH * index as f64 - MONTH_OFFSET).floor() as i64
        - big * after_nayon
        + common * ordinary_after_nayon * 30;
    index += ordinary_after_nayon * 3 - after_nayon * 4 + 12 * late;

    let month = MyanmarMonth::from_index(index).inspect_err(|err| {
        error!(%err, jdn, year, day_of_year, "month split left the month table");
    })?;
    let day = u8::try_from(day)
        .ok()
        .filter(|d| (1..=month.length(year_type)).contains(d))
        .ok_or_else(|| {
            error!(jdn, year, index, day, "month split produced an impossible day");
            CalendarError::UnknownMonthIndex { index }
        })?;

    trace!(year, index, day, "decomposed");
    Ok(MyanmarDate {
        day_number: jdn,
        year,
        year_type,
        month,
        day,
    })
}
