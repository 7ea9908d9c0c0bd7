//! Easter Sunday calculation via the Gauss formula (Computus).

use chrono::NaiveDate;
use thiserror::Error;

/// First year for which the Gauss constants used here (X=24, Y=5) hold.
pub const FIRST_SUPPORTED_YEAR: i32 = 1900;
/// Last year for which the Gauss constants used here (X=24, Y=5) hold.
pub const LAST_SUPPORTED_YEAR: i32 = 2299;

/// The Gauss formula produced a (day, month, year) triple that is not a
/// valid calendar date. This can only happen when the formula is applied
/// outside its supported year range, or on a logic defect, so callers
/// usually treat it as fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("computed Easter date {day:02}/{month:02}/{year} is not a valid calendar date")]
pub struct InvalidEasterDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Calculate the date of Easter Sunday for the given year with the Gauss
/// formula, using the century constants X=24 and Y=5. Valid from
/// [`FIRST_SUPPORTED_YEAR`] through [`LAST_SUPPORTED_YEAR`] (inclusively).
pub fn easter_sunday(year: i32) -> Result<NaiveDate, InvalidEasterDate> {
    let a = year % 19;
    let b = year % 4;
    let c = year % 7;
    let d = (19 * a + 24) % 30;
    let e = (2 * b + 4 * c + 6 * d + 5) % 7;

    let (mut day, month) = if d + e > 9 {
        (d + e - 9, 4)
    } else {
        (d + e + 22, 3)
    };

    // Corrections for the two dates the raw formula can overshoot.
    if month == 4 && day == 26 {
        day = 19;
    } else if month == 4 && day == 25 && d == 28 && a > 10 {
        day = 18;
    }

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or(InvalidEasterDate {
        year,
        month: month as u32,
        day: day as u32,
    })
}
