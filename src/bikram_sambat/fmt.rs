//! Rendering Bikram Sambat dates in Nepali.
//!
//! Only presentation lives here; every number comes from the converter.

use super::BikramSambat;
use crate::calendar::{Calendar, CalendarDate};
use crate::date::Date;
use crate::error::Error;

/// Devanagari digits, item `n` is the digit for `n`.
pub const NUM_DEVANAGARI: &[char] = &['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Writes `num` in Devanagari digits.
///
/// # Example
///
/// ```
/// use sambat::bikram_sambat::fmt;
///
/// assert_eq!("२०८१", fmt::digits(2081));
/// assert_eq!("-१२", fmt::digits(-12));
/// ```
pub fn digits(num: i64) -> String {
    num.to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => NUM_DEVANAGARI[d as usize],
            None => c,
        })
        .collect()
}

/// Month name, `1..=12` being Baisakh through Chaitra.
///
/// # Example
///
/// ```
/// use sambat::bikram_sambat::fmt;
///
/// assert_eq!("बैशाख", fmt::month(1));
/// assert_eq!("चैत", fmt::month(12));
/// ```
///
/// # Panics
///
/// Panics if the month is not in `1..=12`.
pub fn month(m: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "बैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज", "कात्तिक", "मंसिर", "पुस", "माघ", "फागुन", "चैत",
    ];
    match m {
        1..=12 => NAMES[m as usize - 1],
        _ => panic!("month {} not in 1..=12", m),
    }
}

/// Romanised month name.
///
/// # Panics
///
/// Panics if the month is not in `1..=12`.
pub fn month_latin(m: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "Baisakh", "Jestha", "Asar", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
        "Magh", "Falgun", "Chaitra",
    ];
    match m {
        1..=12 => NAMES[m as usize - 1],
        _ => panic!("month {} not in 1..=12", m),
    }
}

/// Weekday name for an ISO-8601 day of week (`1..=7`, Monday through
/// Sunday), as returned by [`Date::day_of_week`].
///
/// # Panics
///
/// Panics if the day is not in `1..=7`.
pub fn weekday(dow: u32) -> &'static str {
    const NAMES: &[&str] = &[
        "सोमबार", "मंगलबार", "बुधबार", "बिहीबार", "शुक्रबार", "शनिबार", "आइतबार",
    ];
    match dow {
        1..=7 => NAMES[dow as usize - 1],
        _ => panic!("day of week {} not in 1..=7", dow),
    }
}

/// Abbreviated era name.
pub fn era() -> &'static str {
    "वि.सं."
}

/// Formats as year, month name and day, e.g. `२०८१ बैशाख १`.
///
/// # Example
///
/// ```
/// use sambat::BikramSambat;
/// use sambat::bikram_sambat::fmt;
///
/// let date = BikramSambat.date(2081, 1, 1).unwrap();
/// assert_eq!("२०८१ बैशाख १", fmt::long(&date));
/// ```
pub fn long(date: &CalendarDate<BikramSambat>) -> String {
    format!(
        "{} {} {}",
        digits(date.year().into()),
        month(date.month()),
        digits(date.day().into())
    )
}

/// Converts a proleptic Gregorian date and formats it with its weekday and
/// era, e.g. `शनिबार, वि.सं. २०८१ बैशाख १`.
///
/// # Example
///
/// ```
/// use sambat::bikram_sambat::fmt;
///
/// assert_eq!(
///     Ok("शनिबार, वि.सं. २०८१ बैशाख १".to_owned()),
///     fmt::from_gregorian_long(2024, 4, 13)
/// );
/// ```
pub fn from_gregorian_long(year: i32, month: u32, day: u32) -> Result<String, Error> {
    let date = Date::from_gregorian(year, month, day)?;
    let bs = BikramSambat.from_jdn(date)?;
    Ok(format!("{}, {} {}", weekday(date.day_of_week()), era(), long(&bs)))
}
