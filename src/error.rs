//! Errors returned by date conversions.

use thiserror::Error;

/// An input outside the domain of a conversion.
///
/// Every variant carries the offending value so the caller can tell which
/// field was rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// Month number not in `1..=12`.
    #[error("month {month} not in 1..=12")]
    InvalidMonth { month: u32 },
    /// Day number not in `1..=days_in_month` for the given year and month.
    #[error("day {day} not in 1..={days_in_month} for {year:04}-{month:02}")]
    InvalidDay {
        year: i32,
        month: u32,
        day: u32,
        days_in_month: u32,
    },
    /// Year not covered by the calendar's data.
    #[error("year {year} not supported")]
    YearOutOfRange { year: i32 },
    /// Julian day number outside the range the calendar can represent.
    #[error("JDN {jdn} out of supported range")]
    DateOutOfRange { jdn: u32 },
    /// Not a valid proleptic Gregorian date, or one before JDN 0.
    #[error("invalid Gregorian date {year:04}-{month:02}-{day:02}")]
    InvalidGregorian { year: i32, month: u32, day: u32 },
}
