//! The capability every calendar provides, and the date value it produces.

use std::fmt;

use crate::date::Date;
use crate::error::Error;

/// A calendar convertible to and from a [`Date`].
///
/// Implementors are expected to be zero-sized marker types; all data a
/// calendar needs is process-wide and shared.
pub trait Calendar: Copy + Default + fmt::Debug {
    /// Stable identifier used to dispatch on calendars.
    const IDENTIFIER: &'static str;

    /// Converts a day count into a date in this calendar.
    fn from_jdn(&self, date: Date) -> Result<CalendarDate<Self>, Error>;
    /// Converts a date in this calendar back into a day count.
    fn to_jdn(&self, date: &CalendarDate<Self>) -> Result<Date, Error>;

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32, Error>;
    fn days_in_year(&self, year: i32) -> Result<u32, Error>;

    /// Last year the calendar can convert.
    fn last_supported_year(&self) -> i32;
    /// Codes of the eras this calendar counts years in.
    fn era_identifiers(&self) -> &'static [&'static str];
}

/// A `(year, month, day)` date in calendar `C`.
///
/// Values built through [`CalendarDate::new`] or returned by
/// [`Calendar::from_jdn`] always name an existing day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "YearMonthDay",
        bound(serialize = "", deserialize = "C: Calendar")
    )
)]
pub struct CalendarDate<C> {
    year: i32,
    month: u32,
    day: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    calendar: C,
}

impl<C: Calendar> CalendarDate<C> {
    /// Creates a date after checking that it exists in calendar `C`.
    ///
    /// # Example
    ///
    /// ```
    /// use sambat::{BikramSambat, CalendarDate, Error};
    ///
    /// assert!(CalendarDate::<BikramSambat>::new(2081, 1, 31).is_ok());
    /// assert_eq!(
    ///     Err(Error::InvalidMonth { month: 13 }),
    ///     CalendarDate::<BikramSambat>::new(2081, 13, 1)
    /// );
    /// ```
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        let calendar = C::default();
        let days_in_month = calendar.days_in_month(year, month)?;
        if !(1..=days_in_month).contains(&day) {
            return Err(Error::InvalidDay {
                year,
                month,
                day,
                days_in_month,
            });
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates a date without validation; only calendars use this for
    /// values they have already checked.
    pub(crate) fn new_unchecked(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            calendar: C::default(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }
    pub fn month(&self) -> u32 {
        self.month
    }
    pub fn day(&self) -> u32 {
        self.day
    }
    /// The calendar this date belongs to.
    pub fn calendar(&self) -> C {
        self.calendar
    }
    /// Identifier of the calendar, i.e. `C::IDENTIFIER`.
    pub fn calendar_identifier(&self) -> &'static str {
        C::IDENTIFIER
    }

    /// Converts into a calendar-independant [`Date`].
    pub fn to_date(&self) -> Result<Date, Error> {
        self.calendar.to_jdn(self)
    }
    /// Represents the same day in proleptic Gregorian calendar, in
    /// `(year, month, day)` format.
    pub fn gregorian(&self) -> Result<(i32, u32, u32), Error> {
        self.to_date().map(|date| date.gregorian())
    }
}

/// Wire form of a [`CalendarDate`], checked through [`CalendarDate::new`]
/// before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct YearMonthDay {
    year: i32,
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
impl<C: Calendar> TryFrom<YearMonthDay> for CalendarDate<C> {
    type Error = Error;
    fn try_from(ymd: YearMonthDay) -> Result<Self, Error> {
        Self::new(ymd.year, ymd.month, ymd.day)
    }
}

/// Formats as `YYYY-MM-DD` with the calendar's own numbers.
impl<C> fmt::Display for CalendarDate<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
