//! Calendar-independant date.

use std::ops::Sub;

use crate::error::Error;

/// A calendar-independant date, identified by its Julian day number (JDN).
///
/// This is the interchange point between calendars: every calendar converts
/// its own dates from and into a `Date`.
///
/// Supported range begins from January 1, 4713 BC, proleptic Julian calendar.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub const fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub const fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a proleptic Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Fails with [`Error::InvalidGregorian`] if the month or day does not
    /// exist, or if the date lies before JDN 0.
    ///
    /// # Example
    ///
    /// ```
    /// use sambat::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2023, 2, 29).is_err());
    /// ```
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self, Error> {
        let invalid = Error::InvalidGregorian { year, month, day };
        if !(1..=12).contains(&month) || day == 0 || day > gregorian_month_length(year, month) {
            return Err(invalid);
        }
        let (y, m, d) = (i64::from(year), i64::from(month), i64::from(day));
        let a = (m - 14) / 12;
        let jdn = (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
            - (3 * ((y + 4900 + a) / 100)) / 4
            + d
            - 32075;
        u32::try_from(jdn).map(Self::from_jdn).map_err(|_| invalid)
    }
    /// Represents the date in proleptic Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use sambat::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, u32, u32) {
        let jdn = i64::from(self.jdn);
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        // a u32 JDN stays well inside i32 years
        (year as i32, month as u32, day as u32)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use sambat::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use sambat::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> u32 {
        self.jdn % 7 + 1
    }

    /// Moves the date by `days`, returning `None` if the result would fall
    /// outside the representable JDN range.
    pub fn checked_add(self, days: i64) -> Option<Self> {
        let jdn = i64::from(self.jdn).checked_add(days)?;
        u32::try_from(jdn).ok().map(Self::from_jdn)
    }
}

/// Number of days from `rhs` to `self`.
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        i64::from(self.jdn) - i64::from(rhs.jdn)
    }
}

fn gregorian_month_length(year: i32, month: u32) -> u32 {
    match month {
        2 if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
