//! Bikram Sambat (Nepali civil) calendar.
//!
//! Months are counted from Baisakh (`1`) to Chaitra (`12`) and are 29 to 32
//! days long, depending on the year. Since the lengths are only known from
//! the published almanac, conversion is limited to the tabulated years BS
//! 1970 through 2099 (April 1913 to April 2043 AD); see [`table`].
//!
//! # Example
//!
//! ```
//! use sambat::{BikramSambat, Calendar, Date};
//!
//! let date = Date::from_gregorian(2024, 4, 13).unwrap();
//! let bs = BikramSambat.from_jdn(date).unwrap();
//!
//! assert_eq!((2081, 1, 1), (bs.year(), bs.month(), bs.day()));
//! assert_eq!(Ok(date), BikramSambat.to_jdn(&bs));
//! ```

use crate::calendar::{Calendar, CalendarDate};
use crate::date::Date;
use crate::error::Error;

pub mod fmt;
pub mod table;

/// JDN of BS 1970-01-01 (April 13, 1913 AD), the first tabulated day.
pub const EPOCH: Date = Date::from_jdn(2419871);

/// The Bikram Sambat calendar.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BikramSambat;

impl BikramSambat {
    /// First year the calendar can convert.
    pub fn first_supported_year(&self) -> i32 {
        table::FIRST_YEAR
    }

    pub fn months_in_year(&self) -> u32 {
        12
    }

    /// Creates a validated date, see [`CalendarDate::new`].
    pub fn date(&self, year: i32, month: u32, day: u32) -> Result<CalendarDate<Self>, Error> {
        CalendarDate::new(year, month, day)
    }

    /// Converts a proleptic Gregorian date.
    ///
    /// # Example
    ///
    /// ```
    /// use sambat::BikramSambat;
    ///
    /// let date = BikramSambat.from_gregorian(1943, 4, 14).unwrap();
    /// assert_eq!("2000-01-01", date.to_string());
    /// ```
    pub fn from_gregorian(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<CalendarDate<Self>, Error> {
        self.from_jdn(Date::from_gregorian(year, month, day)?)
    }

    /// Ordinal day of `date` within its year, starting from 1.
    pub fn day_of_year(&self, date: &CalendarDate<Self>) -> Result<u32, Error> {
        let days = self.to_jdn(date)?.jdn() - EPOCH.jdn();
        Ok(days - year_start(date.year())? + 1)
    }
}

/// Days from the epoch to the first day of `year`.
fn year_start(year: i32) -> Result<u32, Error> {
    let idx = table::year_index(year)?;
    Ok(table::year_start_index()[idx])
}

/// Days in `year` before the first day of `month`.
fn days_before_month(year: i32, month: u32) -> Result<u32, Error> {
    (1..month).map(|m| table::month_length(year, m)).sum()
}

impl Calendar for BikramSambat {
    const IDENTIFIER: &'static str = "bikram-sambat";

    /// Converts a day count into a Bikram Sambat date.
    ///
    /// Fails with [`Error::DateOutOfRange`] outside the tabulated years.
    fn from_jdn(&self, date: Date) -> Result<CalendarDate<Self>, Error> {
        let out_of_range = Error::DateOutOfRange { jdn: date.jdn() };
        let days = date - EPOCH;
        if days < 0 || days >= i64::from(table::total_days_in_table()) {
            return Err(out_of_range);
        }
        let days = days as u32;

        let index = table::year_start_index();
        let year_idx = index.partition_point(|&start| start <= days) - 1;
        let year = table::FIRST_YEAR + year_idx as i32;

        let mut rem = days - index[year_idx];
        for month in 1..=12 {
            let len = table::month_length(year, month)?;
            if rem < len {
                return Ok(CalendarDate::new_unchecked(year, month, rem + 1));
            }
            rem -= len;
        }
        // the index and month lengths come from the same words
        unreachable!("day {days} past the end of year {year}")
    }

    /// Converts a Bikram Sambat date into a day count.
    ///
    /// The year is checked first, then the month, then the day.
    fn to_jdn(&self, date: &CalendarDate<Self>) -> Result<Date, Error> {
        let (year, month, day) = (date.year(), date.month(), date.day());
        let start = year_start(year)?;
        let days_in_month = table::month_length(year, month)?;
        if !(1..=days_in_month).contains(&day) {
            return Err(Error::InvalidDay {
                year,
                month,
                day,
                days_in_month,
            });
        }
        let days = start + days_before_month(year, month)? + (day - 1);
        Ok(Date::from_jdn(EPOCH.jdn() + days))
    }

    fn days_in_month(&self, year: i32, month: u32) -> Result<u32, Error> {
        table::month_length(year, month)
    }

    fn days_in_year(&self, year: i32) -> Result<u32, Error> {
        let idx = table::year_index(year)?;
        let index = table::year_start_index();
        match index.get(idx + 1) {
            Some(next) => Ok(next - index[idx]),
            None => days_before_month(year, 13),
        }
    }

    fn last_supported_year(&self) -> i32 {
        table::FIRST_YEAR + table::decode().len() as i32 - 1
    }

    fn era_identifiers(&self) -> &'static [&'static str] {
        &["bs"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bs(year: i32, month: u32, day: u32) -> CalendarDate<BikramSambat> {
        CalendarDate::new_unchecked(year, month, day)
    }

    #[test]
    fn epoch() {
        assert_eq!(Ok(Date::from_jdn(2419871)), BikramSambat.to_jdn(&bs(1970, 1, 1)));
        assert_eq!(Ok(bs(1970, 1, 1)), BikramSambat.from_jdn(Date::from_jdn(2419871)));
        assert_eq!("1913-04-13", EPOCH.iso_gregorian());
    }

    #[test]
    fn first_month_length_from_table() {
        let word = table::decode()[0];
        assert_eq!(Ok(29 + (word & 3)), BikramSambat.days_in_month(1970, 1));
        assert_eq!(Ok(31), BikramSambat.days_in_month(1970, 1));
    }

    #[test]
    fn gregorian_anchors() {
        let dataset = [
            ((1970, 1, 1), (1913, 4, 13)),
            ((2000, 1, 1), (1943, 4, 14)),
            ((2078, 1, 1), (2021, 4, 14)),
            ((2080, 1, 1), (2023, 4, 14)),
            ((2081, 1, 1), (2024, 4, 13)),
            ((2082, 1, 1), (2025, 4, 14)),
            ((2099, 12, 30), (2043, 4, 14)),
        ];
        for ((y, m, d), std) in dataset {
            assert_eq!(Ok(std), bs(y, m, d).gregorian(), "{y:04}-{m:02}-{d:02}");
            let (gy, gm, gd) = std;
            assert_eq!(Ok(bs(y, m, d)), BikramSambat.from_gregorian(gy, gm, gd));
        }
    }

    #[test]
    fn boundaries() {
        let total = table::total_days_in_table();
        let before = EPOCH.checked_add(-1).unwrap();
        let after = EPOCH.checked_add(i64::from(total)).unwrap();
        let last = EPOCH.checked_add(i64::from(total) - 1).unwrap();
        assert_eq!(
            Err(Error::DateOutOfRange { jdn: before.jdn() }),
            BikramSambat.from_jdn(before)
        );
        assert_eq!(
            Err(Error::DateOutOfRange { jdn: after.jdn() }),
            BikramSambat.from_jdn(after)
        );
        assert_eq!(Ok(bs(2099, 12, 30)), BikramSambat.from_jdn(last));
        assert!(BikramSambat.from_jdn(Date::from_jdn(0)).is_err());
        assert!(BikramSambat.from_jdn(Date::from_jdn(u32::MAX)).is_err());
    }

    #[test]
    fn month_and_year_edges() {
        let dataset = [
            (2419871 + 30, bs(1970, 1, 31)),
            (2419871 + 31, bs(1970, 2, 1)),
            (2419871 + 364, bs(1970, 12, 30)),
            (2419871 + 365, bs(1971, 1, 1)),
            (2460414 + 365, bs(2081, 12, 30)),
            (2460414 + 366, bs(2082, 1, 1)),
        ];
        for (jdn, std) in dataset {
            assert_eq!(Ok(std), BikramSambat.from_jdn(Date::from_jdn(jdn)), "{jdn}");
        }
    }

    #[test]
    fn invalid_input() {
        use Error::*;
        let dataset = [
            (bs(1970, 13, 1), InvalidMonth { month: 13 }),
            (bs(1970, 0, 1), InvalidMonth { month: 0 }),
            (bs(1969, 1, 1), YearOutOfRange { year: 1969 }),
            (bs(2100, 1, 1), YearOutOfRange { year: 2100 }),
            // year is reported before month
            (bs(2100, 13, 1), YearOutOfRange { year: 2100 }),
            (
                bs(1970, 1, 32),
                InvalidDay {
                    year: 1970,
                    month: 1,
                    day: 32,
                    days_in_month: 31,
                },
            ),
            (
                bs(2000, 1, 0),
                InvalidDay {
                    year: 2000,
                    month: 1,
                    day: 0,
                    days_in_month: 30,
                },
            ),
        ];
        for (date, std) in dataset {
            assert_eq!(Err(std), BikramSambat.to_jdn(&date), "{date}");
        }
    }

    #[test]
    fn round_trip_all_dates() {
        let cal = BikramSambat;
        for year in cal.first_supported_year()..=cal.last_supported_year() {
            for month in 1..=12 {
                for day in 1..=cal.days_in_month(year, month).unwrap() {
                    let date = bs(year, month, day);
                    let jdn = cal.to_jdn(&date).unwrap();
                    assert_eq!(Ok(date), cal.from_jdn(jdn));
                }
            }
        }
    }

    #[test]
    fn inverse_all_jdns() {
        let total = table::total_days_in_table();
        let mut prev = None;
        for jdn in EPOCH.jdn()..EPOCH.jdn() + total {
            let date = BikramSambat.from_jdn(Date::from_jdn(jdn)).unwrap();
            assert_eq!(Ok(Date::from_jdn(jdn)), BikramSambat.to_jdn(&date));
            // consecutive days are strictly increasing dates
            assert!(prev < Some(date), "{date}");
            prev = Some(date);
        }
    }

    #[test]
    fn year_lengths() {
        let cal = BikramSambat;
        for (std, year) in [(365, 1970), (365, 2000), (366, 2081), (365, 2099)] {
            assert_eq!(Ok(std), cal.days_in_year(year));
        }
        let total: u32 = (1970..=2099).map(|y| cal.days_in_year(y).unwrap()).sum();
        assert_eq!(table::total_days_in_table(), total);
        assert_eq!(Err(Error::YearOutOfRange { year: 2100 }), cal.days_in_year(2100));
    }

    #[test]
    fn metadata() {
        let cal = BikramSambat;
        assert_eq!(1970, cal.first_supported_year());
        assert_eq!(2099, cal.last_supported_year());
        assert_eq!(["bs"], cal.era_identifiers());
        assert_eq!("bikram-sambat", bs(2081, 1, 1).calendar_identifier());
        assert_eq!(12, cal.months_in_year());
    }

    #[test]
    fn day_of_year() {
        let cal = BikramSambat;
        for (std, date) in [(1, bs(2081, 1, 1)), (32, bs(2081, 2, 1)), (366, bs(2081, 12, 30))] {
            assert_eq!(Ok(std), cal.day_of_year(&date), "{date}");
        }
    }

    #[test]
    fn validated_construction() {
        assert_eq!(Ok(bs(2081, 4, 32)), BikramSambat.date(2081, 4, 32));
        assert!(BikramSambat.date(2081, 5, 32).is_err());
        assert_eq!(
            Err(Error::InvalidGregorian {
                year: 2023,
                month: 2,
                day: 30
            }),
            BikramSambat.from_gregorian(2023, 2, 30)
        );
    }
}
