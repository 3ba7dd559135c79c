//! Utilities for converting between Bikram Sambat (Nepali) calendar dates and
//! Julian day numbers.
//!
//! Julian day numbers ([`Date`]) are the common ground between calendars:
//! Gregorian dates convert to and from them directly, and
//! [`BikramSambat`] implements [`Calendar`] on top of them, using the
//! published almanac for BS 1970–2099.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use sambat::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Bikram Sambat calendar:
//!
//! ```
//! use sambat::{BikramSambat, Calendar, Date};
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//! let bs = BikramSambat.from_jdn(date).unwrap();
//!
//! assert_eq!("2056-09-17", bs.to_string());
//! assert_eq!(Ok(30), BikramSambat.days_in_month(2056, 9));
//! ```
//!
//! Years outside the almanac are rejected rather than guessed:
//!
//! ```
//! use sambat::{BikramSambat, CalendarDate, Error};
//!
//! assert_eq!(
//!     Err(Error::YearOutOfRange { year: 2100 }),
//!     CalendarDate::<BikramSambat>::new(2100, 1, 1)
//! );
//! ```

pub mod bikram_sambat;
pub mod calendar;
pub mod date;
pub mod error;

pub use bikram_sambat::BikramSambat;
pub use calendar::{Calendar, CalendarDate};
pub use date::Date;
pub use error::Error;
