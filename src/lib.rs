//! Conversion of Gregorian dates into the New Calendar.
//!
//! The New Calendar has five seasons of 73 days (Winter, Spring, Summer,
//! Autumn and Fall) and a nine-day week named after the planets. A year
//! begins on Gregorian December 21. Leap years keep the Gregorian rule and
//! gain a Leap Day, which, like the 37th day of every season, has no
//! weekday.
//!
//! # Examples
//!
//! Basic usage with [`NewCalDate`]:
//!
//! ```
//! use newcal::NewCalDate;
//!
//! let date = NewCalDate::from_gregorian(2022, 12, 21).unwrap();
//!
//! assert_eq!(2023, date.year());
//! assert_eq!("Mercury, 1 Early Winter, 2023", date.to_string());
//! ```
//!
//! Weekless days:
//!
//! ```
//! use newcal::{Date, NewCalDate};
//!
//! let leap: Date = "2024-02-29".parse().unwrap();
//! assert_eq!("Leap Day, 2024", NewCalDate::from(leap).to_string());
//!
//! let mid = NewCalDate::from_gregorian(2023, 1, 26).unwrap();
//! assert_eq!("Mid Season", mid.day_of_week());
//! ```
//!
//! Printing a week grid, as the `newcal` binary does:
//!
//! ```
//! use newcal::NewCalDate;
//! use newcal::calendar::fmt;
//!
//! let date = NewCalDate::from_unix(0);
//! println!("{}", fmt::summary("1970-01-01", &date));
//! if let Some(grid) = fmt::calendar(&date) {
//!     print!("{grid}");
//! }
//! ```

pub mod calendar;
pub mod date;
pub mod error;
pub mod input;

pub use calendar::{DayOfMonth, NewCalDate, Planet, Season, SeasonDay};
pub use date::{Date, YearType, is_leap_year};
pub use error::Error;
pub use input::Input;
