//! Calendar-independant date.

use std::ops::{Add, Sub};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Error;

/// Seconds in a civil day. Leap seconds are ignored, as in Unix time.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Days in a full 400-year Gregorian cycle.
pub(crate) const DAYS_PER_CYCLE: i64 = 146_097;

/// Day count of 1970-01-01 when counting from 0000-03-01.
const EPOCH_FROM_MARCH_0: i64 = 719_468;

/// Offset between Unix epoch days and Julian day numbers.
const JDN_OF_EPOCH: i64 = 2_440_588;

/// A calendar-independant date, stored as the number of days since
/// 1970-01-01 (proleptic Gregorian).
///
/// Any `i64` day count is a valid date.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    days: i64,
}

impl Date {
    /// Creates a `Date` from the number of days since 1970-01-01.
    pub fn from_epoch_days(days: i64) -> Self {
        Self { days }
    }
    /// Returns the number of days since 1970-01-01.
    pub fn epoch_days(&self) -> i64 {
        self.days
    }
    /// Returns the Julian day number (JDN) of the date.
    ///
    /// ```
    /// use newcal::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// ```
    pub fn jdn(&self) -> i64 {
        self.days + JDN_OF_EPOCH
    }

    /// Creates a `Date` holding the UTC day of a Unix timestamp (seconds).
    ///
    /// Timestamps before the epoch round towards the past, so `-1` is
    /// 1969-12-31.
    pub fn from_unix(secs: i64) -> Self {
        Self::from_epoch_days(secs.div_euclid(SECONDS_PER_DAY))
    }

    /// Today's UTC date according to the system clock.
    pub fn today() -> Self {
        let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(d) => i64::try_from(d.as_secs()).unwrap_or(i64::MAX),
            Err(e) => {
                let d = e.duration();
                let whole = i64::try_from(d.as_secs()).unwrap_or(i64::MAX);
                -whole - i64::from(d.subsec_nanos() > 0)
            }
        };
        Self::from_unix(secs)
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if `month` or `day` does not name a real day.
    ///
    /// # Example
    ///
    /// ```
    /// use newcal::Date;
    ///
    /// let date = Date::from_gregorian(1970, 1, 1).unwrap();
    /// assert_eq!(0, date.epoch_days());
    /// assert!(Date::from_gregorian(2023, 2, 29).is_none());
    /// ```
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Option<Self> {
        let max_day = days_in_month(year.into(), month)?;
        if !(1..=max_day).contains(&day) {
            return None;
        }
        let (m, d) = (i64::from(month), i64::from(day));
        let y = i64::from(year) - i64::from(month <= 2);
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + d - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        Some(Self::from_epoch_days(era * DAYS_PER_CYCLE + doe - EPOCH_FROM_MARCH_0))
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use newcal::Date;
    ///
    /// let date = Date::from_epoch_days(-1);
    /// assert_eq!((1969, 12, 31), date.gregorian());
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the day count is within 719468 days of `i64::MAX`.
    pub fn gregorian(&self) -> (i64, u8, u8) {
        let z = self
            .days
            .checked_add(EPOCH_FROM_MARCH_0)
            .expect("day count too large for Gregorian conversion");
        let era = z.div_euclid(DAYS_PER_CYCLE);
        let doe = z - era * DAYS_PER_CYCLE;
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
        let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
        let year = yoe + era * 400 + i64::from(month <= 2);
        (year, month, day)
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use newcal::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        if y < 0 {
            format!("-{:04}-{:02}-{:02}", -y, m, d)
        } else {
            format!("{:04}-{:02}-{:02}", y, m, d)
        }
    }
}

/// Parses `YYYY-MM-DD`. The year takes at least four digits and may carry a
/// leading `-` for years before 1 BC.
///
/// ```
/// use newcal::Date;
///
/// let date: Date = "2024-02-29".parse().unwrap();
/// assert_eq!((2024, 2, 29), date.gregorian());
/// assert!("2023-02-29".parse::<Date>().is_err());
/// ```
impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.rsplitn(3, '-');
        let (Some(d), Some(m), Some(y)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(Error::parse(s, "expected YYYY-MM-DD"));
        };
        let digits = y.strip_prefix('-').unwrap_or(y);
        if digits.len() < 4 || !is_digits(digits) || m.len() != 2 || d.len() != 2 {
            return Err(Error::parse(s, "expected YYYY-MM-DD"));
        }
        if !is_digits(m) || !is_digits(d) {
            return Err(Error::parse(s, "expected YYYY-MM-DD"));
        }
        let year: i32 = y
            .parse()
            .map_err(|_| Error::parse(s, format!("year {y} out of range")))?;
        // Both fields are two ASCII digits at this point.
        let month: u8 = m.parse().map_err(|_| Error::parse(s, "bad month"))?;
        let day: u8 = d.parse().map_err(|_| Error::parse(s, "bad day"))?;
        if !(1..=12).contains(&month) {
            return Err(Error::parse(s, format!("month {month} not in 1..=12")));
        }
        Date::from_gregorian(year, month, day)
            .ok_or_else(|| Error::parse(s, format!("day {day} out of range for month {month}")))
    }
}

impl Add<i64> for Date {
    type Output = Date;
    fn add(self, rhs: i64) -> Self::Output {
        Date::from_epoch_days(self.days + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        self.days - rhs.days
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i64) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
    /// Number of days in a year of this type.
    pub fn days(&self) -> i64 {
        365 + i64::from(self.is_leap())
    }
}

/// Gregorian leap-year rule: divisible by 4, except centuries not divisible
/// by 400.
///
/// ```
/// use newcal::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i64) -> bool {
    YearType::from_gregorian(year).is_leap()
}

fn days_in_month(year: i64, month: u8) -> Option<u8> {
    Some(match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + u8::from(is_leap_year(year)),
        _ => return None,
    })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
