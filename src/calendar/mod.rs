//! The New Calendar
//!
//! A year is five seasons of 73 days, beginning on Gregorian December 21.
//! Gregorian leap years gain a Leap Day on the 71st day of the year (the
//! Gregorian February 29), which belongs to no season.
//!
//! Each season is split by its 37th day, the mid-season day, into an early
//! and a late half of 36 days. Both halves hold exactly four nine-day weeks
//! named after the planets, so every season starts on Mercury. The
//! mid-season day and the Leap Day are outside the week.
//!
//! Formatting helpers live in [`fmt`].

use std::cmp::Ordering;
use std::fmt::{self as std_fmt, Display};

use tracing::{debug, trace};

use crate::date::{DAYS_PER_CYCLE, Date, YearType};
use crate::error::Error;

pub mod fmt;

/// Days in every season.
pub const DAYS_PER_SEASON: u8 = 73;
/// Ordinal of the mid-season day.
pub const MID_SEASON: u8 = 37;
/// Days in a week.
pub const DAYS_PER_WEEK: u8 = 9;

/// New-Calendar 1970 begins on 1969-12-21, eleven days before the epoch.
const YEAR_START_OFFSET: i64 = 11;
/// Zero-based day of a leap year that is the Leap Day (Gregorian Feb 29).
const LEAP_DAY_OFFSET: i64 = 70;

/// One of the five 73-day seasons, in calendar order.
///
/// Autumn and Fall are two different seasons: Autumn runs from Gregorian
/// July 28 and Fall from October 9 (in common years).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
    Fall,
}

impl Season {
    /// All seasons, in calendar order.
    pub const ALL: [Season; 5] = [
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Fall,
    ];

    /// Zero-based position of the season within the year.
    pub fn index(&self) -> usize {
        *self as usize
    }
    /// Returns the season at `index`, or `None` if `index > 4`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
    /// English name of the season.
    pub fn name(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Fall => "Fall",
        }
    }
}

impl Display for Season {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(self.name())
    }
}

/// The nine days of the week, closest planet first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Planet {
    /// All weekdays, in week order.
    pub const ALL: [Planet; 9] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    /// Full planet name, used as the weekday name.
    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
            Planet::Pluto => "Pluto",
        }
    }
    /// Three-letter abbreviation, as used in calendar headers.
    pub fn abbr(&self) -> &'static str {
        &self.name()[..3]
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a day relative to the mid-season day.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Half {
    /// Days 1 to 36.
    Early,
    /// Day 37.
    Mid,
    /// Days 38 to 73.
    Late,
}

impl Half {
    /// Classifies a day ordinal. Only `1..=73` is meaningful; ordinals
    /// outside it are classified by comparison with 37 alone.
    pub fn from_ordinal(ordinal: u8) -> Self {
        match ordinal.cmp(&MID_SEASON) {
            Ordering::Less => Half::Early,
            Ordering::Equal => Half::Mid,
            Ordering::Greater => Half::Late,
        }
    }
    /// `"Early"`, `"Mid"` or `"Late"`, the prefix of a season name.
    pub fn name(&self) -> &'static str {
        match self {
            Half::Early => "Early",
            Half::Mid => "Mid",
            Half::Late => "Late",
        }
    }
}

/// A day of a season that has a weekday: `1..=73` except 37.
///
/// Only [`SeasonDay::new`] and [`DayOfMonth::from_ordinal`] build one, so the
/// mid-season day and out-of-range ordinals cannot be wrapped.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SeasonDay(u8);

impl SeasonDay {
    /// Returns `None` for 37 and for ordinals outside `1..=73`.
    pub fn new(ordinal: u8) -> Option<Self> {
        match ordinal {
            MID_SEASON => None,
            1..=DAYS_PER_SEASON => Some(Self(ordinal)),
            _ => None,
        }
    }
    /// The ordinal within the season.
    pub fn get(&self) -> u8 {
        self.0
    }
    /// The planet weekday.
    ///
    /// Days after the mid-season day count as one less, so day 38 starts a
    /// new week on Mercury.
    pub fn weekday(&self) -> Planet {
        let counted = if self.0 > MID_SEASON { self.0 - 1 } else { self.0 };
        Planet::ALL[((counted - 1) % DAYS_PER_WEEK) as usize]
    }
}

/// The day field of a [`NewCalDate`].
///
/// # Example
///
/// ```
/// use newcal::calendar::{DayOfMonth, Planet};
///
/// assert_eq!(Some(DayOfMonth::MidSeason), DayOfMonth::from_ordinal(37));
/// assert_eq!(Some(Planet::Mercury), DayOfMonth::from_ordinal(38).unwrap().weekday());
/// assert_eq!("Leap Day", DayOfMonth::LeapDay.day_of_week());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DayOfMonth {
    /// A day with a weekday.
    Numbered(SeasonDay),
    /// Day 37 of a season.
    MidSeason,
    /// The seasonless day of a leap year.
    LeapDay,
}

impl DayOfMonth {
    /// Day of a season from its ordinal, or `None` outside `1..=73`.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        if ordinal == MID_SEASON {
            return Some(DayOfMonth::MidSeason);
        }
        SeasonDay::new(ordinal).map(DayOfMonth::Numbered)
    }
    /// Ordinal within the season, `None` for the Leap Day.
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            DayOfMonth::Numbered(n) => Some(n.get()),
            DayOfMonth::MidSeason => Some(MID_SEASON),
            DayOfMonth::LeapDay => None,
        }
    }
    /// Early, mid or late half of the season; `None` for the Leap Day.
    pub fn half(&self) -> Option<Half> {
        self.ordinal().map(Half::from_ordinal)
    }
    /// The planet weekday. The mid-season day and the Leap Day have none.
    pub fn weekday(&self) -> Option<Planet> {
        match self {
            DayOfMonth::Numbered(n) => Some(n.weekday()),
            DayOfMonth::MidSeason | DayOfMonth::LeapDay => None,
        }
    }
    /// Name of the weekday, or `"Mid Season"` / `"Leap Day"` for the
    /// weekless days.
    pub fn day_of_week(&self) -> &'static str {
        match self {
            DayOfMonth::LeapDay => "Leap Day",
            DayOfMonth::MidSeason => "Mid Season",
            DayOfMonth::Numbered(n) => n.weekday().name(),
        }
    }
}

/// A date in the New Calendar.
///
/// The Leap Day is the only date without a season.
///
/// # Example
///
/// ```
/// use newcal::NewCalDate;
/// use newcal::calendar::Season;
///
/// let date = NewCalDate::from_gregorian(2023, 3, 4).unwrap();
///
/// assert_eq!(2023, date.year());
/// assert_eq!(Some(Season::Spring), date.season());
/// assert_eq!(Some(1), date.ordinal());
/// assert_eq!("Mercury, 1 Early Spring, 2023", date.to_string());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NewCalDate {
    year: i64,
    season: Option<Season>,
    day: DayOfMonth,
}

impl NewCalDate {
    /// Day `ordinal` of `season`. Returns `None` unless `ordinal` is in
    /// `1..=73`.
    pub fn new(year: i64, season: Season, ordinal: u8) -> Option<Self> {
        Some(Self {
            year,
            season: Some(season),
            day: DayOfMonth::from_ordinal(ordinal)?,
        })
    }
    /// The Leap Day of `year`. Does not check that `year` is a leap year.
    pub fn leap_day(year: i64) -> Self {
        Self {
            year,
            season: None,
            day: DayOfMonth::LeapDay,
        }
    }

    /// Converts a day count since 1970-01-01.
    ///
    /// Total for every `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use newcal::NewCalDate;
    /// use newcal::calendar::Season;
    ///
    /// assert_eq!(NewCalDate::new(1970, Season::Winter, 12), Some(NewCalDate::from_epoch_days(0)));
    /// assert_eq!(NewCalDate::new(1970, Season::Winter, 1), Some(NewCalDate::from_epoch_days(-11)));
    /// ```
    pub fn from_epoch_days(days: i64) -> Self {
        // Any 400 consecutive years hold 146097 days, so whole cycles are
        // taken off before walking year by year.
        let cycles = days.div_euclid(DAYS_PER_CYCLE);
        let mut offset = days.rem_euclid(DAYS_PER_CYCLE) + YEAR_START_OFFSET;
        let mut year = 1970 + cycles * 400;
        loop {
            let len = YearType::from_gregorian(year).days();
            if offset < len {
                break;
            }
            offset -= len;
            year += 1;
        }
        trace!(days, year, offset, "located new calendar year");

        if YearType::from_gregorian(year).is_leap() {
            match offset.cmp(&LEAP_DAY_OFFSET) {
                Ordering::Equal => {
                    debug!(days, year, "leap day");
                    return Self::leap_day(year);
                }
                Ordering::Greater => offset -= 1,
                Ordering::Less => {}
            }
        }

        let season = Season::ALL[(offset / i64::from(DAYS_PER_SEASON)) as usize];
        let ordinal = (offset % i64::from(DAYS_PER_SEASON)) as u8 + 1;
        let day = match SeasonDay::new(ordinal) {
            Some(n) => DayOfMonth::Numbered(n),
            None => DayOfMonth::MidSeason,
        };
        debug!(days, year, %season, ordinal, "converted");
        Self {
            year,
            season: Some(season),
            day,
        }
    }
    /// Converts a calendar-independant [`Date`].
    pub fn from_date(date: Date) -> Self {
        Self::from_epoch_days(date.epoch_days())
    }
    /// Converts the UTC day of a Unix timestamp in seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use newcal::NewCalDate;
    ///
    /// assert_eq!("Leap Day, 1972", NewCalDate::from_unix(68169600).to_string());
    /// ```
    pub fn from_unix(secs: i64) -> Self {
        Self::from_date(Date::from_unix(secs))
    }
    /// Converts a proleptic Gregorian date.
    ///
    /// Fails only if `month` or `day` does not name a real day.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        Date::from_gregorian(year, month, day)
            .map(Self::from_date)
            .ok_or_else(|| {
                Error::parse(
                    &format!("{year:04}-{month:02}-{day:02}"),
                    "no such Gregorian day",
                )
            })
    }
    /// Today's date according to the system clock (UTC).
    pub fn today() -> Self {
        Self::from_date(Date::today())
    }

    /// New-Calendar year. Gregorian December 21..=31 fall in the next one.
    pub fn year(&self) -> i64 {
        self.year
    }
    /// `None` only for the Leap Day.
    pub fn season(&self) -> Option<Season> {
        self.season
    }
    /// The day field, including the weekless variants.
    pub fn day(&self) -> DayOfMonth {
        self.day
    }
    /// Ordinal within the season, `1..=73`. `None` for the Leap Day.
    pub fn ordinal(&self) -> Option<u8> {
        self.day.ordinal()
    }
    /// Returns `true` for the seasonless Leap Day.
    pub fn is_leap_day(&self) -> bool {
        self.day == DayOfMonth::LeapDay
    }
    /// Returns `true` for day 37 of a season.
    pub fn is_mid_season(&self) -> bool {
        self.day == DayOfMonth::MidSeason
    }
    /// Dates outside the week: the mid-season day and the Leap Day.
    pub fn is_weekless(&self) -> bool {
        self.weekday().is_none()
    }
    /// See [`DayOfMonth::weekday`].
    pub fn weekday(&self) -> Option<Planet> {
        self.day.weekday()
    }
    /// See [`DayOfMonth::day_of_week`].
    pub fn day_of_week(&self) -> &'static str {
        self.day.day_of_week()
    }
    /// Season name, or `"Leap Day"`.
    pub fn month_name(&self) -> &'static str {
        self.season.map_or("Leap Day", |s| s.name())
    }
    /// Season name prefixed with its half, e.g. `"Late Winter"`. The Leap
    /// Day gives `"Leap Day"`.
    pub fn month_with_modifier(&self) -> String {
        match (self.season, self.day.half()) {
            (Some(season), Some(half)) => format!("{} {}", half.name(), season),
            _ => self.month_name().to_owned(),
        }
    }
}

/// `"Mercury, 1 Early Winter, 1970"`, `"37 Mid Winter, 1970"` or
/// `"Leap Day, 1972"`.
impl Display for NewCalDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        let Some(ordinal) = self.ordinal() else {
            return write!(f, "Leap Day, {}", self.year);
        };
        if let Some(planet) = self.weekday() {
            write!(f, "{planet}, ")?;
        }
        write!(f, "{} {}, {}", ordinal, self.month_with_modifier(), self.year)
    }
}

impl From<Date> for NewCalDate {
    fn from(date: Date) -> Self {
        Self::from_date(date)
    }
}
