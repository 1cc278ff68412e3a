//! Resolution of the user's choice of date.

use tracing::debug;

use crate::calendar::NewCalDate;
use crate::date::Date;
use crate::error::Error;

/// Where the date to convert comes from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Input {
    /// The system clock.
    Today,
    /// A Gregorian date given as `YYYY-MM-DD`, with the text as typed.
    Gregorian { text: String, date: Date },
    /// A Unix timestamp in seconds.
    Unix(i64),
}

impl Input {
    /// Like [`Input::from_options`], but also rejects any positional
    /// arguments left over by the command line.
    pub fn from_args(
        gregorian: Option<&str>,
        unix: Option<&str>,
        extra: &[String],
    ) -> Result<Self, Error> {
        if !extra.is_empty() {
            return Err(Error::InvalidArguments(format!(
                "unexpected arguments: {}",
                extra.join(" ")
            )));
        }
        Self::from_options(gregorian, unix)
    }

    /// Builds an `Input` from the raw option values.
    ///
    /// At most one of `gregorian` and `unix` may be given. Empty strings
    /// count as absent.
    ///
    /// # Example
    ///
    /// ```
    /// use newcal::{Error, Input};
    ///
    /// assert_eq!(Ok(Input::Unix(0)), Input::from_options(None, Some("0")));
    /// assert!(matches!(
    ///     Input::from_options(Some("2023-01-01"), Some("0")),
    ///     Err(Error::InvalidArguments(_))
    /// ));
    /// ```
    pub fn from_options(gregorian: Option<&str>, unix: Option<&str>) -> Result<Self, Error> {
        let gregorian = gregorian.filter(|s| !s.is_empty());
        let unix = unix.filter(|s| !s.is_empty());
        let input = match (gregorian, unix) {
            (Some(_), Some(_)) => {
                return Err(Error::InvalidArguments(
                    "cannot pass in both unix and gregorian".to_owned(),
                ));
            }
            (Some(g), None) => Input::Gregorian {
                text: g.to_owned(),
                date: g.parse()?,
            },
            (None, Some(u)) => Input::Unix(parse_unix(u)?),
            (None, None) => Input::Today,
        };
        debug!(?input, "resolved input");
        Ok(input)
    }

    /// Text naming the input in the summary line: `Today`, the date as
    /// typed, or the timestamp.
    pub fn label(&self) -> String {
        match self {
            Input::Today => "Today".to_owned(),
            Input::Gregorian { text, .. } => text.clone(),
            Input::Unix(secs) => secs.to_string(),
        }
    }

    /// Converts the input, reading the clock for [`Input::Today`].
    pub fn resolve(&self) -> NewCalDate {
        match *self {
            Input::Today => NewCalDate::today(),
            Input::Gregorian { date, .. } => NewCalDate::from_date(date),
            Input::Unix(secs) => NewCalDate::from_unix(secs),
        }
    }
}

/// Decimal seconds with an optional sign. Surrounding whitespace is an
/// error.
fn parse_unix(s: &str) -> Result<i64, Error> {
    s.parse()
        .map_err(|e: std::num::ParseIntError| Error::parse(s, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Season;

    #[test]
    fn no_options_is_today() {
        assert_eq!(Ok(Input::Today), Input::from_options(None, None));
        assert_eq!(Ok(Input::Today), Input::from_options(Some(""), Some("")));
        assert_eq!("Today", Input::Today.label());
    }

    #[test]
    fn gregorian_option() {
        let input = Input::from_options(Some("2022-12-21"), None).unwrap();
        assert_eq!("2022-12-21", input.label());
        assert_eq!(NewCalDate::new(2023, Season::Winter, 1), Some(input.resolve()));
    }

    #[test]
    fn gregorian_label_is_the_typed_text() {
        let input = Input::from_options(Some("02022-12-21"), None).unwrap();
        assert_eq!("02022-12-21", input.label());
        assert_eq!(NewCalDate::new(2023, Season::Winter, 1), Some(input.resolve()));
    }

    #[test]
    fn unix_option() {
        let input = Input::from_options(None, Some("-86400")).unwrap();
        assert_eq!(Input::Unix(-86400), input);
        assert_eq!("-86400", input.label());
        assert_eq!(NewCalDate::new(1970, Season::Winter, 11), Some(input.resolve()));
    }

    #[test]
    fn both_options_rejected() {
        let err = Input::from_options(Some("2022-12-21"), Some("0")).unwrap_err();
        assert!(matches!(err, Error::InvalidArguments(_)), "{err:?}");
    }

    #[test]
    fn positional_arguments_rejected() {
        let extra = vec!["2023-01-01".to_owned()];
        let err = Input::from_args(None, None, &extra).unwrap_err();
        assert_eq!(
            Error::InvalidArguments("unexpected arguments: 2023-01-01".to_owned()),
            err
        );
        assert_eq!(Ok(Input::Unix(5)), Input::from_args(None, Some("5"), &[]));
    }

    #[test]
    fn malformed_values_rejected() {
        for (g, u) in [
            (Some("2022-13-01"), None),
            (Some("yesterday"), None),
            (None, Some("12abc")),
            (None, Some("99999999999999999999")),
            (None, Some(" 12 ")),
            (None, Some("12\n")),
        ] {
            let err = Input::from_options(g, u).unwrap_err();
            assert!(matches!(err, Error::Parse { .. }), "{g:?} {u:?}: {err:?}");
        }
    }

    #[test]
    fn today_is_a_real_date() {
        let date = Input::Today.resolve();
        assert!(date.year() >= 2024);
    }
}
