//! Text rendering of New-Calendar dates.

use std::fmt::Write;

use super::{DayOfMonth, MID_SEASON, NewCalDate, Planet};

/// Width in characters of every line of [`calendar`].
pub const LINE_WIDTH: usize = 81;

const CELL: &str = "-------";

/// The summary line `"<label> is <date>"`.
///
/// # Example
///
/// ```
/// use newcal::NewCalDate;
/// use newcal::calendar::fmt;
///
/// let date = NewCalDate::from_gregorian(2023, 1, 26).unwrap();
/// assert_eq!("2023-01-26 is 37 Mid Winter, 2023", fmt::summary("2023-01-26", &date));
/// ```
pub fn summary(label: &str, date: &NewCalDate) -> String {
    format!("{label} is {date}")
}

/// Centres `text` between two `|` in a line [`LINE_WIDTH`] wide.
pub fn month_banner(text: &str) -> String {
    let pad = (LINE_WIDTH - 2).saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("|{}{}{}|", " ".repeat(left), text, " ".repeat(pad - left))
}

/// Renders the half-season containing `date` as a grid of four nine-day
/// weeks, with the date itself marked as `*12*`.
///
/// Returns `None` for the mid-season day and the Leap Day, which belong to
/// no week.
///
/// # Example
///
/// ```
/// use newcal::NewCalDate;
/// use newcal::calendar::fmt;
///
/// let date = NewCalDate::from_gregorian(2023, 1, 1).unwrap();
/// let grid = fmt::calendar(&date).unwrap();
/// assert!(grid.contains("|  *12* |"));
/// assert!(grid.lines().all(|line| line.len() == fmt::LINE_WIDTH));
///
/// let mid = NewCalDate::from_gregorian(2023, 1, 26).unwrap();
/// assert_eq!(None, fmt::calendar(&mid));
/// ```
pub fn calendar(date: &NewCalDate) -> Option<String> {
    let DayOfMonth::Numbered(today) = date.day() else {
        return None;
    };
    let today = today.get();

    let separator = format!("*{}*", [CELL; 9].join("=="));
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = writeln!(out, "*{}*", "-".repeat(LINE_WIDTH - 2));
    let _ = writeln!(out, "{}", month_banner(&date.month_with_modifier()));
    let _ = writeln!(out, "{separator}");
    for planet in Planet::ALL {
        let _ = write!(out, "|  {}  |", planet.abbr());
    }
    out.push('\n');
    let _ = writeln!(out, "{separator}");

    let (days, skipped) = if today > MID_SEASON {
        (MID_SEASON + 1..=2 * MID_SEASON - 1, 1)
    } else {
        (1..=MID_SEASON - 1, 0)
    };
    for day in days {
        if day == today {
            let _ = write!(out, "|  *{day:2}* |");
        } else {
            let _ = write!(out, "| {day:5} |");
        }
        if (day - skipped) % 9 == 0 {
            out.push('\n');
        }
    }
    let _ = writeln!(out, "{separator}");
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Season;

    #[test]
    fn banner_is_centred() {
        let banner = month_banner("Early Winter");
        assert_eq!(LINE_WIDTH, banner.len());
        assert_eq!(format!("|{}Early Winter{}|", " ".repeat(33), " ".repeat(34)), banner);
        assert_eq!(LINE_WIDTH, month_banner("Late Fall").len());
    }

    #[test]
    fn early_half() {
        let date = NewCalDate::new(2023, Season::Winter, 12).unwrap();
        let grid = calendar(&date).unwrap();
        let lines: Vec<_> = grid.lines().collect();
        assert_eq!(10, lines.len());
        assert!(lines.iter().all(|l| l.len() == LINE_WIDTH), "{grid}");
        assert_eq!(format!("*{}*", "-".repeat(79)), lines[0]);
        assert!(lines[1].contains("Early Winter"));
        assert_eq!(
            "|  Mer  ||  Ven  ||  Ear  ||  Mar  ||  Jup  ||  Sat  ||  Ura  ||  Nep  ||  Plu  |",
            lines[3]
        );
        assert!(lines[5].starts_with("|     1 ||     2 |"));
        assert!(lines[5].ends_with("|     9 |"));
        assert!(lines[6].contains("|  *12* |"));
        assert!(lines[8].starts_with("|    28 |"));
        assert!(lines[8].ends_with("|    36 |"));
        assert_eq!(1, grid.matches("* |").count());
    }

    #[test]
    fn late_half() {
        let date = NewCalDate::new(2023, Season::Fall, 73).unwrap();
        let grid = calendar(&date).unwrap();
        let lines: Vec<_> = grid.lines().collect();
        assert_eq!(10, lines.len());
        assert!(lines[1].contains("Late Fall"));
        assert!(lines[5].starts_with("|    38 |"));
        assert!(lines[5].ends_with("|    46 |"));
        assert!(lines[8].starts_with("|    65 |"));
        assert!(lines[8].ends_with("|  *73* |"));
    }

    #[test]
    fn weekless_days_have_no_grid() {
        let mid = NewCalDate::new(2023, Season::Spring, 37).unwrap();
        assert_eq!(None, calendar(&mid));
        assert_eq!(None, calendar(&NewCalDate::leap_day(2024)));
    }

    #[test]
    fn summaries() {
        let date = NewCalDate::new(1970, Season::Winter, 12).unwrap();
        assert_eq!("Today is Earth, 12 Early Winter, 1970", summary("Today", &date));
        assert_eq!(
            "2024-02-29 is Leap Day, 2024",
            summary("2024-02-29", &NewCalDate::leap_day(2024))
        );
    }
}
