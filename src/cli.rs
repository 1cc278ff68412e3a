use clap::Parser;

/// Print the New-Calendar date and week grid for a Gregorian date.
#[derive(Parser)]
#[command(
    name = "newcal",
    version,
    about = "Print a calendar for the given date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Gregorian date to convert.
    #[arg(short, long, value_name = "YYYY-MM-DD", allow_hyphen_values = true)]
    pub gregorian: Option<String>,

    /// Unix timestamp (seconds) to convert.
    #[arg(short, long, value_name = "SECONDS", allow_hyphen_values = true)]
    pub unix: Option<String>,

    /// Collected only to be reported as an error.
    #[arg(hide = true)]
    pub extra: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_negative_timestamps() {
        let cli = Cli::try_parse_from(["newcal", "-u", "-86400"]).unwrap();
        assert_eq!(Some("-86400"), cli.unix.as_deref());
        assert_eq!(None, cli.gregorian);
    }

    #[test]
    fn counts_verbosity() {
        let cli = Cli::try_parse_from(["newcal", "-vv", "--gregorian", "2023-01-26"]).unwrap();
        assert_eq!(2, cli.verbose);
        assert_eq!(Some("2023-01-26"), cli.gregorian.as_deref());
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["newcal", "2023-01-26"]).is_err());
    }
}
