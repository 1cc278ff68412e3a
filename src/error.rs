//! Errors raised while turning user input into dates.
//!
//! The conversion itself never fails; only parsing and argument validation
//! do.

/// Error type for all fallible operations in this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A date string or timestamp could not be parsed, or named a day that
    /// does not exist.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The text that was rejected.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Input options that cannot be combined were supplied together, or
    /// positional arguments were given (see [`Input::from_args`]).
    ///
    /// [`Input::from_args`]: crate::Input::from_args
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

impl Error {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_owned(),
            reason: reason.into(),
        }
    }
}
