// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::fmt::{self, Display};
use std::io::Error as IoError;

/// Top-level error type for the CLI: wraps the library's own [`spritzcrypt::Error`] plus the
/// handful of failure modes that only make sense at the command-line layer.
pub enum Error {
    Lib(spritzcrypt::Error),
    Io(IoError),
    /// The user declined to confirm a password (mismatched re-entry).
    PasswordMismatch,
}

impl From<spritzcrypt::Error> for Error {
    fn from(error: spritzcrypt::Error) -> Self {
        Error::Lib(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Self {
        Error::Io(error)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lib(error) => Display::fmt(error, f),
            Error::Io(error) => Display::fmt(error, f),
            Error::PasswordMismatch => write!(f, "the two passwords entered do not match"),
        }
    }
}

/// Conditional printing of an error message, suppressed by `--quiet`.
#[macro_export]
macro_rules! print_error {
    ($args:expr, $fmt:literal $(,$arg:expr)*$(,)?) => {
        if !$args.quiet {
            eprintln!(concat!("[spritzcrypt] ", $fmt) $(, $arg)*);
        }
    };
}
