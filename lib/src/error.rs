// SPDX-License-Identifier: 0BSD
// spritzcrypt

use std::fmt;
use std::io;

/// Errors that can occur while hashing, encrypting, decrypting, checking, or rekeying data.
#[derive(Debug)]
pub enum Error {
    /// An underlying I/O operation failed.
    Io(io::Error),
    /// The input did not have the expected file-header shape (too short, or the header self-check failed).
    Corrupt,
    /// The header decrypted, but the embedded self-check did not match — the password is wrong.
    BadPassword,
    /// A requested buffer or digest size could not be allocated or is otherwise out of range.
    Alloc,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {err}"),
            Error::Corrupt => write!(f, "corrupt or truncated file header"),
            Error::BadPassword => write!(f, "incorrect password"),
            Error::Alloc => write!(f, "invalid or unsupported size requested"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
