//! Error types and result handling for Snappy block operations.

use std::fmt;

pub use snap::Error as BackendError;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of block compression and decompression.
#[derive(Debug)]
pub enum Error {
    /// Decompression was given zero bytes; a block always has a length header.
    Empty,

    /// The input is longer than a block header can describe.
    TooLarge {
        /// Length of the rejected input
        len: usize,
        /// Largest input a single block may hold
        max: u64,
    },

    /// The block is truncated, corrupt, or not a Snappy block at all.
    Corrupt(BackendError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Empty => write!(f, "corrupt input (empty block)"),
            Error::TooLarge { len, max } => write!(
                f,
                "input of {len} bytes exceeds the block limit of {max} bytes",
            ),
            // Callers add the program name themselves.
            Error::Corrupt(err) => {
                let msg = err.to_string();
                f.write_str(msg.strip_prefix("snappy: ").unwrap_or(&msg))
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Corrupt(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        Error::Corrupt(err)
    }
}
