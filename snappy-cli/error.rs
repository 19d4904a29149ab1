//! Error types for Snappy CLI operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Broad class of a failure, used to pick the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Path not found, permission denied, read/write fault, disk full
    Io,
    /// Input to decompress is not a valid block
    Codec,
    /// Unrecognized flag or malformed argument vector
    Usage,
}

/// Main error type for Snappy CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open input file
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Reading the input endpoint failed part way
    #[error("{target}: Read error: {source}")]
    Read {
        /// File path or stream label
        target: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Writing the output endpoint failed part way
    #[error("{target}: Write error: {source}")]
    Write {
        /// File path or stream label
        target: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The codec rejected the payload
    #[error("{input}: {source}")]
    Codec {
        /// File path or stream label of the payload's origin
        input: String,
        /// Error reported by the block codec
        #[source]
        source: snappy_core::Error,
    },

    /// Malformed command-line argument
    #[error("{0}")]
    InvalidArgument(String),
}

/// Specialized `Result` type for Snappy CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::OpenInput { .. }
            | Error::CreateOutput { .. }
            | Error::Read { .. }
            | Error::Write { .. } => ErrorKind::Io,
            Error::Codec { .. } => ErrorKind::Codec,
            Error::InvalidArgument(_) => ErrorKind::Usage,
        }
    }

    /// Process exit code for this error. Usage errors share clap's code.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Usage => 2,
            ErrorKind::Io | ErrorKind::Codec => 1,
        }
    }
}

/// An error tagged with the program that hit it, ready for stderr.
#[derive(Debug)]
pub struct InvocationError {
    /// Program name to prefix in error output
    pub program: String,
    /// Underlying error produced by processing
    pub source: Error,
}

impl InvocationError {
    /// Exit code the process should terminate with.
    pub fn exit_code(&self) -> i32 {
        self.source.exit_code()
    }
}

impl std::fmt::Display for InvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.program, self.source)
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
