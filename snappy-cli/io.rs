//! Endpoint resolution and whole-payload I/O for the Snappy CLI.
//!
//! An [`Endpoint`] is either the process's standard stream or a file path.
//! File handles opened here live only for the duration of one call and are
//! released on every return path; the standard streams are never closed.

use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{DEFAULT_BUFFER_SIZE, STDIN_LABEL, STDOUT_LABEL};
use crate::error::{Error, Result};


/// Source or destination of a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Endpoint {
    /// Standard input or standard output
    #[default]
    Default,
    /// A named file
    Path(PathBuf),
}

impl Endpoint {
    /// Whether this endpoint is the standard stream.
    pub fn is_default(&self) -> bool {
        matches!(self, Endpoint::Default)
    }

    /// The file path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Endpoint::Default => None,
            Endpoint::Path(path) => Some(path),
        }
    }

    /// Name for messages: the path, or `stream` for the standard stream.
    pub fn label(&self, stream: &str) -> String {
        match self {
            Endpoint::Default => stream.to_string(),
            Endpoint::Path(path) => path.display().to_string(),
        }
    }
}

impl From<Option<PathBuf>> for Endpoint {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Endpoint::Default, Endpoint::Path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Default => f.write_str("-"),
            Endpoint::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Opens a reader for the endpoint.
///
/// # Parameters
///
/// * `endpoint` - File to open, or [`Endpoint::Default`] for stdin
///
/// # Errors
///
/// Returns [`Error::OpenInput`] if the file does not exist or cannot be read.
pub fn open_input(endpoint: &Endpoint) -> Result<Box<dyn Read>> {
    match endpoint {
        Endpoint::Default => Ok(Box::new(io::BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            io::stdin(),
        ))),
        Endpoint::Path(path) => {
            let file = File::open(path).map_err(|source| Error::OpenInput {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(io::BufReader::with_capacity(
                DEFAULT_BUFFER_SIZE,
                file,
            )))
        }
    }
}

/// Opens a writer for the endpoint, creating or truncating the file.
///
/// # Parameters
///
/// * `endpoint` - File to create, or [`Endpoint::Default`] for stdout
///
/// # Errors
///
/// Returns [`Error::CreateOutput`] on permission or path errors.
pub fn open_output(endpoint: &Endpoint) -> Result<Box<dyn Write>> {
    match endpoint {
        Endpoint::Default => Ok(Box::new(io::BufWriter::with_capacity(
            DEFAULT_BUFFER_SIZE,
            io::stdout(),
        ))),
        Endpoint::Path(path) => {
            let file = File::create(path).map_err(|source| Error::CreateOutput {
                path: path.clone(),
                source,
            })?;
            Ok(Box::new(io::BufWriter::with_capacity(
                DEFAULT_BUFFER_SIZE,
                file,
            )))
        }
    }
}

/// Reads everything from `reader`. An immediately exhausted reader yields an
/// empty payload.
///
/// # Errors
///
/// Returns [`Error::Read`] labelled with `target` on any read fault.
pub fn read_all(mut reader: impl Read, target: &str) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    reader
        .read_to_end(&mut payload)
        .map_err(|source| Error::Read {
            target: target.to_string(),
            source,
        })?;
    Ok(payload)
}

/// Writes all of `data` to `writer` and flushes it.
///
/// # Errors
///
/// Returns [`Error::Write`] labelled with `target` on any write or flush
/// fault.
pub fn write_all(mut writer: impl Write, data: &[u8], target: &str) -> Result<()> {
    writer
        .write_all(data)
        .and_then(|()| writer.flush())
        .map_err(|source| Error::Write {
            target: target.to_string(),
            source,
        })
}

/// Opens the input endpoint, reads it to the end and releases it.
///
/// # Errors
///
/// Fails if the endpoint cannot be opened or read.
pub fn read_payload(endpoint: &Endpoint) -> Result<Vec<u8>> {
    let reader = open_input(endpoint)?;
    let payload = read_all(reader, &endpoint.label(STDIN_LABEL))?;
    debug!(input = %endpoint, bytes = payload.len(), "read payload");
    Ok(payload)
}

/// Opens the output endpoint, writes `data` in full and releases it.
///
/// A file endpoint is truncated before writing; if writing fails the file may
/// be left empty or partially written.
///
/// # Errors
///
/// Fails if the endpoint cannot be created or written.
pub fn write_payload(endpoint: &Endpoint, data: &[u8]) -> Result<()> {
    let writer = open_output(endpoint)?;
    write_all(writer, data, &endpoint.label(STDOUT_LABEL))?;
    debug!(output = %endpoint, bytes = data.len(), "wrote payload");
    Ok(())
}
