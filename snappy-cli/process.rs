//! High-level processing and CLI orchestration.

use std::path::PathBuf;

use tracing::debug;

use crate::config::{CliConfig, OperationMode, STDIN_LABEL};
use crate::error::{Error, InvocationError, Result};
use crate::io::{read_payload, write_payload};
use crate::operations::{compress_payload, decompress_payload};

/// Runs one compress or decompress pass.
///
/// The workflow is:
///
/// 1. Read the whole input endpoint (file or stdin) into memory
/// 2. Transform it with the block codec
/// 3. Create or truncate the output endpoint (file or stdout) and write the
///    result
///
/// The output is only opened once the transformed bytes exist, so a missing
/// input file or an invalid block never creates or truncates the output file.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - Input file cannot be opened or read
/// - Decompression input is not a valid Snappy block
/// - Output file cannot be created or written
pub fn process(config: &CliConfig) -> Result<()> {
    let input = &config.options.input;
    let output = &config.options.output;
    debug!(mode = ?config.mode, %input, %output, "processing");

    let payload = read_payload(input)?;
    let label = input.label(STDIN_LABEL);

    let transformed = match config.mode {
        OperationMode::Compress => compress_payload(&payload, &label)?,
        OperationMode::Decompress => decompress_payload(&payload, &label)?,
    };
    // Release the input buffer before the output side allocates.
    drop(payload);

    write_payload(output, &transformed)
}

/// Value parser for `-i`/`-o`: any non-empty path.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for an empty string, which would be
/// ambiguous with "use the standard stream".
pub fn parse_path(s: &str) -> std::result::Result<PathBuf, Error> {
    if s.is_empty() {
        return Err(Error::InvalidArgument(
            "path must not be empty; omit the flag to use the standard stream".to_string(),
        ));
    }
    Ok(PathBuf::from(s))
}

/// Runs a configured command and tags any failure with the program name.
///
/// # Errors
///
/// Returns the first failure; nothing is retried.
pub fn run_cli(config: &CliConfig, program: &str) -> std::result::Result<(), InvocationError> {
    process(config).map_err(|source| InvocationError {
        program: program.to_string(),
        source,
    })
}
