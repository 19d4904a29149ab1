//! Compression and decompression of in-memory payloads.

use tracing::debug;

use crate::error::{Error, Result};

/// Compresses `payload` into one Snappy block.
///
/// `input` names where the payload came from and is only used for error
/// context.
///
/// # Errors
///
/// Returns [`Error::Codec`] if the payload is too large for a single block.
pub fn compress_payload(payload: &[u8], input: &str) -> Result<Vec<u8>> {
    let block = snappy_core::compress(payload).map_err(|source| Error::Codec {
        input: input.to_string(),
        source,
    })?;
    debug!(input = payload.len(), output = block.len(), "compressed");
    Ok(block)
}

/// Decompresses one Snappy block.
///
/// # Errors
///
/// Returns [`Error::Codec`] if `block` is empty, truncated, corrupt, or not a
/// Snappy block. Nothing is returned from a block that fails validation.
pub fn decompress_payload(block: &[u8], input: &str) -> Result<Vec<u8>> {
    let payload = snappy_core::decompress(block).map_err(|source| Error::Codec {
        input: input.to_string(),
        source,
    })?;
    debug!(input = block.len(), output = payload.len(), "decompressed");
    Ok(payload)
}
