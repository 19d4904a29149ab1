//! One-shot block encoding and decoding.
//!
//! Every call builds its own encoder or decoder, so nothing is shared between
//! calls and the functions are safe to use from any thread.

use snap::raw::{Decoder, Encoder};
use tracing::trace;

use crate::error::{Error, Result};

/// Largest input a single block can describe: the header is a 32-bit varint.
pub const MAX_BLOCK_LEN: u64 = u32::MAX as u64;

/// Compresses `input` into a single Snappy block.
///
/// Any input up to [`MAX_BLOCK_LEN`] bytes is accepted, including the empty
/// slice, which encodes to the one-byte block `[0x00]`.
///
/// # Errors
///
/// Returns [`Error::TooLarge`] when `input` is longer than [`MAX_BLOCK_LEN`].
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if input.len() as u64 > MAX_BLOCK_LEN {
        return Err(Error::TooLarge {
            len: input.len(),
            max: MAX_BLOCK_LEN,
        });
    }

    let output = Encoder::new().compress_vec(input)?;
    trace!(input = input.len(), output = output.len(), "encoded block");
    Ok(output)
}

/// Decompresses a single Snappy block.
///
/// The whole block is validated; on failure no partially decoded bytes are
/// returned.
///
/// # Errors
///
/// - [`Error::Empty`] when `input` has no bytes at all
/// - [`Error::Corrupt`] when the header or any element is invalid, or the
///   block is truncated
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(Error::Empty);
    }

    let output = Decoder::new().decompress_vec(input)?;
    trace!(input = input.len(), output = output.len(), "decoded block");
    Ok(output)
}

/// Reads the uncompressed length from a block header without decoding it.
///
/// # Errors
///
/// Returns [`Error::Empty`] for empty input and [`Error::Corrupt`] when the
/// header is not a valid varint.
pub fn decompress_len(input: &[u8]) -> Result<usize> {
    if input.is_empty() {
        return Err(Error::Empty);
    }
    Ok(snap::raw::decompress_len(input)?)
}

/// Worst-case encoded size for an input of `input_len` bytes.
///
/// Returns `0` when `input_len` is too large to fit in one block.
pub fn max_compress_len(input_len: usize) -> usize {
    snap::raw::max_compress_len(input_len)
}
