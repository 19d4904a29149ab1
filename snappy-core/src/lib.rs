//! # snappy-core
//!
//! Snappy block format compression and decompression.
//!
//! A block is self-contained: a varint-encoded uncompressed length followed by
//! literal and copy elements. Blocks written here can be read by any other
//! implementation of the published format (Google C++, Go, Java, JavaScript)
//! and vice versa. The framing (streaming) format is not handled.

pub mod block;
pub mod error;


pub use block::{compress, decompress, decompress_len, max_compress_len, MAX_BLOCK_LEN};
pub use error::{BackendError, Error, Result};
