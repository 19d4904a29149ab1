//! Shared functionality for the `snappy` command-line tool.
//!
//! This crate sits between the argument parser in the binary and the block
//! codec in `snappy-core`: it resolves `-i`/`-o` flags given at several
//! scopes, turns them into input and output endpoints, and runs one
//! compress or decompress pass over the whole payload.

pub mod config;
pub mod error;
pub mod io;
pub mod lineage;
pub mod operations;
pub mod process;


pub use config::{
    CliConfig, OperationMode, DEFAULT_BUFFER_SIZE, PROGRAM_NAME, STDIN_LABEL, STDOUT_LABEL,
};
pub use error::{Error, ErrorKind, InvocationError, Result};
pub use io::{open_input, open_output, read_payload, write_payload, Endpoint};
pub use lineage::{IoFlag, Lineage, ResolvedOptions, ScopeFlags};
pub use operations::{compress_payload, decompress_payload};
pub use process::{parse_path, process, run_cli};
