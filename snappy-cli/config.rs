//! Configuration types and constants for Snappy CLI operations.

use crate::lineage::ResolvedOptions;

/// Name used to prefix diagnostics
pub const PROGRAM_NAME: &str = "snappy";

/// Default buffer size for file I/O operations
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Label for the default input stream in messages
pub const STDIN_LABEL: &str = "(stdin)";

/// Label for the default output stream in messages
pub const STDOUT_LABEL: &str = "(stdout)";

/// Represents the two data-transforming commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Compress input data into a Snappy block
    Compress,
    /// Decompress a Snappy block
    Decompress,
}

/// Configuration for a single compress or decompress run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Operation mode
    pub mode: OperationMode,
    /// Input and output endpoints after lineage resolution
    pub options: ResolvedOptions,
}

impl CliConfig {
    /// Creates a configuration for `mode` over already resolved endpoints.
    pub fn new(mode: OperationMode, options: ResolvedOptions) -> Self {
        Self { mode, options }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            mode: OperationMode::Compress,
            options: ResolvedOptions::default(),
        }
    }
}
