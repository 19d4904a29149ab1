//! Flag lineage resolution.
//!
//! The `-i`/`-o` flags may be given at the top level (before the subcommand)
//! and again inside the subcommand. Each level records what it saw in its own
//! [`ScopeFlags`] table; a [`Lineage`] orders those tables from the subcommand
//! outward to the top level and is resolved once into [`ResolvedOptions`].
//!
//! Resolution scans the lineage in that order and keeps the last value seen,
//! so a top-level flag overrides the same flag given to the subcommand.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::io::Endpoint;

/// Options that take part in lineage resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IoFlag {
    /// `-i FILE`, `--input FILE`
    Input,
    /// `-o FILE`, `--output FILE`
    Output,
}

impl IoFlag {
    /// Every flag the resolver knows about.
    pub const ALL: [IoFlag; 2] = [IoFlag::Input, IoFlag::Output];

    /// Long flag name, without dashes.
    pub fn name(self) -> &'static str {
        match self {
            IoFlag::Input => "input",
            IoFlag::Output => "output",
        }
    }
}

/// Flags explicitly set at one scope of the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeFlags {
    values: BTreeMap<IoFlag, PathBuf>,
}

impl ScopeFlags {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a scope from the optional `input` and `output` values a parser
    /// produced for it.
    pub fn from_values(input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        let mut scope = Self::new();
        if let Some(path) = input {
            scope.set(IoFlag::Input, path);
        }
        if let Some(path) = output {
            scope.set(IoFlag::Output, path);
        }
        scope
    }

    /// Records `value` for `flag`, replacing any earlier value at this scope.
    pub fn set(&mut self, flag: IoFlag, value: impl Into<PathBuf>) {
        self.values.insert(flag, value.into());
    }

    /// Returns the value for `flag` if it was set at this scope.
    pub fn get(&self, flag: IoFlag) -> Option<&Path> {
        self.values.get(&flag).map(PathBuf::as_path)
    }
}

/// Chain of scopes from the invoked subcommand up to the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lineage {
    scopes: Vec<ScopeFlags>,
}

impl Lineage {
    /// Starts a lineage at the innermost scope.
    pub fn new(innermost: ScopeFlags) -> Self {
        Self {
            scopes: vec![innermost],
        }
    }

    /// Appends the next enclosing scope.
    #[must_use]
    pub fn with_parent(mut self, parent: ScopeFlags) -> Self {
        self.scopes.push(parent);
        self
    }

    /// Returns the winning value for `flag`: the one from the outermost scope
    /// that set it.
    pub fn value_of(&self, flag: IoFlag) -> Option<&Path> {
        self.scopes.iter().rev().find_map(|scope| scope.get(flag))
    }

    /// Resolves every known flag into an endpoint.
    pub fn resolve(&self) -> ResolvedOptions {
        let mut resolved = ResolvedOptions::default();
        for flag in IoFlag::ALL {
            let endpoint = Endpoint::from(self.value_of(flag).map(Path::to_path_buf));
            debug!(
                flag = flag.name(),
                scopes = self.scopes.len(),
                %endpoint,
                "resolved flag lineage"
            );
            *resolved.endpoint_mut(flag) = endpoint;
        }
        resolved
    }
}

/// Final input and output endpoints for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOptions {
    /// Where to read the payload from
    pub input: Endpoint,
    /// Where to write the result to
    pub output: Endpoint,
}

impl ResolvedOptions {
    fn endpoint_mut(&mut self, flag: IoFlag) -> &mut Endpoint {
        match flag {
            IoFlag::Input => &mut self.input,
            IoFlag::Output => &mut self.output,
        }
    }
}
