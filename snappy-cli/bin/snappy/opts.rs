//! Command line argument parsing for the snappy utility

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing::debug;

use snappy_cli::{parse_path, CliConfig, Error, Lineage, OperationMode, ScopeFlags, STDOUT_LABEL};

/// Snappy compression utility
///
/// Compresses or decompresses data in the Snappy block format. Output can be
/// read by other Snappy block implementations (C++, Go, Java, JavaScript).
#[derive(Parser, Debug)]
#[command(
    name = "snappy",
    version,
    about = "Snappy compression utility",
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SnappyOpts {
    #[command(flatten)]
    pub io: IoArgs,

    /// Log what is being done to stderr
    #[arg(long = "verbose", global = true)]
    pub verbose: bool,

    /// Print the version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    _version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Input and output flags, accepted before and after the subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct IoArgs {
    /// Read input data from FILE (default: stdin)
    #[arg(short = 'i', long = "input", value_name = "FILE", value_parser = parse_path)]
    pub input: Option<PathBuf>,

    /// Write output data to FILE (default: stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE", value_parser = parse_path)]
    pub output: Option<PathBuf>,
}

impl IoArgs {
    fn scope(&self) -> ScopeFlags {
        ScopeFlags::from_values(self.input.clone(), self.output.clone())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress data
    #[command(visible_alias = "c")]
    Compress(IoArgs),

    /// Decompress data
    #[command(visible_alias = "d")]
    Decompress(IoArgs),

    /// Show a list of commands or help for one command
    #[command(visible_alias = "h")]
    Help {
        /// Command to describe
        #[arg(value_name = "COMMAND")]
        command: Option<String>,
    },

    /// Any other word in command position
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// What the invocation asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Print usage, optionally for one command
    Help(Option<String>),
    /// Compress or decompress
    Run(CliConfig),
}

impl SnappyOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Turns the parsed scopes into a single action. Without a subcommand the
    /// tool compresses, using only the top-level flags; an unrecognized
    /// command word shows the top-level usage.
    pub fn action(&self) -> Action {
        let top_level = self.io.scope();
        let (mode, lineage) = match &self.command {
            None => (OperationMode::Compress, Lineage::new(top_level)),
            Some(Command::Compress(args)) => (
                OperationMode::Compress,
                Lineage::new(args.scope()).with_parent(top_level),
            ),
            Some(Command::Decompress(args)) => (
                OperationMode::Decompress,
                Lineage::new(args.scope()).with_parent(top_level),
            ),
            Some(Command::Help { command }) => return Action::Help(command.clone()),
            Some(Command::Other(words)) => {
                debug!(command = ?words.first(), "unknown command, showing usage");
                return Action::Help(None);
            }
        };
        Action::Run(CliConfig::new(mode, lineage.resolve()))
    }
}

/// Command whose usage `help [COMMAND]` shows. Unknown names fall back to the
/// top-level usage.
pub fn help_command(topic: Option<&str>) -> clap::Command {
    let mut cmd = SnappyOpts::command();
    cmd.build();

    let sub = topic.and_then(|name| cmd.find_subcommand(name)).cloned();
    if sub.is_none() {
        if let Some(name) = topic {
            debug!(topic = name, "unknown help topic");
        }
    }
    sub.unwrap_or(cmd)
}

/// Prints usage for `topic` to stdout.
pub fn print_help(topic: Option<&str>) -> Result<(), Error> {
    help_command(topic)
        .print_help()
        .map_err(|source| Error::Write {
            target: STDOUT_LABEL.to_string(),
            source,
        })
}
