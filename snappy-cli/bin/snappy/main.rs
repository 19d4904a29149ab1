//! Snappy compression utility
//!
//! Compresses or decompresses data in the Snappy block format, reading a file
//! or stdin and writing a file or stdout.

use std::process;

use tracing_subscriber::EnvFilter;

mod opts;

use opts::{Action, SnappyOpts};

use snappy_cli::{run_cli, PROGRAM_NAME};

/// Logs go to stderr; stdout may be carrying compressed data.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn main() {
    let opts = SnappyOpts::parse();
    init_logging(opts.verbose);

    match opts.action() {
        Action::Help(topic) => {
            if let Err(err) = opts::print_help(topic.as_deref()) {
                eprintln!("{PROGRAM_NAME}: {err}");
                process::exit(err.exit_code());
            }
        }
        Action::Run(config) => {
            if let Err(err) = run_cli(&config, PROGRAM_NAME) {
                eprintln!("{err}");
                process::exit(err.exit_code());
            }
        }
    }
}
