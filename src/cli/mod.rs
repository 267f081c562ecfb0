//! Command-line entry: flag parsing, interactive prompts and output.

mod args;
mod context;
mod interactive;
pub mod prompts;
pub mod quiet;

use std::error::Error as _;

use clap::Parser;

pub use args::CliArgs;
pub use context::Context;
pub use interactive::{Prompter, parse_length, parse_yes_no};

use crate::error::{InvalidRequest, Result};

/// Parse the process arguments and run. clap handles `--help`/`--version`
/// and usage errors itself; a rejected length is reported like any other
/// invalid request.
pub fn run() -> Result<()> {
    let args = CliArgs::try_parse().or_else(|e| match invalid_request(&e) {
        Some(invalid) => Err(invalid),
        None => e.exit(),
    })?;
    log::debug!("{:?}", args);
    Context::new(args).run()
}

fn invalid_request(e: &clap::Error) -> Option<InvalidRequest> {
    e.source()?.downcast_ref::<InvalidRequest>().cloned()
}
