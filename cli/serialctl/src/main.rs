//! serialctl (sn) - CLI for serial number validation and issuance
//!
//! Operators and scripts use it to check candidate serials, inspect
//! ordinals, and compute the next serials after the last one issued.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
