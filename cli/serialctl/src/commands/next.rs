//! Next command (serial issuance).
//!
//! Stateless: the caller supplies the last issued serial and records the
//! output itself.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sfl_serial::{SerialNumber, SerialSequence};
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Compute the serial numbers after the last one issued.
#[derive(Debug, Args)]
pub struct NextCommand {
    /// Last issued serial number. Omit to start a fresh sequence.
    last: Option<String>,

    /// Number of serial numbers to produce.
    #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u32).range(1..=10_000))]
    count: u32,
}

#[derive(Debug, Serialize, Tabled)]
struct IssuedRow {
    #[tabled(rename = "Serial")]
    serial: String,
}

impl NextCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let issued = next_serials(self.last.as_deref(), self.count)?;
        debug!(
            last = self.last.as_deref().unwrap_or("-"),
            count = issued.len(),
            "issued serial numbers"
        );

        let rows: Vec<IssuedRow> = issued
            .into_iter()
            .map(|serial| IssuedRow {
                serial: serial.into_inner(),
            })
            .collect();
        print_output(&rows, ctx.format);
        Ok(())
    }
}

/// Validates the seed, then produces `count` successive serials after it.
fn next_serials(last: Option<&str>, count: u32) -> Result<Vec<SerialNumber>, CliError> {
    let seed = match last.filter(|s| !s.is_empty()) {
        Some(s) => {
            let seed =
                SerialNumber::parse(s).map_err(|e| CliError::invalid_serial(s, e))?;
            Some(seed)
        }
        None => None,
    };

    Ok(SerialSequence::starting_after(seed)
        .take(count as usize)
        .collect())
}
