//! Decode command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sfl_serial::convert_serial_to_int;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::CommandContext;

/// Convert serial numbers to ordinals.
#[derive(Debug, Args)]
pub struct DecodeCommand {
    /// Serial numbers to decode.
    #[arg(required = true)]
    serials: Vec<String>,
}

/// Ordinals are strings in output; they exceed JSON's safe integer range.
#[derive(Debug, Serialize, Tabled)]
struct OrdinalRow {
    #[tabled(rename = "Serial")]
    serial: String,

    #[tabled(rename = "Ordinal")]
    ordinal: String,
}

impl DecodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = decode_all(&self.serials)?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn decode_all(serials: &[String]) -> Result<Vec<OrdinalRow>, CliError> {
    serials
        .iter()
        .map(|serial| {
            let ordinal = convert_serial_to_int(serial)
                .map_err(|e| CliError::decode(serial.clone(), e))?;
            debug!(serial = %serial, ordinal = %ordinal, "decoded");
            Ok(OrdinalRow {
                serial: serial.clone(),
                ordinal: ordinal.to_string(),
            })
        })
        .collect()
}
