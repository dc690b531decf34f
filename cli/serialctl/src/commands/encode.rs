//! Encode command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sfl_serial::{encode, validate_serial_number, Ordinal};
use tracing::debug;

use crate::output::{print_info, print_single, OutputFormat};

use super::CommandContext;

/// Convert an ordinal to its serial number.
#[derive(Debug, Args)]
pub struct EncodeCommand {
    /// Ordinal to encode.
    ordinal: Ordinal,
}

#[derive(Debug, Serialize)]
struct EncodedView {
    ordinal: String,
    serial: String,
    valid: bool,
}

impl EncodeCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let view = encode_view(self.ordinal);
        debug!(ordinal = %self.ordinal, serial = %view.serial, "encoded");

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => {
                println!("{}", view.serial);
                if !view.valid {
                    print_info("ordinal is below the first valid serial number");
                }
            }
        }

        Ok(())
    }
}

fn encode_view(ordinal: Ordinal) -> EncodedView {
    let serial = encode(ordinal);
    EncodedView {
        ordinal: ordinal.to_string(),
        valid: validate_serial_number(&serial).is_ok(),
        serial,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_view_flags_short_serials() {
        let view = encode_view(34);
        assert_eq!(view.serial, "Z");
        assert!(!view.valid);
    }

    #[test]
    fn encode_view_of_first_serial() {
        let first = sfl_serial::convert_serial_to_int("111").unwrap();
        let view = encode_view(first);
        assert_eq!(view.serial, "111");
        assert!(view.valid);
        assert_eq!(view.ordinal, first.to_string());
    }
}
