//! Validate command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sfl_serial::validate_serial_number;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_output, print_success, OutputFormat};

use super::CommandContext;

/// Check candidate serial numbers.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Serial numbers to check.
    #[arg(required = true)]
    serials: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ValidationRow {
    #[tabled(rename = "Serial")]
    serial: String,

    #[tabled(rename = "Valid")]
    valid: bool,

    #[tabled(rename = "Reason")]
    reason: String,
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        // A single serial reports its failure as the command error.
        if let [serial] = self.serials.as_slice() {
            if let Err(e) = validate_serial_number(serial) {
                debug!(serial = %serial, error = %e, "validation failed");
                return Err(CliError::invalid_serial(serial.clone(), e).into());
            }
        }

        let rows = check_all(&self.serials);
        let invalid = rows.iter().filter(|row| !row.valid).count();

        match ctx.format {
            OutputFormat::Table if rows.len() == 1 => {
                print_success(&format!("{} is a valid serial number", rows[0].serial));
            }
            _ => print_output(&rows, ctx.format),
        }

        if invalid > 0 {
            return Err(CliError::ValidationFailed {
                invalid,
                total: rows.len(),
            }
            .into());
        }

        Ok(())
    }
}

fn check_all(serials: &[String]) -> Vec<ValidationRow> {
    serials
        .iter()
        .map(|serial| {
            let result = validate_serial_number(serial);
            debug!(serial = %serial, valid = result.is_ok(), "validated");
            ValidationRow {
                serial: serial.clone(),
                valid: result.is_ok(),
                reason: result.err().map(|e| e.to_string()).unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_all_reports_each_serial() {
        let serials = vec!["ABC".to_string(), "AB".to_string(), "A0B".to_string()];
        let rows = check_all(&serials);

        assert!(rows[0].valid);
        assert!(rows[0].reason.is_empty());
        assert!(!rows[1].valid);
        assert!(rows[1].reason.contains("at least 3"));
        assert!(!rows[2].valid);
        assert!(rows[2].reason.contains("'0' at position 1"));
    }

    #[test]
    fn single_invalid_serial_is_a_command_error() {
        let cmd = ValidateCommand {
            serials: vec!["A0B".to_string()],
        };
        let err = cmd
            .run(CommandContext {
                format: OutputFormat::Json,
            })
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidSerial { .. })
        ));
    }
}
