//! Error handling and display for the CLI.

use colored::Colorize;
use sfl_serial::{DecodeError, ValidationError};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid serial number '{serial}': {source}")]
    InvalidSerial {
        serial: String,
        #[source]
        source: ValidationError,
    },

    #[error("Cannot decode '{serial}': {source}")]
    Decode {
        serial: String,
        #[source]
        source: DecodeError,
    },

    #[error("{invalid} of {total} serial numbers failed validation")]
    ValidationFailed { invalid: usize, total: usize },
}

impl CliError {
    /// Wrap a validation failure with the serial that caused it.
    pub fn invalid_serial(serial: impl Into<String>, source: ValidationError) -> Self {
        Self::InvalidSerial {
            serial: serial.into(),
            source,
        }
    }

    /// Wrap a decode failure with the serial that caused it.
    pub fn decode(serial: impl Into<String>, source: DecodeError) -> Self {
        Self::Decode {
            serial: serial.into(),
            source,
        }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = err.downcast_ref::<CliError>().and_then(hint_for) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

/// Suggest a correction for the common ways a serial gets mistyped.
fn hint_for(err: &CliError) -> Option<String> {
    let character = match err {
        CliError::InvalidSerial { source, .. } if source.is_too_short() => {
            return Some(format!(
                "Serial numbers are at least {} characters long.",
                sfl_serial::MIN_LENGTH
            ))
        }
        CliError::InvalidSerial { source, .. } => source.character()?,
        CliError::Decode {
            source: DecodeError::Overflow { .. },
            ..
        } => return Some("Ordinals are limited to 128 bits.".to_string()),
        CliError::Decode { source, .. } => source.character()?,
        CliError::ValidationFailed { .. } => {
            return Some("Run `sn validate <SERIAL>` on a single value for details.".to_string())
        }
    };

    let hint = match character {
        '0' | 'O' => "'0' and 'O' are never used in serial numbers.".to_string(),
        c if c.is_ascii_lowercase() => "Serial numbers are uppercase.".to_string(),
        _ => format!(
            "Allowed characters are {}.",
            sfl_serial::alphabet().iter().collect::<String>()
        ),
    };
    Some(hint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_for_excluded_character() {
        let err = CliError::invalid_serial(
            "A0B",
            ValidationError::InvalidCharacter {
                character: '0',
                position: 1,
            },
        );
        let hint = hint_for(&err).unwrap();
        assert!(hint.contains("never used"));
    }

    #[test]
    fn hint_for_lowercase() {
        let err = CliError::decode(
            "abc",
            DecodeError::InvalidCharacter {
                character: 'a',
                position: 0,
            },
        );
        assert_eq!(hint_for(&err).unwrap(), "Serial numbers are uppercase.");
    }

    #[test]
    fn hint_for_too_short() {
        let err = CliError::invalid_serial("AB", ValidationError::TooShort { length: 2 });
        assert!(hint_for(&err).unwrap().contains("at least 3"));
    }

    #[test]
    fn hint_for_batch_failure() {
        let err = CliError::ValidationFailed {
            invalid: 1,
            total: 3,
        };
        assert!(hint_for(&err).unwrap().contains("sn validate"));
    }

    #[test]
    fn invalid_serial_message_includes_reason() {
        let err = CliError::invalid_serial("AB", ValidationError::TooShort { length: 2 });
        assert_eq!(
            err.to_string(),
            "Invalid serial number 'AB': serial number must be at least 3 characters, got 2"
        );
    }
}
