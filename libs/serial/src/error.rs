//! Error types for serial number validation and decoding.

use thiserror::Error;

/// Errors raised when a candidate serial number breaks the schema.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The serial number has fewer than the minimum number of characters.
    #[error("serial number must be at least {min} characters, got {length}", min = crate::MIN_LENGTH)]
    TooShort { length: usize },

    /// The serial number contains a character outside the alphabet.
    #[error("serial number contains prohibited character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

impl ValidationError {
    /// Returns true if this error indicates the input was too short.
    pub fn is_too_short(&self) -> bool {
        matches!(self, ValidationError::TooShort { .. })
    }

    /// Returns the offending character, if any.
    pub fn character(&self) -> Option<char> {
        match self {
            ValidationError::InvalidCharacter { character, .. } => Some(*character),
            ValidationError::TooShort { .. } => None,
        }
    }
}

/// Errors raised when a string cannot be read as a numeral.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The string contains a character outside the alphabet.
    #[error("cannot decode prohibited character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The ordinal does not fit in [`crate::Ordinal`].
    #[error("serial number of {length} characters overflows the ordinal range")]
    Overflow { length: usize },
}

impl DecodeError {
    /// Returns the offending character, if any.
    pub fn character(&self) -> Option<char> {
        match self {
            DecodeError::InvalidCharacter { character, .. } => Some(*character),
            DecodeError::Overflow { .. } => None,
        }
    }
}
