//! Validation, decoding, encoding, and increment over the serial alphabet.
//!
//! Serial numbers are bijective base-34 numerals: each symbol is worth its
//! alphabet index plus one, most-significant digit first. There is no zero
//! digit, so every string over the alphabet has exactly one ordinal and
//! every ordinal has exactly one string.

use crate::alphabet::{contains, index_of, successor, ALPHABET, FIRST, LAST, RADIX};
use crate::error::{DecodeError, ValidationError};
use crate::{Ordinal, MIN_LENGTH};

/// Stateless handle over the codec operations.
///
/// Useful where a collaborator wants a value to hold or pass around instead
/// of calling the free functions directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec;

impl Codec {
    /// See [`alphabet`].
    #[must_use]
    pub const fn alphabet(&self) -> &'static [char; RADIX] {
        alphabet()
    }

    /// See [`validate`].
    pub fn validate(&self, serial: &str) -> Result<(), ValidationError> {
        validate(serial)
    }

    /// See [`decode`].
    pub fn decode(&self, serial: &str) -> Result<Ordinal, DecodeError> {
        decode(serial)
    }

    /// See [`encode`].
    #[must_use]
    pub fn encode(&self, ordinal: Ordinal) -> String {
        encode(ordinal)
    }

    /// See [`increment`].
    pub fn increment(&self, serial: Option<&str>) -> Result<String, DecodeError> {
        increment(serial)
    }
}

/// Returns the digit set in increment order.
#[must_use]
pub const fn alphabet() -> &'static [char; RADIX] {
    &ALPHABET
}

/// Returns the smallest valid serial number (`"111"`).
#[must_use]
pub fn first_serial() -> String {
    FIRST.to_string().repeat(MIN_LENGTH)
}

/// Checks that `serial` is at least three characters long and uses only
/// alphabet symbols.
pub fn validate(serial: &str) -> Result<(), ValidationError> {
    let length = serial.chars().count();
    if length < MIN_LENGTH {
        return Err(ValidationError::TooShort { length });
    }

    match first_invalid(serial) {
        Some((position, character)) => Err(ValidationError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Converts `serial` to its ordinal.
///
/// Does not enforce the minimum length; the empty string decodes to 0.
/// Characters are checked before any arithmetic, so an off-alphabet
/// character is reported even in a string long enough to overflow.
pub fn decode(serial: &str) -> Result<Ordinal, DecodeError> {
    if let Some((position, character)) = first_invalid(serial) {
        return Err(DecodeError::InvalidCharacter {
            character,
            position,
        });
    }

    let mut ordinal: Ordinal = 0;

    for digit in serial.chars().filter_map(index_of) {
        let digit = digit as Ordinal + 1;
        ordinal = ordinal
            .checked_mul(RADIX as Ordinal)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| DecodeError::Overflow {
                length: serial.chars().count(),
            })?;
    }

    Ok(ordinal)
}

/// Converts an ordinal to its serial string. `encode(0)` is empty.
#[must_use]
pub fn encode(ordinal: Ordinal) -> String {
    let mut remaining = ordinal;
    let mut digits = Vec::new();

    while remaining > 0 {
        remaining -= 1;
        digits.push(ALPHABET[(remaining % RADIX as Ordinal) as usize]);
        remaining /= RADIX as Ordinal;
    }

    digits.iter().rev().collect()
}

/// Returns the serial number that follows `serial`.
///
/// `None` or an empty seed starts a fresh sequence at [`first_serial`].
/// Carries run right to left; when every position wraps a new leading
/// symbol is prepended, so `ZZZ` becomes `1111`.
pub fn increment(serial: Option<&str>) -> Result<String, DecodeError> {
    let seed = match serial {
        Some(s) if !s.is_empty() => s,
        _ => return Ok(first_serial()),
    };

    if let Some((position, character)) = first_invalid(seed) {
        return Err(DecodeError::InvalidCharacter {
            character,
            position,
        });
    }

    let mut digits: Vec<char> = seed.chars().collect();
    carry_increment(&mut digits);
    Ok(digits.into_iter().collect())
}

/// Adds one to a digit vector already known to hold only alphabet symbols.
pub(crate) fn carry_increment(digits: &mut Vec<char>) {
    for digit in digits.iter_mut().rev() {
        match successor(*digit) {
            Some(next) => {
                *digit = next;
                return;
            }
            None => {
                debug_assert_eq!(*digit, LAST);
                *digit = FIRST;
            }
        }
    }

    digits.insert(0, FIRST);
}

fn first_invalid(serial: &str) -> Option<(usize, char)> {
    serial.chars().enumerate().find(|(_, c)| !contains(*c))
}
