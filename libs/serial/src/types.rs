//! Validated serial number type and sequence iterator.

use std::cmp::Ordering;

use crate::codec;
use crate::error::{DecodeError, ValidationError};
use crate::Ordinal;

// =============================================================================
// Serial Number
// =============================================================================

/// A serial number known to pass validation.
///
/// Ordering follows issuance order: shorter serials first, then by symbol
/// order within a length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialNumber(String);

impl SerialNumber {
    /// Parses and validates a serial number.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        codec::validate(s)?;
        Ok(Self(s.to_string()))
    }

    /// The first serial number of a fresh sequence.
    #[must_use]
    pub fn first() -> Self {
        Self(codec::first_serial())
    }

    /// Returns the serial number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the ordinal of this serial number.
    ///
    /// Fails only for serials long enough to overflow [`Ordinal`].
    pub fn ordinal(&self) -> Result<Ordinal, DecodeError> {
        codec::decode(&self.0)
    }

    /// Returns the next serial number.
    #[must_use]
    pub fn next(&self) -> Self {
        let mut digits: Vec<char> = self.0.chars().collect();
        codec::carry_increment(&mut digits);
        Self(digits.into_iter().collect())
    }

    /// Consumes the serial number, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for SerialNumber {
    fn default() -> Self {
        Self::first()
    }
}

impl Ord for SerialNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        // Alphabet order agrees with ASCII order, so equal-length serials
        // compare bytewise.
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for SerialNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for SerialNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SerialNumber {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        codec::validate(&s)?;
        Ok(Self(s))
    }
}

impl From<SerialNumber> for String {
    fn from(serial: SerialNumber) -> Self {
        serial.0
    }
}

impl AsRef<str> for SerialNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for SerialNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for SerialNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Serial Sequence
// =============================================================================

/// Iterator over successive serial numbers.
///
/// Never ends; pair it with `take` to issue a batch.
#[derive(Debug, Clone)]
pub struct SerialSequence {
    last: Option<SerialNumber>,
}

impl SerialSequence {
    /// Yields the serials after `last`, or from [`SerialNumber::first`]
    /// when there is no previous serial.
    #[must_use]
    pub fn starting_after(last: Option<SerialNumber>) -> Self {
        Self { last }
    }
}

impl Iterator for SerialSequence {
    type Item = SerialNumber;

    fn next(&mut self) -> Option<Self::Item> {
        let next = match &self.last {
            Some(last) => last.next(),
            None => SerialNumber::first(),
        };
        self.last = Some(next.clone());
        Some(next)
    }
}

// =============================================================================
// Tests
// =============================================================================
