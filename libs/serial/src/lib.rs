//! # sfl-serial
//!
//! Serial number alphabet, validation, and increment for labelling
//! manufactured units in sequence.
//!
//! ## Serial Format
//!
//! A serial number is at least three characters drawn from uppercase
//! alphanumerics, minus the look-alikes `0` and `O`:
//!
//! ```text
//! 123456789ABCDEFGHIJKLMNPQRSTUVWXYZ
//! ```
//!
//! The alphabet order is the increment order:
//!
//! - `111` -> `112`
//! - `AB9` -> `ABA`
//! - `AAZ` -> `AB1`
//! - `ZZZ` -> `1111`
//!
//! ## Entry Points
//!
//! Host integrations call [`validate_serial_number`],
//! [`convert_serial_to_int`], and [`increment_serial_number`]. Persisting
//! the last issued serial and enforcing uniqueness are the caller's job.

pub mod alphabet;
pub mod codec;
mod error;
mod types;

pub use codec::{alphabet, decode, encode, first_serial, increment, validate, Codec};
pub use error::{DecodeError, ValidationError};
pub use types::{SerialNumber, SerialSequence};

/// Position of a serial number in the increment sequence.
pub type Ordinal = u128;

/// Minimum number of characters in a valid serial number.
pub const MIN_LENGTH: usize = 3;

/// Checks a candidate serial number before it is accepted.
pub fn validate_serial_number(serial: &str) -> Result<(), ValidationError> {
    codec::validate(serial)
}

/// Converts a serial number to its ordinal.
pub fn convert_serial_to_int(serial: &str) -> Result<Ordinal, DecodeError> {
    codec::decode(serial)
}

/// Returns the serial number after `serial`, or the first serial when
/// there is no previous one.
pub fn increment_serial_number(serial: Option<&str>) -> Result<String, DecodeError> {
    codec::increment(serial)
}
