//! Error types for the rotorcrypt library.
//!
//! Every variant is a configuration error: they surface while building a
//! [`Machine`](crate::Machine) or validating tables, never while encoding.

use thiserror::Error;

/// Errors produced by the rotorcrypt library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotorCryptError {
    /// Rotor identifier not present in the catalog.
    #[error("Unknown rotor identifier: {0}")]
    UnknownRotor(String),

    /// Reflector identifier not present in the catalog.
    #[error("Unknown reflector identifier: {0}")]
    UnknownReflector(String),

    /// Rotor wiring is not a permutation of the alphabet.
    #[error("Invalid rotor wiring: {reason}")]
    InvalidWiring { reason: String },

    /// Reflector wiring is not a fixed-point-free involution.
    #[error("Invalid reflector wiring: {reason}")]
    InvalidReflector { reason: String },

    /// Notch or turnover letters are malformed.
    #[error("Invalid notch set: {reason}")]
    InvalidNotch { reason: String },

    /// A machine needs at least one rotor.
    #[error("Machine must have at least one rotor")]
    NoRotors,

    /// Starting offset is outside 0..26.
    #[error("Offset {offset} for rotor slot {rotor} is outside the range 0..26")]
    OffsetOutOfRange { rotor: usize, offset: u8 },

    /// Window character in the compact form is not a letter.
    #[error("Window character {letter:?} for rotor slot {rotor} is not a letter A-Z")]
    InvalidWindow { rotor: usize, letter: char },

    /// Number of offsets does not match the number of rotors.
    #[error("Expected {expected} offsets, got {got}")]
    OffsetCountMismatch { expected: usize, got: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RotorCryptError>;
