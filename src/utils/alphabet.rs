//! Alphabet coordinate space shared by every rotor and reflector.
//!
//! All permutations and offsets are indices into the fixed 26-letter
//! alphabet `A..=Z`. Tables are stored as `[u8; 26]` index arrays so a
//! substitution is a single array lookup instead of a string scan.

use crate::error::{Result, RotorCryptError};

/// The plain alphabet, index 0 = `A`.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols (and rotor positions).
pub const ALPHABET_LEN: u8 = 26;

/// An index-to-index substitution table over the alphabet.
pub type Table = [u8; ALPHABET_LEN as usize];

/// Returns the alphabet index of an ASCII letter, either case.
///
/// # Returns
/// `None` for anything that is not an ASCII letter.
pub fn index_of(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Returns the uppercase letter at `index`.
///
/// # Panics
/// Panics if `index >= 26`.
pub fn symbol_at(index: u8) -> char {
    ALPHABET[index as usize] as char
}

/// `(index + offset) mod 26`.
#[inline]
pub fn shift_up(index: u8, offset: u8) -> u8 {
    (index + offset) % ALPHABET_LEN
}

/// `(26 + index - offset) mod 26`.
#[inline]
pub fn shift_down(index: u8, offset: u8) -> u8 {
    (ALPHABET_LEN + index - offset) % ALPHABET_LEN
}

/// Builds the inverse of a bijective table.
pub const fn invert(table: &Table) -> Table {
    let mut inverse = [0u8; ALPHABET_LEN as usize];
    let mut i = 0;
    while i < ALPHABET_LEN as usize {
        inverse[table[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

/// Compile-time table parser for the static catalogs.
///
/// Panics (a compile error when evaluated in a `const`) if `wiring` is not
/// a permutation of `A..=Z`.
pub(crate) const fn const_table(wiring: &str) -> Table {
    let bytes = wiring.as_bytes();
    assert!(bytes.len() == ALPHABET_LEN as usize, "wiring must have 26 letters");
    let mut table = [0u8; ALPHABET_LEN as usize];
    let mut seen = [false; ALPHABET_LEN as usize];
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_uppercase(), "wiring must be uppercase A-Z");
        let idx = bytes[i] - b'A';
        assert!(!seen[idx as usize], "wiring repeats a letter");
        seen[idx as usize] = true;
        table[i] = idx;
        i += 1;
    }
    table
}

/// Compile-time letter-set parser for notch and turnover positions.
///
/// Returns a bitmask with bit `i` set for each letter at index `i`.
pub(crate) const fn const_letter_mask(letters: &str) -> u32 {
    let bytes = letters.as_bytes();
    assert!(!bytes.is_empty() && bytes.len() <= 2, "1 or 2 letters expected");
    let mut mask = 0u32;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_uppercase(), "letters must be uppercase A-Z");
        mask |= 1u32 << (bytes[i] - b'A') as u32;
        i += 1;
    }
    mask
}

/// Parses a caller-supplied wiring string into a table.
///
/// # Errors
/// Returns [`RotorCryptError::InvalidWiring`] if the string is not exactly
/// 26 uppercase letters with no repeats.
pub fn parse_table(wiring: &str) -> Result<Table> {
    let invalid = |reason: String| RotorCryptError::InvalidWiring { reason };
    let bytes = wiring.as_bytes();
    if bytes.len() != ALPHABET_LEN as usize {
        return Err(invalid(format!(
            "expected 26 letters, found {}",
            bytes.len()
        )));
    }
    let mut table = [0u8; ALPHABET_LEN as usize];
    let mut seen = [false; ALPHABET_LEN as usize];
    for (contact, &b) in bytes.iter().enumerate() {
        if !b.is_ascii_uppercase() {
            return Err(invalid(format!(
                "'{}' at position {} is not an uppercase letter",
                b as char, contact
            )));
        }
        let idx = b - b'A';
        if seen[idx as usize] {
            return Err(invalid(format!("letter '{}' appears twice", b as char)));
        }
        seen[idx as usize] = true;
        table[contact] = idx;
    }
    Ok(table)
}

/// Parses 1 or 2 notch/turnover letters into a bitmask.
///
/// # Errors
/// Returns [`RotorCryptError::InvalidNotch`] on an empty set, more than two
/// letters, or a non-letter.
pub fn parse_letter_mask(letters: &str) -> Result<u32> {
    let invalid = |reason: String| RotorCryptError::InvalidNotch { reason };
    let count = letters.chars().count();
    if !(1..=2).contains(&count) {
        return Err(invalid(format!("expected 1 or 2 letters, found {}", count)));
    }
    letters.chars().try_fold(0u32, |mask, c| {
        if !c.is_ascii_uppercase() {
            return Err(invalid(format!("'{}' is not an uppercase letter", c)));
        }
        Ok(mask | 1u32 << (c as u8 - b'A') as u32)
    })
}
