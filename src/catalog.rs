//! Static catalog of historical rotor and reflector wirings.
//!
//! Wirings are parsed into index tables at compile time; a malformed
//! table in this file fails the build rather than a machine at runtime.
//!
//! ```text
//! Rotor   Wiring                      Notch   Turnover
//! I       EKMFLGDQVZNTOWYHXUSPAIBRCJ  Q       R
//! II      AJDKSIRUXBLHWTMCQGZNPYFVOE  E       F
//! III     BDFHJLCPRTXVZNYEIWGAKMUSQO  V       W
//! IV      ESOVPZJAYQUIRHXLNFTGKDCMWB  J       K
//! V       VZBRGITYUPSDNHLXAWMJQOFECK  Z       A
//! VI      JPGVOUMFYQBENHZRDKASXLICTW  Z/M     A/N
//! VII     NZJHGRCXMYSWBOUFAIVLPEKQDT  Z/M     A/N
//! VIII    FKQHTLXOCBJSPDZRAMEWNIUYGV  Z/M     A/N
//!
//! Reflector   Wiring
//! A           EJMZALYXVBWFCRQUONTSPIKHGD
//! B           YRUHQSLDPXNGOKMIEBFZCWVJAT
//! C           FVPJIAOYEDRZXWGCTKUQSBNMHL
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RotorCryptError};
use crate::utils::alphabet::{
    const_letter_mask, const_table, invert, parse_letter_mask, parse_table, symbol_at, Table,
    ALPHABET_LEN,
};

/// Wiring and notch data of one kind of rotor.
///
/// Immutable and `Copy`: every [`Rotor`](crate::Rotor) holds its own copy,
/// so rotors of the same type share the data by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorType {
    forward: Table,
    backward: Table,
    /// Window positions that trigger the middle-rotor double step.
    notches: u32,
    /// Positions that arm a carry into the next-slower rotor when stepped onto.
    turnovers: u32,
}

impl RotorType {
    const fn from_static(wiring: &str, notches: &str, turnovers: &str) -> Self {
        let forward = const_table(wiring);
        RotorType {
            forward,
            backward: invert(&forward),
            notches: const_letter_mask(notches),
            turnovers: const_letter_mask(turnovers),
        }
    }

    /// Builds a rotor type from caller-supplied tables.
    ///
    /// # Parameters
    /// - `wiring`: 26 uppercase letters, `wiring[i]` is reached from contact `i`.
    /// - `notches`: 1 or 2 letters checked by the middle-rotor double step.
    /// - `turnovers`: 1 or 2 letters that arm a carry when stepped onto.
    ///
    /// # Errors
    /// [`RotorCryptError::InvalidWiring`] if `wiring` is not a bijection,
    /// [`RotorCryptError::InvalidNotch`] if a letter set is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::RotorType;
    ///
    /// let custom = RotorType::new("BCDEFGHIJKLMNOPQRSTUVWXYZA", "Y", "Z").unwrap();
    /// assert_eq!(custom.forward(0), 1);
    /// assert!(RotorType::new("AAAAAAAAAAAAAAAAAAAAAAAAAA", "A", "B").is_err());
    /// ```
    pub fn new(wiring: &str, notches: &str, turnovers: &str) -> Result<Self> {
        let forward = parse_table(wiring)?;
        Ok(RotorType {
            forward,
            backward: invert(&forward),
            notches: parse_letter_mask(notches)?,
            turnovers: parse_letter_mask(turnovers)?,
        })
    }

    /// Contact `index` to the alphabet index of its wired output.
    #[inline]
    pub fn forward(&self, index: u8) -> u8 {
        self.forward[index as usize]
    }

    /// Inverse of [`forward`](Self::forward).
    #[inline]
    pub fn backward(&self, index: u8) -> u8 {
        self.backward[index as usize]
    }

    /// True if `position` is one of the double-step notch positions.
    #[inline]
    pub fn is_notch(&self, position: u8) -> bool {
        self.notches & (1 << position) != 0
    }

    /// True if stepping onto `position` arms a carry.
    #[inline]
    pub fn is_turnover(&self, position: u8) -> bool {
        self.turnovers & (1 << position) != 0
    }

    /// Notch positions as letters, in alphabet order.
    pub fn notch_letters(&self) -> String {
        mask_letters(self.notches)
    }

    /// Turnover positions as letters, in alphabet order.
    pub fn turnover_letters(&self) -> String {
        mask_letters(self.turnovers)
    }

    /// Wiring as a 26-letter string.
    pub fn wiring(&self) -> String {
        self.forward.iter().map(|&i| symbol_at(i)).collect()
    }
}

fn mask_letters(mask: u32) -> String {
    (0..ALPHABET_LEN)
        .filter(|&i| mask & (1 << i) != 0)
        .map(symbol_at)
        .collect()
}

/// A reflector wiring: an involution with no fixed point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorType {
    table: Table,
}

impl ReflectorType {
    const fn from_static(wiring: &str) -> Self {
        let table = const_table(wiring);
        let mut i = 0;
        while i < ALPHABET_LEN as usize {
            assert!(table[i] as usize != i, "reflector has a fixed point");
            assert!(
                table[table[i] as usize] as usize == i,
                "reflector is not an involution"
            );
            i += 1;
        }
        ReflectorType { table }
    }

    /// Builds a reflector from a caller-supplied table.
    ///
    /// # Errors
    /// [`RotorCryptError::InvalidReflector`] unless `wiring` is a bijection
    /// that pairs every letter with a different letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::ReflectorType;
    ///
    /// assert!(ReflectorType::new("BADCFEHGJILKNMPORQTSVUXWZY").is_ok());
    /// assert!(ReflectorType::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    /// ```
    pub fn new(wiring: &str) -> Result<Self> {
        let table = parse_table(wiring).map_err(|e| match e {
            RotorCryptError::InvalidWiring { reason } => {
                RotorCryptError::InvalidReflector { reason }
            }
            other => other,
        })?;
        for (i, &j) in table.iter().enumerate() {
            if j as usize == i {
                return Err(RotorCryptError::InvalidReflector {
                    reason: format!("{} maps to itself", symbol_at(j)),
                });
            }
            if table[j as usize] as usize != i {
                return Err(RotorCryptError::InvalidReflector {
                    reason: format!(
                        "{} maps to {} but {} does not map back",
                        symbol_at(i as u8),
                        symbol_at(j),
                        symbol_at(j)
                    ),
                });
            }
        }
        Ok(ReflectorType { table })
    }

    /// Reflects alphabet index `index`.
    #[inline]
    pub fn reflect(&self, index: u8) -> u8 {
        self.table[index as usize]
    }

    /// Wiring as a 26-letter string.
    pub fn wiring(&self) -> String {
        self.table.iter().map(|&i| symbol_at(i)).collect()
    }
}

static ROTOR_TYPES: [RotorType; 8] = [
    RotorType::from_static("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q", "R"),
    RotorType::from_static("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E", "F"),
    RotorType::from_static("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V", "W"),
    RotorType::from_static("ESOVPZJAYQUIRHXLNFTGKDCMWB", "J", "K"),
    RotorType::from_static("VZBRGITYUPSDNHLXAWMJQOFECK", "Z", "A"),
    RotorType::from_static("JPGVOUMFYQBENHZRDKASXLICTW", "ZM", "AN"),
    RotorType::from_static("NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM", "AN"),
    RotorType::from_static("FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM", "AN"),
];

static REFLECTOR_TYPES: [ReflectorType; 3] = [
    ReflectorType::from_static("EJMZALYXVBWFCRQUONTSPIKHGD"),
    ReflectorType::from_static("YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ReflectorType::from_static("FVPJIAOYEDRZXWGCTKUQSBNMHL"),
];

/// Identifier of a catalog rotor, I through VIII.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorId {
    #[serde(rename = "I", alias = "1")]
    I,
    #[serde(rename = "II", alias = "2")]
    II,
    #[serde(rename = "III", alias = "3")]
    III,
    #[serde(rename = "IV", alias = "4")]
    IV,
    #[serde(rename = "V", alias = "5")]
    V,
    #[serde(rename = "VI", alias = "6")]
    VI,
    #[serde(rename = "VII", alias = "7")]
    VII,
    #[serde(rename = "VIII", alias = "8")]
    VIII,
}

impl RotorId {
    /// All catalog rotors in numeric order.
    pub const ALL: [RotorId; 8] = [
        RotorId::I,
        RotorId::II,
        RotorId::III,
        RotorId::IV,
        RotorId::V,
        RotorId::VI,
        RotorId::VII,
        RotorId::VIII,
    ];

    /// Looks up a rotor by its number, 1 through 8.
    ///
    /// # Errors
    /// [`RotorCryptError::UnknownRotor`] outside 1..=8.
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1..=8 => Ok(Self::ALL[number as usize - 1]),
            _ => Err(RotorCryptError::UnknownRotor(number.to_string())),
        }
    }

    /// Rotor number, 1 through 8.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// The wiring and notch data of this rotor.
    pub fn rotor_type(self) -> &'static RotorType {
        &ROTOR_TYPES[self as usize]
    }

    fn roman(self) -> &'static str {
        match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::IV => "IV",
            RotorId::V => "V",
            RotorId::VI => "VI",
            RotorId::VII => "VII",
            RotorId::VIII => "VIII",
        }
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.roman())
    }
}

impl FromStr for RotorId {
    type Err = RotorCryptError;

    /// Accepts `1`..`8` or `I`..`VIII`, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u8>() {
            return Self::from_number(number);
        }
        Self::ALL
            .into_iter()
            .find(|id| id.roman().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| RotorCryptError::UnknownRotor(s.to_string()))
    }
}

/// Identifier of a catalog reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectorId {
    A,
    B,
    C,
}

impl ReflectorId {
    /// All catalog reflectors.
    pub const ALL: [ReflectorId; 3] = [ReflectorId::A, ReflectorId::B, ReflectorId::C];

    /// The wiring of this reflector.
    pub fn reflector_type(self) -> &'static ReflectorType {
        &REFLECTOR_TYPES[self as usize]
    }

    /// Looks up a reflector by its letter, either case.
    ///
    /// # Errors
    /// [`RotorCryptError::UnknownReflector`] for anything but A, B or C.
    pub fn from_letter(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Ok(ReflectorId::A),
            'B' => Ok(ReflectorId::B),
            'C' => Ok(ReflectorId::C),
            _ => Err(RotorCryptError::UnknownReflector(letter.to_string())),
        }
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            ReflectorId::A => "A",
            ReflectorId::B => "B",
            ReflectorId::C => "C",
        };
        f.write_str(letter)
    }
}

impl FromStr for ReflectorId {
    type Err = RotorCryptError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => Err(RotorCryptError::UnknownReflector(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_round_trips_wiring_strings() {
        assert_eq!(RotorId::I.rotor_type().wiring(), "EKMFLGDQVZNTOWYHXUSPAIBRCJ");
        assert_eq!(
            RotorId::VIII.rotor_type().wiring(),
            "FKQHTLXOCBJSPDZRAMEWNIUYGV"
        );
        assert_eq!(
            ReflectorId::B.reflector_type().wiring(),
            "YRUHQSLDPXNGOKMIEBFZCWVJAT"
        );
    }

    #[test]
    fn test_forward_backward_are_inverse() {
        for id in RotorId::ALL {
            let t = id.rotor_type();
            for i in 0..ALPHABET_LEN {
                assert_eq!(t.backward(t.forward(i)), i, "rotor {}", id);
                assert_eq!(t.forward(t.backward(i)), i, "rotor {}", id);
            }
        }
    }

    #[test]
    fn test_reflectors_are_fixed_point_free_involutions() {
        for id in ReflectorId::ALL {
            let r = id.reflector_type();
            for i in 0..ALPHABET_LEN {
                assert_ne!(r.reflect(i), i, "reflector {}", id);
                assert_eq!(r.reflect(r.reflect(i)), i, "reflector {}", id);
            }
        }
    }

    #[test]
    fn test_notch_and_turnover_letters() {
        assert_eq!(RotorId::I.rotor_type().notch_letters(), "Q");
        assert_eq!(RotorId::I.rotor_type().turnover_letters(), "R");
        assert_eq!(RotorId::II.rotor_type().notch_letters(), "E");
        assert_eq!(RotorId::III.rotor_type().turnover_letters(), "W");
        assert_eq!(RotorId::V.rotor_type().turnover_letters(), "A");
        assert_eq!(RotorId::VI.rotor_type().notch_letters(), "MZ");
        assert_eq!(RotorId::VII.rotor_type().turnover_letters(), "AN");
    }

    #[test]
    fn test_is_notch_positions() {
        let ii = RotorId::II.rotor_type();
        assert!(ii.is_notch(4));
        assert!(!ii.is_notch(5));
        assert!(ii.is_turnover(5));
        let viii = RotorId::VIII.rotor_type();
        assert!(viii.is_turnover(0));
        assert!(viii.is_turnover(13));
        assert!(!viii.is_turnover(1));
    }

    #[test]
    fn test_rotor_id_parsing() {
        assert_eq!("1".parse::<RotorId>().unwrap(), RotorId::I);
        assert_eq!("iii".parse::<RotorId>().unwrap(), RotorId::III);
        assert_eq!("VIII".parse::<RotorId>().unwrap(), RotorId::VIII);
        assert_eq!(" 4 ".parse::<RotorId>().unwrap(), RotorId::IV);
        assert_eq!(
            "IX".parse::<RotorId>().unwrap_err(),
            RotorCryptError::UnknownRotor("IX".into())
        );
        assert!("0".parse::<RotorId>().is_err());
        assert!("9".parse::<RotorId>().is_err());
        assert!("".parse::<RotorId>().is_err());
    }

    #[test]
    fn test_rotor_id_numbers() {
        for (i, id) in RotorId::ALL.into_iter().enumerate() {
            assert_eq!(id.number() as usize, i + 1);
            assert_eq!(RotorId::from_number(id.number()).unwrap(), id);
            assert_eq!(id.to_string().parse::<RotorId>().unwrap(), id);
        }
    }

    #[test]
    fn test_reflector_id_parsing() {
        assert_eq!("b".parse::<ReflectorId>().unwrap(), ReflectorId::B);
        assert_eq!("C".parse::<ReflectorId>().unwrap(), ReflectorId::C);
        assert_eq!(
            "D".parse::<ReflectorId>().unwrap_err(),
            RotorCryptError::UnknownReflector("D".into())
        );
        assert!("AB".parse::<ReflectorId>().is_err());
        assert!("".parse::<ReflectorId>().is_err());
    }

    #[test]
    fn test_custom_rotor_type_validation() {
        assert!(matches!(
            RotorType::new("ABC", "A", "B"),
            Err(RotorCryptError::InvalidWiring { .. })
        ));
        assert!(matches!(
            RotorType::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "", "R"),
            Err(RotorCryptError::InvalidNotch { .. })
        ));
        let custom = RotorType::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q", "R").unwrap();
        assert_eq!(&custom, RotorId::I.rotor_type());
    }

    #[test]
    fn test_custom_reflector_rejects_non_involution() {
        // Rotor I wiring is a bijection but not an involution.
        let err = ReflectorType::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap_err();
        assert!(matches!(err, RotorCryptError::InvalidReflector { .. }));
    }

    #[test]
    fn test_custom_reflector_rejects_fixed_point() {
        // A<->A, rest paired.
        let err = ReflectorType::new("ACBEDGFIHKJMLONQPSRUTWVYXZ").unwrap_err();
        assert_eq!(
            err,
            RotorCryptError::InvalidReflector {
                reason: "A maps to itself".into()
            }
        );
    }

    #[test]
    fn test_custom_reflector_short_table_reason() {
        let err = ReflectorType::new("YRU").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid reflector wiring: expected 26 letters, found 3"
        );
    }

    #[test]
    fn test_custom_reflector_matches_catalog() {
        let r = ReflectorType::new("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
        assert_eq!(&r, ReflectorId::B.reflector_type());
    }
}
