//! Machine configuration: rotor selection, starting offsets and reflector.
//!
//! Serializable so a transport can load it from JSON or TOML:
//!
//! ```json
//! { "rotors": [ { "rotor": "III", "offset": 0 },
//!               { "rotor": "II",  "offset": 0 },
//!               { "rotor": "I",   "offset": 0 } ],
//!   "reflector": "B" }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{ReflectorId, RotorId};
use crate::error::{Result, RotorCryptError};
use crate::utils::alphabet::{index_of, ALPHABET_LEN};

/// One rotor slot: which rotor and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSetting {
    pub rotor: RotorId,
    #[serde(default)]
    pub offset: u8,
}

/// Rotors listed fast to slow (index 0 steps on every letter) plus the reflector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    pub rotors: Vec<RotorSetting>,
    pub reflector: ReflectorId,
}

impl Default for MachineConfig {
    /// Rotors III, II, I (fast to slow) at offset 0 with reflector B.
    fn default() -> Self {
        MachineConfig::new(
            [(RotorId::III, 0), (RotorId::II, 0), (RotorId::I, 0)],
            ReflectorId::B,
        )
    }
}

impl MachineConfig {
    /// Builds a configuration from `(rotor, offset)` pairs, fast to slow.
    ///
    /// Nothing is validated until [`validate`](Self::validate) or machine
    /// construction.
    pub fn new(rotors: impl IntoIterator<Item = (RotorId, u8)>, reflector: ReflectorId) -> Self {
        MachineConfig {
            rotors: rotors
                .into_iter()
                .map(|(rotor, offset)| RotorSetting { rotor, offset })
                .collect(),
            reflector,
        }
    }

    /// Parses the compact operator form: one rotor digit and one window
    /// letter per slot, fast to slow.
    ///
    /// # Parameters
    /// - `rotors`: digits `1`..`8`, e.g. `"321"`.
    /// - `windows`: starting letters, e.g. `"AAA"`.
    /// - `reflector`: `A`, `B` or `C`.
    ///
    /// # Errors
    /// [`RotorCryptError::UnknownRotor`] / [`RotorCryptError::UnknownReflector`]
    /// for bad identifiers, [`RotorCryptError::InvalidWindow`] for a
    /// window character that is not a letter,
    /// [`RotorCryptError::OffsetCountMismatch`] when the
    /// two strings differ in length, [`RotorCryptError::NoRotors`] when empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{MachineConfig, RotorId};
    ///
    /// let config = MachineConfig::from_compact("321", "AAA", 'B').unwrap();
    /// assert_eq!(config, MachineConfig::default());
    /// assert_eq!(config.rotors[0].rotor, RotorId::III);
    /// ```
    pub fn from_compact(rotors: &str, windows: &str, reflector: char) -> Result<Self> {
        let ids = rotors
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(number @ 1..=8) => RotorId::from_number(number as u8),
                _ => Err(RotorCryptError::UnknownRotor(c.to_string())),
            })
            .collect::<Result<Vec<_>>>()?;
        let offsets = windows
            .chars()
            .enumerate()
            .map(|(slot, c)| {
                index_of(c).ok_or(RotorCryptError::InvalidWindow {
                    rotor: slot,
                    letter: c,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        if ids.len() != offsets.len() {
            return Err(RotorCryptError::OffsetCountMismatch {
                expected: ids.len(),
                got: offsets.len(),
            });
        }
        let config = MachineConfig::new(
            ids.into_iter().zip(offsets),
            ReflectorId::from_letter(reflector)?,
        );
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration without building a machine.
    ///
    /// # Errors
    /// [`RotorCryptError::NoRotors`] for an empty rotor list,
    /// [`RotorCryptError::OffsetOutOfRange`] for an offset >= 26.
    pub fn validate(&self) -> Result<()> {
        if self.rotors.is_empty() {
            return Err(RotorCryptError::NoRotors);
        }
        for (slot, setting) in self.rotors.iter().enumerate() {
            if setting.offset >= ALPHABET_LEN {
                return Err(RotorCryptError::OffsetOutOfRange {
                    rotor: slot,
                    offset: setting.offset,
                });
            }
        }
        Ok(())
    }
}
