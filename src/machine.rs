//! Machine: the rotor stack, stepping mechanism and signal path.
//!
//! ```text
//! key ─► plugboard ─► rotor[0] ─► rotor[1] ─► … ─► rotor[N-1] ─┐
//!                                                              reflector
//! lamp ◄─ plugboard ◄─ rotor[0] ◄─ rotor[1] ◄─ … ◄─ rotor[N-1] ◄┘
//! ```
//!
//! Every letter first steps the machine, then passes through the signal
//! path at the new positions. Non-letters neither step nor change.

use tracing::{debug, trace};

use crate::catalog::{ReflectorType, RotorType};
use crate::config::MachineConfig;
use crate::error::{Result, RotorCryptError};
use crate::rotor::Rotor;
use crate::utils::alphabet::{index_of, symbol_at, ALPHABET_LEN};

/// Entry/exit letter-swap stage. No swaps are ever configured, so it maps
/// every index to itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Plugboard;

impl Plugboard {
    #[inline]
    fn map(&self, index: u8) -> u8 {
        index
    }
}

/// A configured rotor cipher machine.
///
/// `Machine` is plain data and `Clone`: cloning captures the complete
/// stepping state, so a clone taken before a keypress can replay it.
/// A single instance must see one character stream in order; share it
/// across callers only through [`SharedMachine`](crate::SharedMachine).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    rotors: Vec<Rotor>,
    reflector: ReflectorType,
    plugboard: Plugboard,
}

impl Default for Machine {
    /// Rotors III, II, I at offset 0 with reflector B.
    fn default() -> Self {
        Self::build(&MachineConfig::default())
    }
}

impl Machine {
    /// Builds a machine from catalog identifiers.
    ///
    /// # Errors
    /// Returns the error from [`MachineConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::{Machine, MachineConfig};
    ///
    /// let mut machine = Machine::new(&MachineConfig::default()).unwrap();
    /// assert_eq!(machine.encrypt_str("AAAAA"), "BDZGO");
    /// ```
    pub fn new(config: &MachineConfig) -> Result<Self> {
        config.validate()?;
        debug!(?config, "machine configured");
        Ok(Self::build(config))
    }

    /// Shared constructor for `new()` and `default()`; `config` is already valid.
    fn build(config: &MachineConfig) -> Self {
        let rotors = config
            .rotors
            .iter()
            .map(|s| Rotor::new(*s.rotor.rotor_type(), s.offset))
            .collect();
        Machine {
            rotors,
            reflector: *config.reflector.reflector_type(),
            plugboard: Plugboard,
        }
    }

    /// Builds a machine from textual identifiers.
    ///
    /// # Parameters
    /// - `rotors`: `(identifier, offset)` pairs fast to slow; identifiers
    ///   are `1`..`8` or `I`..`VIII`.
    /// - `reflector`: `A`, `B` or `C`.
    ///
    /// # Errors
    /// [`RotorCryptError::UnknownRotor`] or [`RotorCryptError::UnknownReflector`]
    /// for an identifier not in the catalog, plus the errors of [`Machine::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Machine;
    ///
    /// let machine = Machine::from_identifiers(&[("III", 0), ("II", 0), ("I", 0)], "B").unwrap();
    /// assert_eq!(machine.window(), "AAA");
    /// assert!(Machine::from_identifiers(&[("IX", 0)], "B").is_err());
    /// ```
    pub fn from_identifiers(rotors: &[(&str, u8)], reflector: &str) -> Result<Self> {
        let rotors = rotors
            .iter()
            .map(|&(id, offset)| Ok((id.parse()?, offset)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(&MachineConfig::new(rotors, reflector.parse()?))
    }

    /// Builds a machine from custom wirings.
    ///
    /// # Errors
    /// [`RotorCryptError::NoRotors`] or [`RotorCryptError::OffsetOutOfRange`].
    pub fn from_parts(rotors: Vec<(RotorType, u8)>, reflector: ReflectorType) -> Result<Self> {
        if rotors.is_empty() {
            return Err(RotorCryptError::NoRotors);
        }
        let rotors = rotors
            .into_iter()
            .enumerate()
            .map(|(slot, (kind, offset))| {
                if offset >= ALPHABET_LEN {
                    return Err(RotorCryptError::OffsetOutOfRange { rotor: slot, offset });
                }
                Ok(Rotor::new(kind, offset))
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(num_rotors = rotors.len(), "machine configured from custom wiring");
        Ok(Machine {
            rotors,
            reflector,
            plugboard: Plugboard,
        })
    }

    /// Advances the rotor stack by one keypress.
    ///
    /// Order matters for the double-step anomaly:
    /// 1. the fast rotor always cycles;
    /// 2. the middle rotor cycles if it currently sits on its own notch;
    /// 3. every armed carry, in fast-to-slow order, is cleared and cycles
    ///    the next rotor.
    pub fn step(&mut self) {
        self.rotors[0].cycle();

        if let Some(middle) = self.rotors.get_mut(1) {
            if middle.at_notch() {
                trace!(window = %middle.window(), "middle rotor double step");
                middle.cycle();
            }
        }

        for i in 0..self.rotors.len() - 1 {
            if self.rotors[i].take_turnover() {
                trace!(turnover = i, cycling = i + 1, "carry");
                self.rotors[i + 1].cycle();
            }
        }
    }

    /// Passes alphabet index `index` forward through the rotors, off the
    /// reflector and back, at the current positions. Does not step.
    ///
    /// # Panics
    /// Panics if `index >= 26`.
    pub fn signal_path(&self, index: u8) -> u8 {
        let mut index = self.plugboard.map(index);
        for rotor in &self.rotors {
            index = rotor.forward(index);
        }
        let reflected = self.reflector.reflect(index);
        trace!(into = %symbol_at(index), out = %symbol_at(reflected), "reflector");
        index = reflected;
        for rotor in self.rotors.iter().rev() {
            index = rotor.backward(index);
        }
        self.plugboard.map(index)
    }

    /// Encrypts (or decrypts) one character.
    ///
    /// ASCII letters step the machine once and come back as an uppercase
    /// letter that is never the input letter. Anything else is returned
    /// unchanged and leaves the machine untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::Machine;
    ///
    /// let mut machine = Machine::default();
    /// assert_eq!(machine.encrypt_char(' '), ' ');
    /// assert_eq!(machine.offsets(), vec![0, 0, 0]);
    /// assert_eq!(machine.encrypt_char('a'), 'B');
    /// assert_eq!(machine.offsets(), vec![1, 0, 0]);
    /// ```
    pub fn encrypt_char(&mut self, c: char) -> char {
        match index_of(c) {
            Some(index) => {
                self.step();
                symbol_at(self.signal_path(index))
            }
            None => c,
        }
    }

    /// Encrypts every character of `text` in order.
    pub fn encrypt_str(&mut self, text: &str) -> String {
        text.chars().map(|c| self.encrypt_char(c)).collect()
    }

    /// Encrypts an ASCII byte buffer in place; non-letter bytes are kept.
    pub fn encrypt_bytes(&mut self, buf: &mut [u8]) {
        for byte in buf.iter_mut().filter(|b| b.is_ascii_alphabetic()) {
            *byte = self.encrypt_char(*byte as char) as u8;
        }
    }

    /// Returns every rotor to its starting offset and clears armed carries.
    pub fn reset(&mut self) {
        for rotor in &mut self.rotors {
            rotor.reset();
        }
        debug!(offsets = ?self.offsets(), "machine reset");
    }

    /// Moves the rotors to explicit offsets, fast to slow, and clears armed
    /// carries. [`reset`](Self::reset) still returns to the original offsets.
    ///
    /// # Errors
    /// [`RotorCryptError::OffsetCountMismatch`] or
    /// [`RotorCryptError::OffsetOutOfRange`]; the machine is unchanged on error.
    pub fn set_offsets(&mut self, offsets: &[u8]) -> Result<()> {
        if offsets.len() != self.rotors.len() {
            return Err(RotorCryptError::OffsetCountMismatch {
                expected: self.rotors.len(),
                got: offsets.len(),
            });
        }
        if let Some((slot, &offset)) = offsets
            .iter()
            .enumerate()
            .find(|(_, &o)| o >= ALPHABET_LEN)
        {
            return Err(RotorCryptError::OffsetOutOfRange { rotor: slot, offset });
        }
        for (rotor, &offset) in self.rotors.iter_mut().zip(offsets) {
            rotor.set_offset(offset);
        }
        Ok(())
    }

    /// Current offsets, fast to slow.
    pub fn offsets(&self) -> Vec<u8> {
        self.rotors.iter().map(Rotor::offset).collect()
    }

    /// Window letters as an operator reads them: slowest rotor first.
    pub fn window(&self) -> String {
        self.rotors.iter().rev().map(Rotor::window).collect()
    }

    /// Rotors, fast to slow.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Number of rotor slots.
    pub fn num_rotors(&self) -> usize {
        self.rotors.len()
    }

    /// The reflector wiring in use.
    pub fn reflector(&self) -> &ReflectorType {
        &self.reflector
    }
}

/// Encrypts one character on `machine`. See [`Machine::encrypt_char`].
pub fn encrypt_char(c: char, machine: &mut Machine) -> char {
    machine.encrypt_char(c)
}
