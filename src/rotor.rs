//! Rotor: one wired wheel mounted in a machine slot.
//!
//! A rotor pairs an immutable [`RotorType`] with mutable stepping state:
//! the current offset and a pending-turnover flag that carries into the
//! next-slower rotor.

use crate::catalog::RotorType;
use crate::utils::alphabet::{shift_down, shift_up, symbol_at, ALPHABET_LEN};

/// A mounted rotor with its stepping state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    kind: RotorType,
    offset: u8,
    start_offset: u8,
    pending_turnover: bool,
}

impl Rotor {
    /// Mounts a rotor at `offset`.
    ///
    /// The caller guarantees `offset < 26`.
    pub(crate) fn new(kind: RotorType, offset: u8) -> Self {
        debug_assert!(offset < ALPHABET_LEN);
        Rotor {
            kind,
            offset,
            start_offset: offset,
            pending_turnover: false,
        }
    }

    /// Advances the rotor one position.
    ///
    /// Landing on a turnover position arms `pending_turnover`; the flag is
    /// consumed by the machine's carry pass, never cleared here.
    pub(crate) fn cycle(&mut self) {
        self.offset = (self.offset + 1) % ALPHABET_LEN;
        if self.kind.is_turnover(self.offset) {
            self.pending_turnover = true;
        }
    }

    /// Clears the pending-turnover flag, returning its previous value.
    pub(crate) fn take_turnover(&mut self) -> bool {
        std::mem::take(&mut self.pending_turnover)
    }

    /// Right-to-left pass: contact side in, alphabet side out.
    #[inline]
    pub(crate) fn forward(&self, index: u8) -> u8 {
        let contact = shift_up(index, self.offset);
        shift_down(self.kind.forward(contact), self.offset)
    }

    /// Left-to-right pass, the exact inverse of [`forward`](Self::forward).
    #[inline]
    pub(crate) fn backward(&self, index: u8) -> u8 {
        let contact = shift_up(index, self.offset);
        shift_down(self.kind.backward(contact), self.offset)
    }

    /// Returns to the mounting offset and drops any armed carry.
    pub(crate) fn reset(&mut self) {
        self.set_offset(self.start_offset);
    }

    pub(crate) fn set_offset(&mut self, offset: u8) {
        debug_assert!(offset < ALPHABET_LEN);
        self.offset = offset;
        self.pending_turnover = false;
    }

    /// True if the current offset sits on one of the notch positions.
    pub fn at_notch(&self) -> bool {
        self.kind.is_notch(self.offset)
    }

    /// Current rotational position, 0..26.
    pub fn offset(&self) -> u8 {
        self.offset
    }

    /// Letter showing in the window.
    pub fn window(&self) -> char {
        symbol_at(self.offset)
    }

    /// Whether a carry into the next-slower rotor is armed.
    pub fn pending_turnover(&self) -> bool {
        self.pending_turnover
    }

    /// The wiring this rotor was built from.
    pub fn rotor_type(&self) -> &RotorType {
        &self.kind
    }
}
