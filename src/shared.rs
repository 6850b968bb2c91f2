//! A machine shared between callers behind one lock.
//!
//! Each call holds the lock across the whole step and signal path, so two
//! callers can never interleave inside a keypress. A message passed to
//! [`SharedMachine::encrypt_str`] is encrypted under a single lock hold.
//!
//! Independent sessions should not share rotor state at all; use
//! [`SharedMachine::session`] to hand each one its own [`Machine`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::machine::Machine;

/// Cloneable handle to a single [`Machine`] guarded by a mutex.
#[derive(Debug, Clone, Default)]
pub struct SharedMachine {
    inner: Arc<Mutex<Machine>>,
}

impl SharedMachine {
    /// Wraps `machine` for shared use.
    pub fn new(machine: Machine) -> Self {
        SharedMachine {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// Poisoning is ignored: every `Machine` method completes a keypress
    /// before returning, so a panic in caller code under the lock leaves the
    /// rotors at a keypress boundary.
    fn lock(&self) -> MutexGuard<'_, Machine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Encrypts one character under the lock.
    pub fn encrypt_char(&self, c: char) -> char {
        self.lock().encrypt_char(c)
    }

    /// Encrypts a whole message under one lock hold.
    pub fn encrypt_str(&self, text: &str) -> String {
        self.lock().encrypt_str(text)
    }

    /// Encrypts an ASCII buffer in place under one lock hold.
    pub fn encrypt_bytes(&self, buf: &mut [u8]) {
        self.lock().encrypt_bytes(buf)
    }

    /// Runs `f` with exclusive access to the machine.
    pub fn with_machine<R>(&self, f: impl FnOnce(&mut Machine) -> R) -> R {
        f(&mut self.lock())
    }

    /// A fresh, independent machine with the same configuration, at its
    /// starting offsets.
    pub fn session(&self) -> Machine {
        let mut machine = self.lock().clone();
        machine.reset();
        debug!(window = %machine.window(), "session machine created");
        machine
    }

    /// Current offsets, fast to slow.
    pub fn offsets(&self) -> Vec<u8> {
        self.lock().offsets()
    }
}

impl From<Machine> for SharedMachine {
    fn from(machine: Machine) -> Self {
        SharedMachine::new(machine)
    }
}
