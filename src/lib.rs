//! Electromechanical rotor cipher engine.
//!
//! Simulates a rotor machine: a stack of rotating substitution rotors
//! terminated by a fixed reflector. Every letter steps the rotors, then
//! travels through them, off the reflector, and back. The stepping
//! reproduces the historical middle-rotor double step, so output matches
//! reference ciphertext for the catalog rotors I–VIII and reflectors A–C.
//!
//! # Architecture
//!
//! ```text
//! RotorType / ReflectorType  (static wirings, validated at compile time)
//!     │ mounted with an offset
//! Rotor                      (offset + pending turnover)
//!     │ N rotors, fast to slow, plus a reflector
//! Machine                    (stepping + signal path)
//!     │ optional
//! SharedMachine              (one lock held per keypress or message)
//! ```
//!
//! # Examples
//!
//! Encrypt, then decrypt with a machine in the same starting state:
//!
//! ```
//! use rotorcrypt::{Machine, MachineConfig};
//!
//! let config = MachineConfig::default();
//! let mut encoder = Machine::new(&config).unwrap();
//! let mut decoder = Machine::new(&config).unwrap();
//!
//! let ciphertext = encoder.encrypt_str("Attack at dawn");
//! assert_eq!(decoder.encrypt_str(&ciphertext), "ATTACK AT DAWN");
//! ```
//!
//! Pick rotors and starting positions:
//!
//! ```
//! use rotorcrypt::{Machine, MachineConfig, ReflectorId, RotorId};
//!
//! let config = MachineConfig::new(
//!     [(RotorId::VIII, 0), (RotorId::VII, 0), (RotorId::VI, 0)],
//!     ReflectorId::C,
//! );
//! let mut machine = Machine::new(&config).unwrap();
//! assert_eq!(machine.encrypt_str("ATTACKATDAWN"), "MEKJYZXHJEOV");
//! ```

#![deny(clippy::all)]

pub mod error;

mod catalog;
mod config;
mod machine;
mod rotor;
mod shared;
pub mod utils;

pub use catalog::{ReflectorId, ReflectorType, RotorId, RotorType};
pub use config::{MachineConfig, RotorSetting};
pub use error::{Result, RotorCryptError};
pub use machine::{encrypt_char, Machine};
pub use rotor::Rotor;
pub use shared::SharedMachine;
