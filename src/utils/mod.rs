//! Shared helpers.

pub mod alphabet;
