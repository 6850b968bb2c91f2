//! Frozen ciphertext vectors.
//!
//! Every vector in `test_data/vectors.json` was produced by the reference
//! stepping and signal path; any change in output is a regression.

use std::path::Path;

use rotorcrypt::{Machine, MachineConfig, ReflectorId, RotorId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Vector {
    name: String,
    rotors: Vec<RotorId>,
    offsets: Vec<u8>,
    reflector: ReflectorId,
    plaintext: String,
    ciphertext: String,
    final_offsets: Vec<u8>,
}

impl Vector {
    fn machine(&self) -> Machine {
        let config = MachineConfig::new(
            self.rotors.iter().copied().zip(self.offsets.iter().copied()),
            self.reflector,
        );
        Machine::new(&config).unwrap_or_else(|e| panic!("vector {}: {e}", self.name))
    }
}

fn load_vectors() -> Vec<Vector> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_data")
        .join("vectors.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse vectors: {e}"))
}

#[test]
fn vectors_encrypt_to_frozen_ciphertext() {
    let vectors = load_vectors();
    assert!(!vectors.is_empty());
    for v in &vectors {
        let mut machine = v.machine();
        assert_eq!(
            machine.encrypt_str(&v.plaintext),
            v.ciphertext,
            "Ciphertext mismatch in vector {}",
            v.name
        );
        assert_eq!(
            machine.offsets(),
            v.final_offsets,
            "Final offsets mismatch in vector {}",
            v.name
        );
    }
}

#[test]
fn vectors_decrypt_with_fresh_machine() {
    for v in &load_vectors() {
        let mut machine = v.machine();
        assert_eq!(
            machine.encrypt_str(&v.ciphertext),
            v.plaintext.to_ascii_uppercase(),
            "Decrypt mismatch in vector {}",
            v.name
        );
    }
}

#[test]
fn vectors_are_replayable_after_reset() {
    for v in &load_vectors() {
        let mut machine = v.machine();
        machine.encrypt_str(&v.plaintext);
        machine.reset();
        assert_eq!(machine.offsets(), v.offsets, "vector {}", v.name);
        assert_eq!(
            machine.encrypt_str(&v.plaintext),
            v.ciphertext,
            "vector {}",
            v.name
        );
    }
}

/// The canonical regression vector: III, II, I at AAA with reflector B.
#[test]
fn canonical_aaaaa_is_bdzgo() {
    let config = MachineConfig::new(
        [(RotorId::III, 0), (RotorId::II, 0), (RotorId::I, 0)],
        ReflectorId::B,
    );
    let mut machine = Machine::new(&config).unwrap();
    assert_eq!(machine.encrypt_str("AAAAA"), "BDZGO");
    assert_eq!(machine.offsets(), vec![5, 0, 0]);
}

/// Middle rotor II steps twice in three keypresses.
///
/// Start: III at U (20, one before its notch V), II at D (3, one before
/// its notch E), I at A. Windows go ADU -> ADV -> AEW -> BFX.
#[test]
fn double_step_anomaly() {
    let config = MachineConfig::new(
        [(RotorId::III, 20), (RotorId::II, 3), (RotorId::I, 0)],
        ReflectorId::B,
    );
    let mut machine = Machine::new(&config).unwrap();
    let middle_before = machine.offsets()[1];

    assert_eq!(machine.encrypt_str("AAA"), "EQI");

    let after = machine.offsets();
    assert_eq!(after, vec![23, 5, 1]);
    assert_eq!(after[1] - middle_before, 2);
    assert_eq!(machine.window(), "BFX");
}

/// Starting with the middle rotor already on its notch, the very first
/// keypress steps it along with the slow rotor.
#[test]
fn double_step_from_notch_position() {
    let mut machine = Machine::from_identifiers(&[("III", 0), ("II", 4), ("I", 0)], "B").unwrap();
    assert_eq!(machine.window(), "AEA");
    machine.step();
    assert_eq!(machine.window(), "BFB");
    machine.step();
    assert_eq!(machine.window(), "BFC");
}

/// III one before its notch (U) with II already on its notch (E): II steps
/// on the first keypress, again when III carries, then stays.
#[test]
fn double_step_with_fast_rotor_before_notch_and_middle_on_notch() {
    let config = MachineConfig::new(
        [(RotorId::III, 20), (RotorId::II, 4), (RotorId::I, 0)],
        ReflectorId::B,
    );
    let mut machine = Machine::new(&config).unwrap();
    assert_eq!(machine.window(), "AEU");

    machine.step();
    assert_eq!(machine.offsets(), vec![21, 5, 1]);
    machine.step();
    assert_eq!(machine.offsets(), vec![22, 6, 1]);
    machine.step();
    assert_eq!(machine.offsets(), vec![23, 6, 1]);
    assert_eq!(machine.window(), "BGX");
}

#[test]
fn long_message_matches_default_machine_prefix() {
    let mut machine = Machine::default();
    let long = machine.encrypt_str(&"A".repeat(63));
    assert!(long.starts_with("BDZGO"));
    assert_eq!(machine.offsets(), vec![11, 2, 0]);
}
