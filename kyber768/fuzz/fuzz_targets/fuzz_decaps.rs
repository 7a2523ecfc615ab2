//! Fuzz target for Kyber768 decapsulation.
//!
//! Checks that decapsulation:
//! 1. Recovers the shared key for an honest ciphertext
//! 2. Answers every tampered ciphertext with implicit rejection, never an error
//! 3. Is deterministic
//! 4. Rejects wrongly sized inputs with an error instead of panicking

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use kyber768::kem::{decapsulate, encapsulate_derand, keypair_derand};

#[derive(Debug, Arbitrary)]
struct DecapsInput {
    d: [u8; 32],
    z: [u8; 32],
    m: [u8; 32],
    corrupt_byte: u8,
    corrupt_index: usize,
    raw_ct: Vec<u8>,
}

fuzz_target!(|input: DecapsInput| {
    let (pk, sk) = keypair_derand(&input.d, &input.z);
    let (mut ct, ss_sender) = encapsulate_derand(&pk, &input.m).unwrap();

    let ss_receiver = decapsulate(&sk, &ct).unwrap();
    assert_eq!(ss_sender, ss_receiver, "Valid decaps should recover shared key");

    let idx = input.corrupt_index % ct.len();
    ct[idx] ^= input.corrupt_byte.wrapping_add(1);
    let ss_bad = decapsulate(&sk, &ct).unwrap();
    let ss_bad2 = decapsulate(&sk, &ct).unwrap();
    assert_eq!(ss_bad, ss_bad2, "Implicit rejection should be deterministic");
    assert_ne!(ss_bad, ss_sender, "Tampered ciphertext should not decapsulate");

    // Arbitrary bytes: right size decapsulates, wrong size errors
    let result = decapsulate(&sk, &input.raw_ct);
    assert_eq!(result.is_ok(), input.raw_ct.len() == ct.len());
});
