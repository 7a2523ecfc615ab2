//! Fuzz target for Kyber768 roundtrip (keygen -> encaps -> decaps).
//!
//! Tests the complete flow:
//! 1. KeyGen produces valid keys
//! 2. Encaps with those keys produces a valid ciphertext
//! 3. Decaps recovers the same shared key
//! 4. The entire flow is deterministic

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use kyber768::kem::{decapsulate, encapsulate_derand, keypair_derand};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    d: [u8; 32],
    z: [u8; 32],
    m: [u8; 32],
}

fuzz_target!(|input: RoundtripInput| {
    let (pk, sk) = keypair_derand(&input.d, &input.z);
    let (ct, ss_sender) = encapsulate_derand(&pk, &input.m).unwrap();
    let ss_receiver = decapsulate(&sk, &ct).unwrap();

    assert_eq!(
        ss_sender, ss_receiver,
        "Roundtrip failed: shared keys don't match"
    );

    let (pk2, sk2) = keypair_derand(&input.d, &input.z);
    let (ct2, ss_sender2) = encapsulate_derand(&pk2, &input.m).unwrap();
    let ss_receiver2 = decapsulate(&sk2, &ct2).unwrap();

    assert_eq!(pk, pk2, "KeyGen should be deterministic");
    assert_eq!(sk, sk2, "KeyGen should be deterministic");
    assert_eq!(ct, ct2, "Encaps should be deterministic");
    assert_eq!(ss_sender, ss_sender2, "Encaps should be deterministic");
    assert_eq!(ss_receiver, ss_receiver2, "Decaps should be deterministic");
});
