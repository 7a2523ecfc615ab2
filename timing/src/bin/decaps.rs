//! Constant-time verification for Kyber768 decapsulation.
//!
//! Decapsulation must take the same time whether the re-encryption check
//! accepts or triggers implicit rejection.
//!
//! Run with: `cargo run --release -p kyber-timing --bin decaps`

use dudect_bencher::rand::Rng;
use dudect_bencher::{ctbench_main, BenchRng, Class, CtRunner};
use kyber768::kem::{decapsulate, encapsulate_derand, keypair_derand};
use kyber768::params::{CIPHERTEXT_SIZE, SECRET_KEY_SIZE};
use kyber768::{Ciphertext, Kyber768, SecretKey};
use kyber_core::Kem;
use once_cell::sync::Lazy;
use rand::Rng as _;

/// Pre-generated key pair and ciphertexts for testing.
struct TestData {
    sk: SecretKey,
    ct_valid: Ciphertext,
    ct_invalid: Ciphertext,
}

static TEST_DATA: Lazy<TestData> = Lazy::new(|| {
    let (pk, sk) = Kyber768::keygen(&mut rand::rng()).expect("keygen failed");
    let (ct_valid, _ss) = Kyber768::encaps(&pk, &mut rand::rng()).expect("encaps failed");

    let mut ct_invalid_bytes = [0u8; CIPHERTEXT_SIZE];
    ct_invalid_bytes.copy_from_slice(ct_valid.as_bytes());
    ct_invalid_bytes[0] ^= 0xff;
    ct_invalid_bytes[100] ^= 0xaa;
    let ct_invalid = Ciphertext::from_bytes(&ct_invalid_bytes).expect("invalid ct construction");

    TestData {
        sk,
        ct_valid,
        ct_invalid,
    }
});

/// Key material for the byte-level entry point, drawn once per run.
struct RawData {
    sk: [u8; SECRET_KEY_SIZE],
    ct_valid: [u8; CIPHERTEXT_SIZE],
    ct_random: [u8; CIPHERTEXT_SIZE],
}

static RAW_DATA: Lazy<RawData> = Lazy::new(|| {
    let mut rng = rand::rng();
    let d: [u8; 32] = rng.random();
    let z: [u8; 32] = rng.random();
    let m: [u8; 32] = rng.random();
    let (pk, sk) = keypair_derand(&d, &z);
    let (ct_valid, _ss) = encapsulate_derand(&pk, &m).expect("encaps failed");

    let mut ct_random = [0u8; CIPHERTEXT_SIZE];
    rng.fill(&mut ct_random[..]);

    RawData {
        sk,
        ct_valid,
        ct_random,
    }
});

/// Number of iterations per batch.
const ITERATIONS: usize = 10_000;

fn random_classes(rng: &mut BenchRng) -> Vec<Class> {
    (0..ITERATIONS)
        .map(|_| {
            if rng.gen::<bool>() {
                Class::Left
            } else {
                Class::Right
            }
        })
        .collect()
}

/// Left: valid ciphertext. Right: one with flipped bits (implicit rejection).
fn bench_decaps_tampered(runner: &mut CtRunner, rng: &mut BenchRng) {
    let data = &*TEST_DATA;

    for class in random_classes(rng) {
        let ct = match class {
            Class::Left => &data.ct_valid,
            Class::Right => &data.ct_invalid,
        };

        runner.run_one(class, || {
            let _ = Kyber768::decaps(&data.sk, ct);
        });
    }
}

/// Left: valid ciphertext. Right: uniformly random bytes.
fn bench_decaps_random(runner: &mut CtRunner, rng: &mut BenchRng) {
    let data = &*RAW_DATA;

    for class in random_classes(rng) {
        let ct = match class {
            Class::Left => &data.ct_valid,
            Class::Right => &data.ct_random,
        };

        runner.run_one(class, || {
            let _ = decapsulate(&data.sk, ct);
        });
    }
}

ctbench_main!(bench_decaps_tampered, bench_decaps_random);
