//! Known-answer and end-to-end scenarios for the KEM.
//!
//! The fixed vectors use `d = 00..1f`, `z = 20..3f` and the encapsulation
//! seed `40..5f`; digests are SHA3-256 of the full encodings.

use crate::kem::{decapsulate, encapsulate_derand, keypair_derand};
use crate::params::{CIPHERTEXT_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE};
use crate::{Ciphertext, Error, Kem, Kyber768};
use core::fmt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_core::{TryCryptoRng, TryRngCore};
use sha3::{Digest, Sha3_256};

fn counting_seeds() -> ([u8; 32], [u8; 32], [u8; 32]) {
    (
        core::array::from_fn(|i| i as u8),
        core::array::from_fn(|i| 32 + i as u8),
        core::array::from_fn(|i| 64 + i as u8),
    )
}

fn sha3_hex(bytes: &[u8]) -> String {
    hex::encode(Sha3_256::digest(bytes))
}

#[test]
fn test_kat_counting_seeds() {
    let (d, z, m) = counting_seeds();
    let (pk, sk) = keypair_derand(&d, &z);

    assert_eq!(hex::encode(&pk[..8]), "ec58a3b8081161b9");
    assert_eq!(hex::encode(&pk[PUBLIC_KEY_SIZE - 4..]), "8b2d93fe");
    assert_eq!(
        sha3_hex(&pk),
        "0df97a95f3e9fcaa29e04ffc0b246f17b50a19e74c90f88dadc41837dddcb6d1"
    );
    assert_eq!(
        sha3_hex(&sk),
        "157699f1afdbe4acff52ab00e6ef075bb6c267280d4c1e24fd907b43c9bf0ce5"
    );

    let (ct, ss) = encapsulate_derand(&pk, &m).unwrap();
    assert_eq!(
        sha3_hex(&ct),
        "3950acf029976ea4c229215284b32b6f4c3d75faea76c53912ce38ef59569604"
    );
    assert_eq!(
        hex::encode(ss),
        "7973130dd759b854824a18a0e046afd26cdd02ec874734200bc98d387965de7c"
    );
    assert_eq!(decapsulate(&sk, &ct).unwrap(), ss);
}

#[test]
fn test_kat_counting_seeds_rejection() {
    let (d, z, m) = counting_seeds();
    let (pk, sk) = keypair_derand(&d, &z);
    let (mut ct, _) = encapsulate_derand(&pk, &m).unwrap();
    ct[0] ^= 1;

    assert_eq!(
        hex::encode(decapsulate(&sk, &ct).unwrap()),
        "1f6f5151d7478ec9fe1fec0145f8df5e084f0497d82ef45aed4c280449e51a44"
    );
}

#[test]
fn test_roundtrip_many_keys() {
    let mut rng = StdRng::seed_from_u64(0x6b79_6265_72);
    for _ in 0..16 {
        let (pk, sk) = Kyber768::keygen(&mut rng).unwrap();
        for _ in 0..4 {
            let (ct, ss) = Kyber768::encaps(&pk, &mut rng).unwrap();
            assert_eq!(Kyber768::decaps(&sk, &ct).unwrap(), ss);
        }
    }
}

#[test]
fn test_encapsulation_is_randomized() {
    let mut rng = StdRng::seed_from_u64(1);
    let (pk, _) = Kyber768::keygen(&mut rng).unwrap();
    let (ct1, ss1) = Kyber768::encaps(&pk, &mut rng).unwrap();
    let (ct2, ss2) = Kyber768::encaps(&pk, &mut rng).unwrap();
    assert_ne!(ct1, ct2);
    assert_ne!(ss1, ss2);
}

#[test]
fn test_wrong_secret_key_yields_unrelated_key() {
    let mut rng = StdRng::seed_from_u64(2);
    let (pk, _) = Kyber768::keygen(&mut rng).unwrap();
    let (_, other_sk) = Kyber768::keygen(&mut rng).unwrap();
    let (ct, ss) = Kyber768::encaps(&pk, &mut rng).unwrap();

    let wrong = Kyber768::decaps(&other_sk, &ct).unwrap();
    assert_ne!(wrong, ss);
    assert_eq!(wrong.as_ref().len(), 32);
}

#[test]
fn test_every_ciphertext_byte_is_checked() {
    let (d, z, m) = counting_seeds();
    let (pk, sk) = keypair_derand(&d, &z);
    let (ct, ss) = encapsulate_derand(&pk, &m).unwrap();

    for i in (0..CIPHERTEXT_SIZE).step_by(97).chain([CIPHERTEXT_SIZE - 1]) {
        let mut tampered = ct;
        tampered[i] ^= 0x01;
        let rejected = decapsulate(&sk, &tampered).unwrap();
        assert_ne!(rejected, ss, "byte {i}");
    }
}

#[test]
fn test_decapsulation_deterministic() {
    let (d, z, m) = counting_seeds();
    let (pk, sk) = keypair_derand(&d, &z);
    let (mut ct, _) = encapsulate_derand(&pk, &m).unwrap();
    assert_eq!(decapsulate(&sk, &ct).unwrap(), decapsulate(&sk, &ct).unwrap());
    ct[500] ^= 0xff;
    assert_eq!(decapsulate(&sk, &ct).unwrap(), decapsulate(&sk, &ct).unwrap());
}

#[test]
fn test_short_ciphertext_rejected() {
    let result = Ciphertext::from_bytes(&[0u8; CIPHERTEXT_SIZE - 1]);
    assert_eq!(
        result.unwrap_err(),
        Error::InvalidCiphertext {
            expected: CIPHERTEXT_SIZE,
            actual: CIPHERTEXT_SIZE - 1
        }
    );

    let (d, z, _) = counting_seeds();
    let (_, sk) = keypair_derand(&d, &z);
    assert!(matches!(
        decapsulate(&sk, &[0u8; CIPHERTEXT_SIZE + 1]),
        Err(Error::InvalidCiphertext { .. })
    ));
    assert!(matches!(
        decapsulate(&sk[..SECRET_KEY_SIZE - 32], &[0u8; CIPHERTEXT_SIZE]),
        Err(Error::InvalidSecretKey { .. })
    ));
}

#[test]
fn test_all_zero_and_all_ones_ciphertexts() {
    let (d, z, _) = counting_seeds();
    let (_, sk) = keypair_derand(&d, &z);
    let a = decapsulate(&sk, &[0u8; CIPHERTEXT_SIZE]).unwrap();
    let b = decapsulate(&sk, &[0xffu8; CIPHERTEXT_SIZE]).unwrap();
    assert_ne!(a, b);
}

/// An RNG that serves `budget` requests and then fails.
struct FailingRng {
    budget: usize,
}

#[derive(Debug)]
struct Exhausted;

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("entropy exhausted")
    }
}

impl TryRngCore for FailingRng {
    type Error = Exhausted;

    fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
        let mut buf = [0u8; 4];
        self.try_fill_bytes(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
        let mut buf = [0u8; 8];
        self.try_fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }

    fn try_fill_bytes(&mut self, dst: &mut [u8]) -> Result<(), Self::Error> {
        if self.budget == 0 {
            return Err(Exhausted);
        }
        self.budget -= 1;
        dst.fill(0x5a);
        Ok(())
    }
}

impl TryCryptoRng for FailingRng {}

#[test]
fn test_entropy_failure_surfaces() {
    for budget in 0..2 {
        let mut rng = FailingRng { budget };
        assert!(matches!(
            Kyber768::keygen(&mut rng),
            Err(Error::EntropyUnavailable)
        ));
    }

    let mut rng = FailingRng { budget: 2 };
    let (pk, _) = Kyber768::keygen(&mut rng).unwrap();
    assert!(matches!(
        Kyber768::encaps(&pk, &mut rng),
        Err(Error::EntropyUnavailable)
    ));
}
