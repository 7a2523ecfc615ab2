//! Typed keys and the [`Kem`] implementation.

use crate::kem;
use crate::params::{CIPHERTEXT_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE, SHARED_KEY_SIZE, SYMBYTES};
use core::fmt;
use kyber_core::{Error, Kem, Result};
use rand_core::TryCryptoRng;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Kyber768 public key: `Encode12(t̂) || rho`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    bytes: [u8; PUBLIC_KEY_SIZE],
}

impl PublicKey {
    /// Create a public key from bytes.
    ///
    /// Only the length is checked here; coefficient range is checked when
    /// the key is used for encapsulation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.try_into().map_err(|_| Error::InvalidPublicKey {
            expected: PUBLIC_KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self { bytes })
    }

    /// Get the key as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Kyber768 secret key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; SECRET_KEY_SIZE],
}

impl SecretKey {
    /// Create a secret key from bytes.
    ///
    /// Writes directly into the struct so no stray copy of the key is
    /// left on the stack.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SECRET_KEY_SIZE {
            return Err(Error::InvalidSecretKey {
                expected: SECRET_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key = Self {
            bytes: [0u8; SECRET_KEY_SIZE],
        };
        key.bytes.copy_from_slice(bytes);
        Ok(key)
    }

    /// Get the key as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

/// Kyber768 ciphertext: `Compress10(u) || Compress4(v)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    bytes: [u8; CIPHERTEXT_SIZE],
}

impl Ciphertext {
    /// Create a ciphertext from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.try_into().map_err(|_| Error::InvalidCiphertext {
            expected: CIPHERTEXT_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self { bytes })
    }

    /// Get the ciphertext as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// The 32-byte shared key. Comparison is constant time.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey {
    bytes: [u8; SHARED_KEY_SIZE],
}

impl SharedKey {
    /// Create a shared key from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SHARED_KEY_SIZE {
            return Err(Error::InvalidLength {
                expected: SHARED_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key = Self {
            bytes: [0u8; SHARED_KEY_SIZE],
        };
        key.bytes.copy_from_slice(bytes);
        Ok(key)
    }

    /// Get the key as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for SharedKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl ConstantTimeEq for SharedKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes.ct_eq(&other.bytes)
    }
}

impl PartialEq for SharedKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SharedKey {}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey([REDACTED])")
    }
}

/// Fill a fresh 32-byte seed from `rng`.
fn draw_seed(rng: &mut impl TryCryptoRng) -> Result<Zeroizing<[u8; SYMBYTES]>> {
    let mut seed = Zeroizing::new([0u8; SYMBYTES]);
    rng.try_fill_bytes(&mut seed[..])
        .map_err(|_| Error::EntropyUnavailable)?;
    Ok(seed)
}

/// Kyber768 key encapsulation mechanism (round 3, NIST security level 3).
///
/// KeyGen draws `d` then `z` (two 32-byte requests); encapsulation draws
/// one 32-byte seed. A NIST KAT DRBG passed as the RNG therefore
/// reproduces the published vectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct Kyber768;

impl Kem for Kyber768 {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type Ciphertext = Ciphertext;
    type SharedKey = SharedKey;

    const PUBLIC_KEY_SIZE: usize = PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = SECRET_KEY_SIZE;
    const CIPHERTEXT_SIZE: usize = CIPHERTEXT_SIZE;
    const SHARED_KEY_SIZE: usize = SHARED_KEY_SIZE;

    fn keygen(rng: &mut impl TryCryptoRng) -> Result<(Self::PublicKey, Self::SecretKey)> {
        let d = draw_seed(rng)?;
        let z = draw_seed(rng)?;
        let (pk, mut sk) = kem::keypair_derand(&d, &z);
        let secret = SecretKey { bytes: sk };
        sk.zeroize();
        Ok((PublicKey { bytes: pk }, secret))
    }

    fn encaps(
        pk: &Self::PublicKey,
        rng: &mut impl TryCryptoRng,
    ) -> Result<(Self::Ciphertext, Self::SharedKey)> {
        let seed = draw_seed(rng)?;
        let (ct, mut ss) = kem::encapsulate_derand(&pk.bytes, &seed)?;
        let shared = SharedKey { bytes: ss };
        ss.zeroize();
        Ok((Ciphertext { bytes: ct }, shared))
    }

    fn decaps(sk: &Self::SecretKey, ct: &Self::Ciphertext) -> Result<Self::SharedKey> {
        let mut ss = kem::decapsulate(&sk.bytes, &ct.bytes)?;
        let shared = SharedKey { bytes: ss };
        ss.zeroize();
        Ok(shared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_key_sizes() {
        assert_eq!(Kyber768::PUBLIC_KEY_SIZE, 1184);
        assert_eq!(Kyber768::SECRET_KEY_SIZE, 2400);
        assert_eq!(Kyber768::CIPHERTEXT_SIZE, 1088);
        assert_eq!(Kyber768::SHARED_KEY_SIZE, 32);
    }

    #[test]
    fn test_public_key_from_bytes() {
        let bytes = [7u8; PUBLIC_KEY_SIZE];
        let pk = PublicKey::from_bytes(&bytes).unwrap();
        assert_eq!(pk.as_bytes(), &bytes);
        assert_eq!(pk.as_ref(), &bytes);
    }

    #[test]
    fn test_from_bytes_invalid_lengths() {
        assert_eq!(
            PublicKey::from_bytes(&[0u8; 100]).unwrap_err(),
            Error::InvalidPublicKey {
                expected: 1184,
                actual: 100
            }
        );
        assert!(matches!(
            SecretKey::from_bytes(&[0u8; 2401]),
            Err(Error::InvalidSecretKey {
                expected: 2400,
                actual: 2401
            })
        ));
        assert_eq!(
            Ciphertext::from_bytes(&[0u8; 1087]).unwrap_err(),
            Error::InvalidCiphertext {
                expected: 1088,
                actual: 1087
            }
        );
        assert!(matches!(
            SharedKey::from_bytes(&[0u8; 31]),
            Err(Error::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_secret_debug_redacted() {
        let sk = SecretKey::from_bytes(&[0xabu8; SECRET_KEY_SIZE]).unwrap();
        let ss = SharedKey::from_bytes(&[0xcdu8; 32]).unwrap();
        let shown = format!("{sk:?} {ss:?}");
        assert!(!shown.contains("171"));
        assert!(!shown.contains("205"));
        assert!(shown.contains("REDACTED"));
    }

    #[test]
    fn test_shared_key_eq() {
        let a = SharedKey::from_bytes(&[1u8; 32]).unwrap();
        let b = SharedKey::from_bytes(&[1u8; 32]).unwrap();
        let mut c_bytes = [1u8; 32];
        c_bytes[31] = 2;
        let c = SharedKey::from_bytes(&c_bytes).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_kem_roundtrip() {
        let mut rng = StdRng::seed_from_u64(42);
        let (pk, sk) = Kyber768::keygen(&mut rng).unwrap();
        let (ct, ss_sender) = Kyber768::encaps(&pk, &mut rng).unwrap();
        let ss_receiver = Kyber768::decaps(&sk, &ct).unwrap();
        assert_eq!(ss_sender, ss_receiver);
    }

    #[test]
    fn test_keygen_matches_derand_draw_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let (pk, sk) = Kyber768::keygen(&mut rng).unwrap();

        let mut replay = StdRng::seed_from_u64(7);
        let mut d = [0u8; 32];
        let mut z = [0u8; 32];
        rand::RngCore::fill_bytes(&mut replay, &mut d);
        rand::RngCore::fill_bytes(&mut replay, &mut z);
        let (pk2, sk2) = kem::keypair_derand(&d, &z);
        assert_eq!(pk.as_bytes(), &pk2);
        assert_eq!(sk.as_bytes(), &sk2);
    }
}
