//! The CCA-secure KEM built from [`crate::indcpa`] by re-encryption.
//!
//! These entry points are deterministic: every random input is an
//! explicit argument. [`crate::Kyber768`] draws those inputs from an RNG
//! and forwards here.
//!
//! Secret key layout: `ŝ (1152) || pk (1184) || H(pk) (32) || z (32)`.

use crate::hash::{hash_g, hash_h, kdf};
use crate::indcpa::{self, INDCPA_SECRET_KEY_SIZE};
use crate::params::{CIPHERTEXT_SIZE, PUBLIC_KEY_SIZE, SECRET_KEY_SIZE, SHARED_KEY_SIZE, SYMBYTES};
use kyber_core::{Error, Result};
use subtle::{ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

const PK_OFFSET: usize = INDCPA_SECRET_KEY_SIZE;
const HPK_OFFSET: usize = PK_OFFSET + PUBLIC_KEY_SIZE;
const Z_OFFSET: usize = HPK_OFFSET + SYMBYTES;

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Generate a key pair from the seeds `d` (key material) and `z`
/// (implicit-rejection value).
///
/// Returns `(pk, sk)`.
pub fn keypair_derand(
    d: &[u8; SYMBYTES],
    z: &[u8; SYMBYTES],
) -> ([u8; PUBLIC_KEY_SIZE], [u8; SECRET_KEY_SIZE]) {
    trace!("kyber768 keypair");
    let (pk, mut indcpa_sk) = indcpa::keypair(d);

    let mut sk = [0u8; SECRET_KEY_SIZE];
    sk[..PK_OFFSET].copy_from_slice(&indcpa_sk);
    sk[PK_OFFSET..HPK_OFFSET].copy_from_slice(&pk);
    sk[HPK_OFFSET..Z_OFFSET].copy_from_slice(&hash_h(&[&pk]));
    sk[Z_OFFSET..].copy_from_slice(z);

    indcpa_sk.zeroize();
    (pk, sk)
}

/// Derive `(K̄, coins)` from the message and the public-key hash.
fn derive_key_and_coins(
    m: &[u8; SYMBYTES],
    pk_hash: &[u8; SYMBYTES],
) -> ([u8; SYMBYTES], [u8; SYMBYTES]) {
    hash_g(&[m, pk_hash])
}

/// Encapsulate to `pk` using `seed` as the only source of randomness.
///
/// The message is `H(seed)`, so the raw seed never enters the
/// ciphertext directly. Returns `(ciphertext, shared_key)`.
///
/// # Errors
/// `Error::InvalidPublicKey` if `pk` is not 1184 bytes, or if its encoded
/// vector holds a coefficient `>= q` (then `expected == actual`).
pub fn encapsulate_derand(
    pk: &[u8],
    seed: &[u8; SYMBYTES],
) -> Result<([u8; CIPHERTEXT_SIZE], [u8; SHARED_KEY_SIZE])> {
    trace!(pk_len = pk.len(), "kyber768 encapsulate");
    let pk: &[u8; PUBLIC_KEY_SIZE] = pk.try_into().map_err(|_| {
        trace!(pk_len = pk.len(), "rejected public key length");
        Error::InvalidPublicKey {
            expected: PUBLIC_KEY_SIZE,
            actual: pk.len(),
        }
    })?;

    let mut m = hash_h(&[seed]);
    let (mut kbar, mut coins) = derive_key_and_coins(&m, &hash_h(&[pk]));

    let result = indcpa::encrypt(pk, &m, &coins).map(|ct| {
        let ss = kdf(&kbar, &hash_h(&[&ct]));
        (ct, ss)
    });
    if result.is_err() {
        trace!("rejected public key encoding");
    }

    m.zeroize();
    kbar.zeroize();
    coins.zeroize();
    result
}

/// Recover the shared key for `ct` with implicit rejection.
///
/// A ciphertext of the right size never causes an error: if re-encrypting
/// the decrypted message does not reproduce `ct`, the result is
/// `KDF(z || H(ct))` instead of `KDF(K̄' || H(ct))`. The choice is made
/// with a constant-time select and both paths do identical work.
///
/// # Errors
/// - `Error::InvalidSecretKey` if `sk` is not 2400 bytes, or if its
///   embedded public key is malformed or disagrees with the stored `H(pk)`
///   (then `expected == actual`).
/// - `Error::InvalidCiphertext` if `ct` is not 1088 bytes.
pub fn decapsulate(sk: &[u8], ct: &[u8]) -> Result<[u8; SHARED_KEY_SIZE]> {
    trace!(sk_len = sk.len(), ct_len = ct.len(), "kyber768 decapsulate");
    let sk: &[u8; SECRET_KEY_SIZE] = sk.try_into().map_err(|_| {
        trace!(sk_len = sk.len(), "rejected secret key length");
        Error::InvalidSecretKey {
            expected: SECRET_KEY_SIZE,
            actual: sk.len(),
        }
    })?;
    let ct: &[u8; CIPHERTEXT_SIZE] = ct.try_into().map_err(|_| {
        trace!(ct_len = ct.len(), "rejected ciphertext length");
        Error::InvalidCiphertext {
            expected: CIPHERTEXT_SIZE,
            actual: ct.len(),
        }
    })?;

    let inconsistent = Error::InvalidSecretKey {
        expected: SECRET_KEY_SIZE,
        actual: SECRET_KEY_SIZE,
    };
    let (indcpa_sk, rest) = sk.split_at(PK_OFFSET);
    let (pk, rest) = rest.split_at(PUBLIC_KEY_SIZE);
    let (pk_hash, z) = rest.split_at(SYMBYTES);
    let indcpa_sk: &[u8; INDCPA_SECRET_KEY_SIZE] =
        indcpa_sk.try_into().map_err(|_| inconsistent)?;
    let pk: &[u8; PUBLIC_KEY_SIZE] = pk.try_into().map_err(|_| inconsistent)?;
    let pk_hash: &[u8; SYMBYTES] = pk_hash.try_into().map_err(|_| inconsistent)?;
    let z: &[u8; SYMBYTES] = z.try_into().map_err(|_| inconsistent)?;

    // Public data only: the embedded key and its hash.
    if !bool::from(hash_h(&[pk]).ct_eq(pk_hash)) {
        trace!("rejected secret key: public key hash mismatch");
        return Err(inconsistent);
    }

    let mut m = indcpa::decrypt(indcpa_sk, ct);
    let (mut kbar, mut coins) = derive_key_and_coins(&m, pk_hash);
    let reencrypted = indcpa::encrypt(pk, &m, &coins).map_err(|_| {
        trace!("rejected secret key: embedded public key encoding");
        inconsistent
    })?;

    let matches = reencrypted[..].ct_eq(&ct[..]);
    let mut key = [0u8; SYMBYTES];
    for ((k, &good), &reject) in key.iter_mut().zip(kbar.iter()).zip(z.iter()) {
        *k = u8::conditional_select(&reject, &good, matches);
    }
    let ss = kdf(&key, &hash_h(&[ct]));

    m.zeroize();
    kbar.zeroize();
    coins.zeroize();
    key.zeroize();
    Ok(ss)
}
