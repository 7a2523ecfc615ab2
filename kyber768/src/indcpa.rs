//! IND-CPA public-key encryption underlying the KEM.
//!
//! This is the module-LWE scheme on its own: deterministic given its
//! seeds, and only chosen-plaintext secure. [`crate::kem`] adds the
//! re-encryption check that makes the combined construction CCA secure.
//!
//! Layouts:
//! - public key: `Encode12(t̂) || rho` (1184 bytes)
//! - secret key: `Encode12(ŝ)` (1152 bytes)
//! - ciphertext: `Compress10(u) || Compress4(v)` (1088 bytes)

use crate::compress::{poly_compress, poly_decompress, polyvec_compress, polyvec_decompress};
use crate::encode::{msg_to_poly, poly_to_msg};
use crate::hash::hash_g;
use crate::matrix::Matrix;
use crate::params::{
    CIPHERTEXT_SIZE, K, POLYVEC_BYTES, POLYVEC_COMPRESSED_BYTES, POLY_COMPRESSED_BYTES,
    PUBLIC_KEY_SIZE, SYMBYTES,
};
use crate::polyvec::PolyVec;
use crate::sample::{sample_noise, sample_noise_vec};
use kyber_core::{Error, Result};
use zeroize::Zeroize;

/// Secret-key size of the inner scheme.
pub const INDCPA_SECRET_KEY_SIZE: usize = POLYVEC_BYTES;

/// Split a public key into the encoded `t̂` and the matrix seed.
fn split_public_key(pk: &[u8; PUBLIC_KEY_SIZE]) -> (&[u8], [u8; SYMBYTES]) {
    let (t, rho) = pk.split_at(POLYVEC_BYTES);
    let mut seed = [0u8; SYMBYTES];
    seed.copy_from_slice(rho);
    (t, seed)
}

/// Derive a key pair from the 32-byte seed `d`.
///
/// Returns `(pk, sk)` with `t̂ = Â∘ŝ + ê` and `ŝ` stored in the NTT domain.
pub fn keypair(d: &[u8; SYMBYTES]) -> ([u8; PUBLIC_KEY_SIZE], [u8; INDCPA_SECRET_KEY_SIZE]) {
    let (rho, mut sigma) = hash_g(&[&d[..]]);
    let a = Matrix::generate(&rho, false);

    let mut s = sample_noise_vec(&sigma, 0);
    let mut e = sample_noise_vec(&sigma, K as u8);
    s.ntt();
    e.ntt();

    let mut t = a.mul_vec(&s);
    t.to_mont();
    t.add_assign(&e);
    t.freeze();

    let mut pk = [0u8; PUBLIC_KEY_SIZE];
    pk[..POLYVEC_BYTES].copy_from_slice(&t.to_bytes());
    pk[POLYVEC_BYTES..].copy_from_slice(&rho);
    let sk = s.to_bytes();

    sigma.zeroize();
    s.zeroize();
    e.zeroize();
    (pk, sk)
}

/// Encrypt the 32-byte message `m` under `pk` with randomness `coins`.
///
/// # Errors
/// `Error::InvalidPublicKey` if the encoded `t̂` holds a coefficient `>= q`.
pub fn encrypt(
    pk: &[u8; PUBLIC_KEY_SIZE],
    m: &[u8; SYMBYTES],
    coins: &[u8; SYMBYTES],
) -> Result<[u8; CIPHERTEXT_SIZE]> {
    let (t_bytes, rho) = split_public_key(pk);
    let t = PolyVec::from_bytes(t_bytes).map_err(|_| Error::InvalidPublicKey {
        expected: PUBLIC_KEY_SIZE,
        actual: PUBLIC_KEY_SIZE,
    })?;
    let at = Matrix::generate(&rho, true);

    let mut r = sample_noise_vec(coins, 0);
    let mut e1 = sample_noise_vec(coins, K as u8);
    let mut e2 = sample_noise(coins, 2 * K as u8);
    r.ntt();

    let mut u = at.mul_vec(&r);
    u.inv_ntt();
    u.add_assign(&e1);
    u.reduce();

    let mut v = t.inner_product(&r);
    v.inv_ntt();
    v.add_assign(&e2);
    v.add_assign(&msg_to_poly(m));
    v.reduce();

    let mut ct = [0u8; CIPHERTEXT_SIZE];
    ct[..POLYVEC_COMPRESSED_BYTES].copy_from_slice(&polyvec_compress(&u));
    ct[POLYVEC_COMPRESSED_BYTES..].copy_from_slice(&poly_compress(&v));

    r.zeroize();
    e1.zeroize();
    e2.zeroize();
    v.zeroize();
    Ok(ct)
}

/// Recover the message from `ct`. Total over all inputs of the right size.
pub fn decrypt(sk: &[u8; INDCPA_SECRET_KEY_SIZE], ct: &[u8; CIPHERTEXT_SIZE]) -> [u8; SYMBYTES] {
    let mut u_bytes = [0u8; POLYVEC_COMPRESSED_BYTES];
    let mut v_bytes = [0u8; POLY_COMPRESSED_BYTES];
    u_bytes.copy_from_slice(&ct[..POLYVEC_COMPRESSED_BYTES]);
    v_bytes.copy_from_slice(&ct[POLYVEC_COMPRESSED_BYTES..]);

    let mut u = polyvec_decompress(&u_bytes);
    let v = poly_decompress(&v_bytes);
    let mut s = PolyVec::from_bytes_reduced(sk);

    u.ntt();
    let mut su = s.inner_product(&u);
    su.inv_ntt();

    let mut w = v;
    w.sub_assign(&su);
    w.reduce();
    let m = poly_to_msg(&w);

    s.zeroize();
    su.zeroize();
    w.zeroize();
    m
}
