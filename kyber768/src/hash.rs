//! Symmetric primitives.
//!
//! - H = SHA3-256: hash of the public key, the ciphertext and the raw message seed
//! - G = SHA3-512: seed expansion and `(K̄, coins)` derivation
//! - KDF = SHAKE256: final shared key derivation
//! - XOF = SHAKE128: matrix generation
//! - PRF = SHAKE256: noise generation

use crate::params::SYMBYTES;
use sha3::{
    digest::{Digest, ExtendableOutput, Update, XofReader},
    Sha3_256, Sha3_512, Shake128, Shake128Reader, Shake256,
};

/// SHAKE128 rate in bytes; the XOF is squeezed in whole blocks.
pub const XOF_BLOCK_BYTES: usize = 168;

/// H: SHA3-256 over the concatenation of `parts`.
pub fn hash_h(parts: &[&[u8]]) -> [u8; SYMBYTES] {
    let mut hasher = Sha3_256::new();
    for part in parts {
        Digest::update(&mut hasher, part);
    }
    hasher.finalize().into()
}

/// G: SHA3-512 over the concatenation of `parts`, split into two halves.
pub fn hash_g(parts: &[&[u8]]) -> ([u8; SYMBYTES], [u8; SYMBYTES]) {
    let mut hasher = Sha3_512::new();
    for part in parts {
        Digest::update(&mut hasher, part);
    }
    let out = hasher.finalize();

    let mut lo = [0u8; SYMBYTES];
    let mut hi = [0u8; SYMBYTES];
    lo.copy_from_slice(&out[..SYMBYTES]);
    hi.copy_from_slice(&out[SYMBYTES..]);
    (lo, hi)
}

/// KDF: SHAKE256 over `key || ct_hash`, truncated to 32 bytes.
///
/// Both the success path (`key = K̄`) and the rejection path (`key = z`)
/// go through this function with identically shaped inputs.
pub fn kdf(key: &[u8; SYMBYTES], ct_hash: &[u8; SYMBYTES]) -> [u8; SYMBYTES] {
    let mut hasher = Shake256::default();
    hasher.update(key);
    hasher.update(ct_hash);
    let mut out = [0u8; SYMBYTES];
    hasher.finalize_xof().read(&mut out);
    out
}

/// PRF: SHAKE256(seed || nonce), filling `out`.
pub fn prf(seed: &[u8; SYMBYTES], nonce: u8, out: &mut [u8]) {
    let mut hasher = Shake256::default();
    hasher.update(seed);
    hasher.update(&[nonce]);
    hasher.finalize_xof().read(out);
}

/// SHAKE128 stream used to generate one matrix entry.
pub struct Xof {
    reader: Shake128Reader,
}

impl Xof {
    /// Absorb `rho || x || y`.
    pub fn new(rho: &[u8; SYMBYTES], x: u8, y: u8) -> Self {
        let mut hasher = Shake128::default();
        hasher.update(rho);
        hasher.update(&[x, y]);
        Self {
            reader: hasher.finalize_xof(),
        }
    }

    /// Squeeze the next block of output.
    #[inline]
    pub fn squeeze_block(&mut self, block: &mut [u8; XOF_BLOCK_BYTES]) {
        self.reader.read(block);
    }
}
