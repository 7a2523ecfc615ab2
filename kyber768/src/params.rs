//! Kyber768 parameters.

/// Polynomial ring dimension (n).
pub const N: usize = 256;

/// Modulus (q).
pub const Q: u16 = 3329;

/// Module rank (k).
pub const K: usize = 3;

/// Noise parameter for secrets and key errors (eta1).
pub const ETA1: usize = 2;

/// Noise parameter for encryption errors (eta2).
pub const ETA2: usize = 2;

/// Bits per coefficient of the compressed `u` vector (du).
pub const DU: u32 = 10;

/// Bits per coefficient of the compressed `v` polynomial (dv).
pub const DV: u32 = 4;

/// Size of seeds, hashes, messages and the shared key.
pub const SYMBYTES: usize = 32;

/// Shared key size in bytes.
pub const SHARED_KEY_SIZE: usize = SYMBYTES;

/// One ring element at 12 bits per coefficient.
pub const POLY_BYTES: usize = 384;

/// A polynomial vector at 12 bits per coefficient.
pub const POLYVEC_BYTES: usize = K * POLY_BYTES;

/// Compressed `u` component of a ciphertext.
pub const POLYVEC_COMPRESSED_BYTES: usize = K * (N * DU as usize / 8);

/// Compressed `v` component of a ciphertext.
pub const POLY_COMPRESSED_BYTES: usize = N * DV as usize / 8;

/// Public key: encoded `t` followed by the matrix seed `rho`.
pub const PUBLIC_KEY_SIZE: usize = POLYVEC_BYTES + SYMBYTES;

/// Secret key: `s`, the public key, `H(pk)` and the rejection value `z`.
pub const SECRET_KEY_SIZE: usize = POLYVEC_BYTES + PUBLIC_KEY_SIZE + 2 * SYMBYTES;

/// Ciphertext: compressed `u` followed by compressed `v`.
pub const CIPHERTEXT_SIZE: usize = POLYVEC_COMPRESSED_BYTES + POLY_COMPRESSED_BYTES;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(PUBLIC_KEY_SIZE, 1184);
        assert_eq!(SECRET_KEY_SIZE, 2400);
        assert_eq!(CIPHERTEXT_SIZE, 1088);
        assert_eq!(POLYVEC_COMPRESSED_BYTES, 960);
        assert_eq!(POLY_COMPRESSED_BYTES, 128);
        assert_eq!(SHARED_KEY_SIZE, 32);
    }
}
