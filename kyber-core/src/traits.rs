//! Key encapsulation trait.

use crate::Result;
use rand_core::TryCryptoRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Key Encapsulation Mechanism (KEM) trait.
///
/// Every operation is a pure function of its inputs and the supplied
/// random source; implementations hold no global state.
///
/// # Example
///
/// ```ignore
/// use kyber_core::Kem;
///
/// let (pk, sk) = MyKem::keygen(&mut rng)?;
/// let (ct, ss_sender) = MyKem::encaps(&pk, &mut rng)?;
/// let ss_receiver = MyKem::decaps(&sk, &ct)?;
/// ```
pub trait Kem {
    /// Public (encapsulation) key.
    type PublicKey: Clone;

    /// Secret (decapsulation) key.
    type SecretKey: Zeroize + ZeroizeOnDrop;

    /// Ciphertext produced by encapsulation.
    type Ciphertext: Clone;

    /// Shared key agreed by both parties.
    type SharedKey: Zeroize + ZeroizeOnDrop + AsRef<[u8]>;

    /// Size of the public key in bytes.
    const PUBLIC_KEY_SIZE: usize;

    /// Size of the secret key in bytes.
    const SECRET_KEY_SIZE: usize;

    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_SIZE: usize;

    /// Size of the shared key in bytes.
    const SHARED_KEY_SIZE: usize;

    /// Generate a new key pair.
    ///
    /// # Arguments
    ///
    /// * `rng` - A cryptographically secure random source.
    ///
    /// # Returns
    ///
    /// A tuple of (public_key, secret_key), or
    /// `Error::EntropyUnavailable` if the random source fails.
    fn keygen(rng: &mut impl TryCryptoRng) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encapsulate a fresh shared key to the holder of `pk`.
    ///
    /// # Arguments
    ///
    /// * `pk` - The recipient's public key.
    /// * `rng` - A cryptographically secure random source.
    ///
    /// # Returns
    ///
    /// A tuple of (ciphertext, shared_key).
    fn encaps(
        pk: &Self::PublicKey,
        rng: &mut impl TryCryptoRng,
    ) -> Result<(Self::Ciphertext, Self::SharedKey)>;

    /// Recover the shared key from a ciphertext.
    ///
    /// # Security
    ///
    /// Implementations MUST use implicit rejection: a ciphertext that
    /// fails the re-encryption check yields a pseudorandom key derived
    /// from secret material, never an error, and takes the same time
    /// as the success path.
    fn decaps(sk: &Self::SecretKey, ct: &Self::Ciphertext) -> Result<Self::SharedKey>;
}
