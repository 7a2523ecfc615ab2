//! Error types for Kyber operations.

use core::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by the KEM and its building blocks.
///
/// Decapsulation of a correctly sized but tampered ciphertext is not an
/// error: it yields the implicit-rejection key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Arithmetic input does not have the fixed size.
    InvalidLength {
        /// Expected number of elements.
        expected: usize,
        /// Number of elements provided.
        actual: usize,
    },

    /// Malformed byte layout (wrong length or out-of-range coefficient).
    InvalidEncoding,

    /// Public key with the wrong size, or (`expected == actual`) with a
    /// coefficient `>= q`.
    InvalidPublicKey {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Secret key with the wrong size, or (`expected == actual`) whose
    /// embedded public key is malformed or does not match the stored `H(pk)`.
    InvalidSecretKey {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Ciphertext with the wrong size.
    InvalidCiphertext {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// The random source failed to produce output.
    EntropyUnavailable,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected}, got {actual}")
            }
            Error::InvalidEncoding => write!(f, "invalid encoding"),
            Error::InvalidPublicKey { expected, actual } if expected == actual => {
                write!(f, "invalid public key: coefficient out of range")
            }
            Error::InvalidPublicKey { expected, actual } => {
                write!(f, "invalid public key: expected {expected} bytes, got {actual}")
            }
            Error::InvalidSecretKey { expected, actual } if expected == actual => {
                write!(f, "invalid secret key: embedded public key is inconsistent")
            }
            Error::InvalidSecretKey { expected, actual } => {
                write!(f, "invalid secret key: expected {expected} bytes, got {actual}")
            }
            Error::InvalidCiphertext { expected, actual } => {
                write!(
                    f,
                    "invalid ciphertext: expected {expected} bytes, got {actual}"
                )
            }
            Error::EntropyUnavailable => write!(f, "entropy source unavailable"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
