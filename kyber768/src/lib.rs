//! # Kyber768
//!
//! Round-3 Kyber768, the module-lattice key encapsulation mechanism at
//! NIST security level 3 (`k = 3`, `eta1 = eta2 = 2`, `du = 10`, `dv = 4`).
//!
//! ## Sizes
//!
//! | Object     | Bytes | Layout                                   |
//! |------------|-------|------------------------------------------|
//! | Public key | 1184  | `Encode12(t̂)` (1152) `\|\|` rho (32)      |
//! | Secret key | 2400  | `ŝ` (1152) `\|\|` pk `\|\|` H(pk) `\|\|` z |
//! | Ciphertext | 1088  | `Compress10(u)` (960) `\|\|` `Compress4(v)` (128) |
//! | Shared key | 32    | `KDF(K̄ \|\| H(c))`                         |
//!
//! Outputs match the NIST round-3 known-answer vectors.
//!
//! ## Example
//!
//! ```
//! use kyber768::{Kem, Kyber768};
//!
//! let mut rng = rand::rng();
//! let (pk, sk) = Kyber768::keygen(&mut rng)?;
//! let (ct, ss_sender) = Kyber768::encaps(&pk, &mut rng)?;
//! let ss_receiver = Kyber768::decaps(&sk, &ct)?;
//!
//! assert_eq!(ss_sender, ss_receiver);
//! # Ok::<(), kyber768::Error>(())
//! ```
//!
//! Deterministic entry points taking explicit seeds live in [`kem`].
//!
//! ## Features
//!
//! - `std` (default): `std::error::Error` for [`Error`]
//! - `tracing`: `debug`-level events for each operation and every rejected
//!   input. Events carry sizes only.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod compress;
pub mod encode;
mod hash;
pub mod indcpa;
pub mod kem;
mod kyber;
pub mod matrix;
mod ntt;
pub mod params;
pub mod poly;
pub mod polyvec;
mod reduce;
pub mod sample;

#[cfg(test)]
mod kat;

pub use kyber::{Ciphertext, Kyber768, PublicKey, SecretKey, SharedKey};
pub use kyber_core::{Error, Kem, Result};
pub use matrix::Matrix;
pub use poly::Poly;
pub use polyvec::PolyVec;
