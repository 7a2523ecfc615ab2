//! # Kyber Core
//!
//! Shared building blocks for the `kyber768` crate:
//! - The [`Error`] type and [`Result`] alias
//! - The [`Kem`] trait
//! - Constant-time modular arithmetic macros (Barrett, Montgomery, freeze)
//! - NTT generator macros
//!
//! Re-exports `zeroize` and `subtle` so downstream crates agree on versions.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod ntt;
mod reduce;
mod traits;

pub use error::{Error, Result};
pub use traits::Kem;

/// Re-export zeroize for convenience.
pub use zeroize::{Zeroize, ZeroizeOnDrop};

/// Re-export subtle for constant-time operations.
pub use subtle;
