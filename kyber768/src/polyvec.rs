//! Vectors of `K` ring elements.

use crate::encode::{poly_from_bytes, poly_from_bytes_reduced, poly_to_bytes};
use crate::params::{K, POLYVEC_BYTES, POLY_BYTES};
use crate::poly::Poly;
use core::fmt;
use kyber_core::{Error, Result};
use zeroize::Zeroize;

/// A vector of `K = 3` ring elements.
#[derive(Clone, Default, Zeroize)]
pub struct PolyVec {
    pub(crate) polys: [Poly; K],
}

impl fmt::Debug for PolyVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolyVec").finish_non_exhaustive()
    }
}

impl PolyVec {
    /// Build a vector from its elements.
    pub fn new(polys: [Poly; K]) -> Self {
        Self { polys }
    }

    /// The elements of the vector.
    pub fn polys(&self) -> &[Poly; K] {
        &self.polys
    }

    /// Serialize at 12 bits per coefficient (`K * 384` bytes).
    pub fn to_bytes(&self) -> [u8; POLYVEC_BYTES] {
        let mut out = [0u8; POLYVEC_BYTES];
        for (chunk, p) in out.chunks_exact_mut(POLY_BYTES).zip(self.polys.iter()) {
            chunk.copy_from_slice(&poly_to_bytes(p));
        }
        out
    }

    /// Deserialize `K * 384` bytes.
    ///
    /// # Errors
    /// `Error::InvalidEncoding` on a wrong length or any 12-bit value `>= q`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != POLYVEC_BYTES {
            return Err(Error::InvalidEncoding);
        }
        let mut v = Self::default();
        for (p, chunk) in v.polys.iter_mut().zip(bytes.chunks_exact(POLY_BYTES)) {
            *p = poly_from_bytes(chunk)?;
        }
        Ok(v)
    }

    /// Deserialize a trusted encoding, reducing each value mod q.
    pub(crate) fn from_bytes_reduced(bytes: &[u8; POLYVEC_BYTES]) -> Self {
        let mut v = Self::default();
        for (p, chunk) in v.polys.iter_mut().zip(bytes.chunks_exact(POLY_BYTES)) {
            *p = poly_from_bytes_reduced(chunk);
        }
        v
    }

    pub(crate) fn ntt(&mut self) {
        self.polys.iter_mut().for_each(Poly::ntt);
    }

    pub(crate) fn inv_ntt(&mut self) {
        self.polys.iter_mut().for_each(Poly::inv_ntt);
    }

    pub(crate) fn reduce(&mut self) {
        self.polys.iter_mut().for_each(Poly::reduce);
    }

    pub(crate) fn freeze(&mut self) {
        self.polys.iter_mut().for_each(Poly::freeze);
    }

    pub(crate) fn to_mont(&mut self) {
        self.polys.iter_mut().for_each(Poly::to_mont);
    }

    pub(crate) fn add_assign(&mut self, other: &Self) {
        for (a, b) in self.polys.iter_mut().zip(other.polys.iter()) {
            a.add_assign(b);
        }
    }

    /// Inner product of two NTT-domain vectors, times 2^(-16).
    pub(crate) fn inner_product(&self, other: &Self) -> Poly {
        let mut acc = Poly::default();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            a.basemul_acc(b, &mut acc);
        }
        acc.reduce();
        acc
    }
}
