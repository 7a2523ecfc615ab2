//! Ring elements of R_q = Z_q\[X\]/(X^256 + 1).
//!
//! [`Poly`] is the ring element type. Every value handed out through the
//! public API has its coefficients in the canonical range `[0, q-1]`;
//! the crate-internal helpers below work on lazily reduced values while
//! a computation is in flight and freeze the result at the end.
//!
//! No function in this module branches on a coefficient value.

use crate::ntt::{self, basemul, ZETAS};
use crate::params::N;
use crate::reduce::{barrett_reduce, caddq, csubq, freeze, reduce_u16, to_mont};
use core::fmt;
use kyber_core::{Error, Result};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// A polynomial of degree below 256 with coefficients modulo 3329.
///
/// Depending on where it sits in a computation a `Poly` holds either
/// ordinary coefficients or their NTT-domain representation; the type
/// does not track which.
#[derive(Clone, Zeroize)]
pub struct Poly {
    pub(crate) coeffs: [i16; N],
}

impl Default for Poly {
    fn default() -> Self {
        Self { coeffs: [0i16; N] }
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Poly").finish_non_exhaustive()
    }
}

impl Poly {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build a ring element from exactly 256 coefficients.
    ///
    /// Coefficients are reduced modulo q, so any `u16` is accepted.
    ///
    /// # Errors
    /// `Error::InvalidLength` if `coeffs` does not hold 256 values.
    pub fn from_coeffs(coeffs: &[u16]) -> Result<Self> {
        if coeffs.len() != N {
            return Err(Error::InvalidLength {
                expected: N,
                actual: coeffs.len(),
            });
        }
        let mut r = Self::default();
        for (dst, &src) in r.coeffs.iter_mut().zip(coeffs) {
            *dst = reduce_u16(src);
        }
        Ok(r)
    }

    /// Canonical coefficients in `[0, q-1]`.
    pub fn coeffs(&self) -> [u16; N] {
        let mut out = [0u16; N];
        for (dst, &src) in out.iter_mut().zip(self.coeffs.iter()) {
            *dst = freeze(src) as u16;
        }
        out
    }

    /// Coefficient-wise sum modulo q.
    pub fn add(&self, other: &Self) -> Self {
        let mut r = self.clone();
        for (a, &b) in r.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = csubq(*a + b);
        }
        r
    }

    /// Coefficient-wise difference modulo q.
    pub fn sub(&self, other: &Self) -> Self {
        let mut r = self.clone();
        for (a, &b) in r.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a = caddq(*a - b);
        }
        r
    }

    /// Product in R_q, computed through the NTT.
    pub fn mul(&self, other: &Self) -> Self {
        let mut a = self.clone();
        a.ntt();
        let mut b = other.clone();
        b.ntt();

        let mut r = a.basemul(&b);
        r.reduce();
        r.inv_ntt();
        r.freeze();

        a.zeroize();
        b.zeroize();
        r
    }
}

// Crate-internal operations. These do not keep coefficients canonical;
// callers bound the growth and finish with `reduce` or `freeze`.
impl Poly {
    /// Forward NTT in place, followed by a Barrett reduction.
    pub(crate) fn ntt(&mut self) {
        ntt::ntt(&mut self.coeffs);
        self.reduce();
    }

    /// Inverse NTT in place. A Montgomery factor 2^(-16) present in the
    /// input is cancelled.
    pub(crate) fn inv_ntt(&mut self) {
        ntt::inv_ntt(&mut self.coeffs);
    }

    /// Pointwise product of two NTT-domain polynomials, times 2^(-16).
    pub(crate) fn basemul(&self, other: &Self) -> Self {
        let mut r = Self::default();
        self.basemul_into(other, &mut r);
        r
    }

    /// Accumulate the pointwise product of `self` and `other` into `acc`.
    pub(crate) fn basemul_acc(&self, other: &Self, acc: &mut Self) {
        let mut t = Self::default();
        self.basemul_into(other, &mut t);
        acc.add_assign(&t);
    }

    fn basemul_into(&self, other: &Self, r: &mut Self) {
        for i in 0..N / 4 {
            let zeta = ZETAS[64 + i];
            let j = 4 * i;

            let lo = basemul(
                [self.coeffs[j], self.coeffs[j + 1]],
                [other.coeffs[j], other.coeffs[j + 1]],
                zeta,
            );
            let hi = basemul(
                [self.coeffs[j + 2], self.coeffs[j + 3]],
                [other.coeffs[j + 2], other.coeffs[j + 3]],
                -zeta,
            );
            r.coeffs[j..j + 2].copy_from_slice(&lo);
            r.coeffs[j + 2..j + 4].copy_from_slice(&hi);
        }
    }

    pub(crate) fn add_assign(&mut self, other: &Self) {
        for (a, &b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a += b;
        }
    }

    pub(crate) fn sub_assign(&mut self, other: &Self) {
        for (a, &b) in self.coeffs.iter_mut().zip(other.coeffs.iter()) {
            *a -= b;
        }
    }

    /// Barrett-reduce every coefficient into `[-(q-1)/2, (q-1)/2]`.
    pub(crate) fn reduce(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = barrett_reduce(*c);
        }
    }

    /// Reduce every coefficient into `[0, q-1]`.
    pub(crate) fn freeze(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = freeze(*c);
        }
    }

    /// Multiply every coefficient by 2^16.
    pub(crate) fn to_mont(&mut self) {
        for c in self.coeffs.iter_mut() {
            *c = to_mont(*c);
        }
    }
}

impl ConstantTimeEq for Poly {
    fn ct_eq(&self, other: &Self) -> Choice {
        let mut acc = 0u16;
        for (&a, &b) in self.coeffs.iter().zip(other.coeffs.iter()) {
            acc |= (freeze(a) ^ freeze(b)) as u16;
        }
        acc.ct_eq(&0)
    }
}
