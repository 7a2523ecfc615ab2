//! The public matrix `A` and matrix-vector products.
//!
//! Entry `A[i][j]` is `sample_uniform(rho, j, i)`, i.e. the XOF absorbs the
//! column index first. The transpose is generated directly by swapping
//! the index bytes rather than by transposing a sampled matrix.

use crate::params::{K, SYMBYTES};
use crate::poly::Poly;
use crate::polyvec::PolyVec;
use crate::sample::sample_uniform;
use core::fmt;

/// A `K x K` matrix of NTT-domain ring elements, stored by rows.
#[derive(Clone)]
pub struct Matrix {
    rows: [PolyVec; K],
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix").finish_non_exhaustive()
    }
}

impl Matrix {
    /// Expand `rho` into `A`, or into `A^T` when `transposed` is set.
    pub fn generate(rho: &[u8; SYMBYTES], transposed: bool) -> Self {
        let rows = core::array::from_fn(|i| {
            let polys = core::array::from_fn(|j| {
                let (i, j) = (i as u8, j as u8);
                if transposed {
                    sample_uniform(rho, i, j)
                } else {
                    sample_uniform(rho, j, i)
                }
            });
            PolyVec::new(polys)
        });
        Self { rows }
    }

    /// Entry at row `i`, column `j`.
    pub fn entry(&self, i: usize, j: usize) -> &Poly {
        &self.rows[i].polys[j]
    }

    /// `self * v` for an NTT-domain vector `v`, times 2^(-16).
    ///
    /// Output coefficients are Barrett-reduced but not canonical.
    pub(crate) fn mul_vec(&self, v: &PolyVec) -> PolyVec {
        PolyVec::new(core::array::from_fn(|i| self.rows[i].inner_product(v)))
    }
}
