//! Number-theoretic transform generator macros.
//!
//! The forward transform is a Cooley-Tukey (decimation-in-time)
//! network and the inverse a Gentleman-Sande (decimation-in-frequency)
//! network. Both walk a bit-reversed zeta table in Montgomery form, so
//! the only arithmetic they need is a Montgomery multiplication and,
//! for the inverse, a Barrett reduction on the butterfly sum.

/// Generate a forward NTT.
///
/// # Parameters
/// - `$name`: Function name (e.g., `ntt_scalar`)
/// - `$coeff`: Coefficient type
/// - `$n`: Polynomial degree
/// - `$len_min`: Smallest butterfly distance; 2 leaves degree-one
///   residues as in Kyber's incomplete transform
/// - `$zetas`: Zeta table, read from index 1 upwards
/// - `$mont_mul`: Montgomery multiplication
///
/// Output coefficients are not reduced: inputs bounded by `q` in
/// absolute value come out bounded by `8q` for a 7-layer transform.
#[macro_export]
macro_rules! define_ntt_forward {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        n: $n:expr,
        len_min: $len_min:expr,
        zetas: $zetas:expr,
        montgomery_mul: $mont_mul:ident
    ) => {
        /// Forward NTT: Cooley-Tukey butterfly network.
        pub(crate) fn $name(coeffs: &mut [$coeff; $n]) {
            let mut k: usize = 1;
            let mut len: usize = $n / 2;

            while len >= $len_min {
                for block in coeffs.chunks_exact_mut(2 * len) {
                    let zeta = $zetas[k];
                    k += 1;

                    let (lo, hi) = block.split_at_mut(len);
                    for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                        let t = $mont_mul(zeta, *b);
                        *b = a.wrapping_sub(t);
                        *a = a.wrapping_add(t);
                    }
                }
                len >>= 1;
            }
        }
    };
}

/// Generate an inverse NTT.
///
/// # Parameters
/// - `$name`: Function name
/// - `$coeff`: Coefficient type
/// - `$n`: Polynomial degree
/// - `$k_start`: Index of the first zeta used (the last one in the table
///   that the forward transform touched)
/// - `$len_start`: Smallest butterfly distance (matches `$len_min`)
/// - `$zetas`: Zeta table, read downwards from `$k_start`
/// - `$mont_mul`: Montgomery multiplication
/// - `$reduce`: Reduction applied to each butterfly sum
/// - `$scale`: Final Montgomery multiplier
///
/// With `$scale = R^2 / 2^layers mod q` the result equals the exact
/// inverse transform multiplied by `R`, which cancels the `R^(-1)` left
/// behind by a preceding Montgomery base multiplication.
#[macro_export]
macro_rules! define_ntt_inverse {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        n: $n:expr,
        k_start: $k_start:expr,
        len_start: $len_start:expr,
        zetas: $zetas:expr,
        montgomery_mul: $mont_mul:ident,
        reduce: $reduce:ident,
        scale: $scale:expr
    ) => {
        /// Inverse NTT: Gentleman-Sande butterfly network.
        pub(crate) fn $name(coeffs: &mut [$coeff; $n]) {
            let mut k: usize = $k_start;
            let mut len: usize = $len_start;

            while len <= $n / 2 {
                for block in coeffs.chunks_exact_mut(2 * len) {
                    let zeta = $zetas[k];
                    k -= 1;

                    let (lo, hi) = block.split_at_mut(len);
                    for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                        let t = *a;
                        *a = $reduce(t.wrapping_add(*b));
                        *b = $mont_mul(zeta, b.wrapping_sub(t));
                    }
                }
                len <<= 1;
            }

            for c in coeffs.iter_mut() {
                *c = $mont_mul(*c, $scale);
            }
        }
    };
}
