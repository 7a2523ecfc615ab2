//! Modular arithmetic generator macros.
//!
//! Each macro expands to a `const fn` specialised for one modulus and
//! coefficient width. None of the generated functions branch on their
//! input, so they are safe to apply to secret coefficients.

/// Generate a rounding Barrett reduction.
///
/// The generated function maps `a` to a representative of `a mod q`
/// in the centered range `[-(q-1)/2, (q-1)/2]`.
///
/// # Parameters
/// - `$name`: Function name (e.g., `barrett_reduce`)
/// - `$coeff`: Coefficient type
/// - `$wide`: Type used for the intermediate product
/// - `$q`: The prime modulus
/// - `$barrett_mul`: `round(2^shift / q)`
/// - `$shift`: Bit shift amount
#[macro_export]
macro_rules! define_barrett_reduce {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        wide: $wide:ty,
        q: $q:expr,
        barrett_mul: $barrett_mul:expr,
        shift: $shift:expr
    ) => {
        /// Barrett reduction to the centered range around zero.
        #[inline]
        pub const fn $name(a: $coeff) -> $coeff {
            let a = a as $wide;
            let half = (1 as $wide) << ($shift - 1);
            let t = (a * $barrett_mul + half) >> $shift;
            (a - t * ($q as $wide)) as $coeff
        }
    };
}

/// Generate a Montgomery reduction.
///
/// Computes `a * R^(-1) mod q` for `R = 2^shift`, with the output in
/// `(-q, q)` whenever `|a| < q * 2^(shift-1)`.
///
/// # Parameters
/// - `$name`: Function name
/// - `$coeff`: Coefficient type
/// - `$wide`: Type of the input product
/// - `$q`: The prime modulus
/// - `$qinv`: `q^(-1) mod R`, as a signed value
/// - `$shift`: `log2(R)`
#[macro_export]
macro_rules! define_montgomery_reduce {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        wide: $wide:ty,
        q: $q:expr,
        qinv: $qinv:expr,
        shift: $shift:expr
    ) => {
        /// Montgomery reduction: `a * R^(-1) mod q`.
        #[inline]
        pub const fn $name(a: $wide) -> $coeff {
            let t = (a as $coeff).wrapping_mul($qinv as $coeff);
            ((a - (t as $wide) * ($q as $wide)) >> $shift) as $coeff
        }
    };
}

/// Generate a Montgomery multiplication on top of a Montgomery reduction.
#[macro_export]
macro_rules! define_montgomery_mul {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        wide: $wide:ty,
        montgomery_reduce: $mont_reduce:ident
    ) => {
        /// Montgomery multiplication: `a * b * R^(-1) mod q`.
        #[inline]
        pub const fn $name(a: $coeff, b: $coeff) -> $coeff {
            $mont_reduce((a as $wide) * (b as $wide))
        }
    };
}

/// Generate a conditional add of q using the sign bit as a mask.
#[macro_export]
macro_rules! define_caddq {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        q: $q:expr
    ) => {
        /// Add q if `a` is negative.
        #[inline]
        pub const fn $name(a: $coeff) -> $coeff {
            let mask = a >> (<$coeff>::BITS - 1);
            a + ($q & mask)
        }
    };
}

/// Generate a conditional subtract of q using the sign bit as a mask.
#[macro_export]
macro_rules! define_csubq {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        q: $q:expr
    ) => {
        /// Subtract q if `a >= q`. Valid for `a` in `[0, 2q)`.
        #[inline]
        pub const fn $name(a: $coeff) -> $coeff {
            let r = a - $q;
            r + ($q & (r >> (<$coeff>::BITS - 1)))
        }
    };
}

/// Generate a freeze function mapping any coefficient to `[0, q-1]`.
///
/// `$reduce_centered` must return a value in `(-q, q)`; the sign mask
/// then lifts negative representatives into the canonical range.
#[macro_export]
macro_rules! define_freeze {
    (
        name: $name:ident,
        coeff: $coeff:ty,
        q: $q:expr,
        reduce_centered: $reduce:ident
    ) => {
        /// Freeze: reduce to the canonical range `[0, q-1]`.
        #[inline]
        pub const fn $name(a: $coeff) -> $coeff {
            let r = $reduce(a);
            r + ($q & (r >> (<$coeff>::BITS - 1)))
        }
    };
}
