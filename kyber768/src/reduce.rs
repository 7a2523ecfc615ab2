//! Modular arithmetic for q = 3329.
//!
//! Barrett and Montgomery reductions are generated from the shared
//! macros in `kyber_core`; everything here is branch-free.

use crate::params::Q;
use kyber_core::{
    define_barrett_reduce, define_caddq, define_csubq, define_freeze, define_montgomery_mul,
    define_montgomery_reduce,
};

const QI: i16 = Q as i16;

/// q^(-1) mod 2^16, as a signed value.
pub const QINV: i32 = -3327;

/// 2^32 mod q, used to move a value into Montgomery form.
pub const MONT_R2: i32 = 1353;

/// round(2^26 / q).
pub const BARRETT_MUL: i32 = 20159;

/// 2^32 / 128 mod q: final inverse-NTT factor, leaves outputs times 2^16.
pub const INV_NTT_SCALE: i16 = 1441;

define_barrett_reduce! {
    name: barrett_reduce,
    coeff: i16,
    wide: i32,
    q: QI,
    barrett_mul: BARRETT_MUL,
    shift: 26
}

define_barrett_reduce! {
    name: barrett_reduce_wide,
    coeff: i32,
    wide: i32,
    q: QI,
    barrett_mul: BARRETT_MUL,
    shift: 26
}

define_montgomery_reduce! {
    name: montgomery_reduce,
    coeff: i16,
    wide: i32,
    q: QI,
    qinv: QINV,
    shift: 16
}

define_montgomery_mul! {
    name: montgomery_mul,
    coeff: i16,
    wide: i32,
    montgomery_reduce: montgomery_reduce
}

define_caddq! {
    name: caddq,
    coeff: i16,
    q: QI
}

define_csubq! {
    name: csubq,
    coeff: i16,
    q: QI
}

define_freeze! {
    name: freeze,
    coeff: i16,
    q: QI,
    reduce_centered: barrett_reduce
}

/// Move `a` into Montgomery form (multiply by 2^16).
#[inline]
pub const fn to_mont(a: i16) -> i16 {
    montgomery_reduce((a as i32) * MONT_R2)
}

/// Canonical residue of an arbitrary `u16`.
#[inline]
pub const fn reduce_u16(a: u16) -> i16 {
    caddq(barrett_reduce_wide(a as i32) as i16)
}
