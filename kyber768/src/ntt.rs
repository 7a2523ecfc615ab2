//! Number-theoretic transform over Z_q[X]/(X^256 + 1).
//!
//! Kyber's transform is incomplete: seven layers leave 128 residues of
//! degree one, modulo `X^2 - zeta_i`. Products in the NTT domain are
//! therefore pairwise degree-one multiplications ([`basemul`]).

use crate::params::N;
use crate::reduce::{barrett_reduce, montgomery_mul, INV_NTT_SCALE};
use kyber_core::{define_ntt_forward, define_ntt_inverse};

/// Powers of the primitive 256th root of unity 17, in bit-reversed
/// order and Montgomery form: `ZETAS[i] = 17^brv7(i) * 2^16 mod q`.
#[rustfmt::skip]
pub const ZETAS: [i16; 128] = [
    2285, 2571, 2970, 1812, 1493, 1422, 287, 202, 3158, 622, 1577, 182, 962, 2127, 1855, 1468,
    573, 2004, 264, 383, 2500, 1458, 1727, 3199, 2648, 1017, 732, 608, 1787, 411, 3124, 1758,
    1223, 652, 2777, 1015, 2036, 1491, 3047, 1785, 516, 3321, 3009, 2663, 1711, 2167, 126, 1469,
    2476, 3239, 3058, 830, 107, 1908, 3082, 2378, 2931, 961, 1821, 2604, 448, 2264, 677, 2054,
    2226, 430, 555, 843, 2078, 871, 1550, 105, 422, 587, 177, 3094, 3038, 2869, 1574, 1653,
    3083, 778, 1159, 3182, 2552, 1483, 2727, 1119, 1739, 644, 2457, 349, 418, 329, 3173, 3254,
    817, 1097, 603, 610, 1322, 2044, 1864, 384, 2114, 3193, 1218, 1994, 2455, 220, 2142, 1670,
    2144, 1799, 2051, 794, 1819, 2475, 2459, 478, 3221, 3021, 996, 991, 958, 1869, 1522, 1628,
];

define_ntt_forward! {
    name: ntt,
    coeff: i16,
    n: N,
    len_min: 2,
    zetas: ZETAS,
    montgomery_mul: montgomery_mul
}

define_ntt_inverse! {
    name: inv_ntt,
    coeff: i16,
    n: N,
    k_start: 127,
    len_start: 2,
    zetas: ZETAS,
    montgomery_mul: montgomery_mul,
    reduce: barrett_reduce,
    scale: INV_NTT_SCALE
}

/// Multiply `(a0 + a1 X)(b0 + b1 X) mod (X^2 - zeta)`.
///
/// The result carries an extra factor `2^(-16)` from the Montgomery
/// multiplications.
#[inline]
pub fn basemul(a: [i16; 2], b: [i16; 2], zeta: i16) -> [i16; 2] {
    let r0 = montgomery_mul(montgomery_mul(a[1], b[1]), zeta) + montgomery_mul(a[0], b[0]);
    let r1 = montgomery_mul(a[0], b[1]) + montgomery_mul(a[1], b[0]);
    [r0, r1]
}
