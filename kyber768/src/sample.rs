//! Deterministic sampling of ring elements.
//!
//! Both samplers are pure functions of a 32-byte seed and one or two
//! index bytes:
//! - [`sample_uniform`] rejection-samples coefficients uniform in `[0, q-1]`
//!   from SHAKE128 and is used for the public matrix (NTT domain).
//! - [`sample_noise`] draws centered-binomial noise with `eta = 2` from
//!   SHAKE256 and is used for secrets and errors.

use crate::hash::{prf, Xof, XOF_BLOCK_BYTES};
use crate::params::{ETA1, N, Q, SYMBYTES};
use crate::poly::Poly;
use crate::polyvec::PolyVec;
use crate::reduce::caddq;
use zeroize::Zeroize;

/// PRF output consumed by one noise polynomial.
pub const NOISE_BYTES: usize = N * ETA1 / 4;

/// 1 if `d < q`, 0 otherwise, without a branch.
#[inline]
fn accept(d: u16) -> usize {
    (((d as i32) - (Q as i32)) >> 31) as usize & 1
}

/// Feed one XOF block through the rejection sampler.
///
/// Every candidate is written to `slots[ctr]` and the counter only
/// advances on acceptance, so control flow does not depend on which
/// candidates were rejected. `slots[N]` absorbs writes past the end.
fn rej_uniform(slots: &mut [i16; N + 1], mut ctr: usize, buf: &[u8]) -> usize {
    for chunk in buf.chunks_exact(3) {
        let d1 = u16::from(chunk[0]) | (u16::from(chunk[1] & 0x0f) << 8);
        let d2 = u16::from(chunk[1] >> 4) | (u16::from(chunk[2]) << 4);

        for d in [d1, d2] {
            slots[ctr] = d as i16;
            ctr = (ctr + accept(d)).min(N);
        }
    }
    ctr
}

/// Sample a uniform ring element from `XOF(rho || x || y)`.
///
/// The result is interpreted as an NTT-domain value.
pub fn sample_uniform(rho: &[u8; SYMBYTES], x: u8, y: u8) -> Poly {
    let mut xof = Xof::new(rho, x, y);
    let mut block = [0u8; XOF_BLOCK_BYTES];
    let mut slots = [0i16; N + 1];
    let mut ctr = 0;

    while ctr < N {
        xof.squeeze_block(&mut block);
        ctr = rej_uniform(&mut slots, ctr, &block);
    }

    let mut poly = Poly::default();
    poly.coeffs.copy_from_slice(&slots[..N]);
    poly
}

/// Centered binomial distribution with `eta = 2`.
///
/// Each coefficient is `popcount(a) - popcount(b)` over two 2-bit
/// groups, computed with masks only.
pub fn cbd2(bytes: &[u8; NOISE_BYTES]) -> Poly {
    let mut poly = Poly::default();
    for (i, word) in bytes.chunks_exact(4).enumerate() {
        let t = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
        let d = (t & 0x5555_5555) + ((t >> 1) & 0x5555_5555);

        for j in 0..8 {
            let a = ((d >> (4 * j)) & 0x3) as i16;
            let b = ((d >> (4 * j + 2)) & 0x3) as i16;
            poly.coeffs[8 * i + j] = caddq(a - b);
        }
    }
    poly
}

/// Sample a noise polynomial from `PRF(seed, nonce)`.
pub fn sample_noise(seed: &[u8; SYMBYTES], nonce: u8) -> Poly {
    let mut buf = [0u8; NOISE_BYTES];
    prf(seed, nonce, &mut buf);
    let poly = cbd2(&buf);
    buf.zeroize();
    poly
}

/// Sample a noise vector with nonces `first_nonce..first_nonce + K`.
pub fn sample_noise_vec(seed: &[u8; SYMBYTES], first_nonce: u8) -> PolyVec {
    let mut v = PolyVec::default();
    for (nonce, p) in (first_nonce..).zip(v.polys.iter_mut()) {
        *p = sample_noise(seed, nonce);
    }
    v
}
