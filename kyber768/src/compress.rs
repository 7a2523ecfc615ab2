//! Lossy coefficient compression.
//!
//! `compress(x, d) = round(2^d * x / q) mod 2^d` and
//! `decompress(y, d) = round(q * y / 2^d)`. The division by q is done
//! with a fixed-point reciprocal so that no secret value reaches a
//! hardware divider.

use crate::encode::{pack, unpack};
use crate::params::{DU, DV, K, N, POLYVEC_COMPRESSED_BYTES, POLY_COMPRESSED_BYTES, Q};
use crate::poly::Poly;
use crate::polyvec::PolyVec;
use crate::reduce::freeze;
use kyber_core::{Error, Result};

/// ceil(2^32 / q). Exact for every `(x << d) + q/2` with `x < q`, `d <= 11`.
const RECIP_Q: u64 = 1_290_168;

/// Bytes of one compressed `u` element.
const POLY_DU_BYTES: usize = N * DU as usize / 8;

/// Compress a coefficient to `d` bits.
///
/// # Errors
/// `Error::InvalidEncoding` if `d` is not in `1..=11` or `x >= q`.
pub fn compress(x: u16, d: u32) -> Result<u16> {
    if !(1..=11).contains(&d) || x >= Q {
        return Err(Error::InvalidEncoding);
    }
    Ok(compress_coeff(x, d))
}

/// Decompress a `d`-bit value back to a canonical coefficient.
///
/// # Errors
/// `Error::InvalidEncoding` if `d` is not in `1..=11` or `y >= 2^d`.
pub fn decompress(y: u16, d: u32) -> Result<u16> {
    if !(1..=11).contains(&d) || y >> d != 0 {
        return Err(Error::InvalidEncoding);
    }
    Ok(decompress_coeff(y, d))
}

/// Largest `|decompress(compress(x, d)) - x|` (mod q) over all `x`:
/// `round(q / 2^(d+1))`. Outside `1..=11` only the trivial bound `q/2`
/// holds.
pub const fn max_compression_error(d: u32) -> u16 {
    match d {
        1..=11 => ((Q as u32 + (1 << d)) >> (d + 1)) as u16,
        _ => Q / 2,
    }
}

/// Unchecked [`compress`]: `x < q` and `1 <= d <= 11`.
#[inline]
pub(crate) fn compress_coeff(x: u16, d: u32) -> u16 {
    debug_assert!(x < Q && (1..=11).contains(&d));
    let t = (u64::from(x) << d) + u64::from(Q / 2);
    (((t * RECIP_Q) >> 32) as u16) & ((1u16 << d) - 1)
}

/// Unchecked [`decompress`]: `y < 2^d` and `1 <= d <= 11`.
#[inline]
pub(crate) fn decompress_coeff(y: u16, d: u32) -> u16 {
    debug_assert!((1..=11).contains(&d));
    ((u32::from(y) * u32::from(Q) + (1 << (d - 1))) >> d) as u16
}

fn poly_compress_into(p: &Poly, d: u32, out: &mut [u8]) {
    let values: [u16; N] = core::array::from_fn(|i| compress_coeff(freeze(p.coeffs[i]) as u16, d));
    pack(&values, d, out);
}

fn poly_decompress_from(bytes: &[u8], d: u32) -> Poly {
    let values = unpack(bytes, d);
    let mut p = Poly::default();
    for (c, &y) in p.coeffs.iter_mut().zip(values.iter()) {
        *c = decompress_coeff(y, d) as i16;
    }
    p
}

/// Compress the `v` component (`dv = 4` bits per coefficient).
pub fn poly_compress(p: &Poly) -> [u8; POLY_COMPRESSED_BYTES] {
    let mut out = [0u8; POLY_COMPRESSED_BYTES];
    poly_compress_into(p, DV, &mut out);
    out
}

/// Inverse of [`poly_compress`], up to rounding.
pub fn poly_decompress(bytes: &[u8; POLY_COMPRESSED_BYTES]) -> Poly {
    poly_decompress_from(bytes, DV)
}

/// Compress the `u` component (`du = 10` bits per coefficient).
pub fn polyvec_compress(v: &PolyVec) -> [u8; POLYVEC_COMPRESSED_BYTES] {
    let mut out = [0u8; POLYVEC_COMPRESSED_BYTES];
    for (chunk, p) in out.chunks_exact_mut(POLY_DU_BYTES).zip(v.polys.iter()) {
        poly_compress_into(p, DU, chunk);
    }
    out
}

/// Inverse of [`polyvec_compress`], up to rounding.
pub fn polyvec_decompress(bytes: &[u8; POLYVEC_COMPRESSED_BYTES]) -> PolyVec {
    let polys: [Poly; K] =
        core::array::from_fn(|k| poly_decompress_from(&bytes[k * POLY_DU_BYTES..(k + 1) * POLY_DU_BYTES], DU));
    PolyVec::new(polys)
}
