//! Lossless byte encodings.
//!
//! All packings are little-endian bit streams: coefficient `i` occupies
//! bits `d*i .. d*(i+1)` of the output. This covers the 12-bit key
//! encoding as well as the 1-, 4- and 10-bit compressed forms.

use crate::compress::{compress_coeff, decompress_coeff};
use crate::params::{N, POLY_BYTES, Q, SYMBYTES};
use crate::poly::Poly;
use crate::reduce::{freeze, reduce_u16};
use kyber_core::{Error, Result};

/// Pack `N` values of `d` bits each into `out`.
///
/// Values are masked to `d` bits.
///
/// # Errors
/// - `Error::InvalidEncoding` if `d` is not in `1..=12`.
/// - `Error::InvalidLength` if `out` is not exactly `N * d / 8` bytes.
pub fn byte_encode(values: &[u16; N], d: u32, out: &mut [u8]) -> Result<()> {
    check_width(d, out.len())?;
    pack(values, d, out);
    Ok(())
}

/// Unpack `N` values of `d` bits each from `bytes`.
///
/// # Errors
/// - `Error::InvalidEncoding` if `d` is not in `1..=12`.
/// - `Error::InvalidLength` if `bytes` is not exactly `N * d / 8` bytes.
pub fn byte_decode(bytes: &[u8], d: u32) -> Result<[u16; N]> {
    check_width(d, bytes.len())?;
    Ok(unpack(bytes, d))
}

fn check_width(d: u32, len: usize) -> Result<()> {
    if !(1..=12).contains(&d) {
        return Err(Error::InvalidEncoding);
    }
    let expected = N * d as usize / 8;
    if len != expected {
        return Err(Error::InvalidLength {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Bit packing for buffers whose size is fixed by the caller's types.
/// The loop shape depends on `d` only.
pub(crate) fn pack(values: &[u16; N], d: u32, out: &mut [u8]) {
    debug_assert!((1..=12).contains(&d));
    debug_assert_eq!(out.len(), N * d as usize / 8);

    let mask = (1u32 << d) - 1;
    let mut acc = 0u32;
    let mut bits = 0u32;
    let mut out = out.iter_mut();

    for &v in values {
        acc |= (u32::from(v) & mask) << bits;
        bits += d;
        while bits >= 8 {
            if let Some(byte) = out.next() {
                *byte = acc as u8;
            }
            acc >>= 8;
            bits -= 8;
        }
    }
}

pub(crate) fn unpack(bytes: &[u8], d: u32) -> [u16; N] {
    debug_assert!((1..=12).contains(&d));
    debug_assert_eq!(bytes.len(), N * d as usize / 8);

    let mask = (1u32 << d) - 1;
    let mut values = [0u16; N];
    let mut acc = 0u32;
    let mut bits = 0u32;
    let mut bytes = bytes.iter();

    for v in values.iter_mut() {
        while bits < d {
            let byte = bytes.next().copied().unwrap_or(0);
            acc |= u32::from(byte) << bits;
            bits += 8;
        }
        *v = (acc & mask) as u16;
        acc >>= d;
        bits -= d;
    }
    values
}

/// Serialize a ring element at 12 bits per canonical coefficient.
pub fn poly_to_bytes(p: &Poly) -> [u8; POLY_BYTES] {
    let values: [u16; N] = core::array::from_fn(|i| freeze(p.coeffs[i]) as u16);
    let mut out = [0u8; POLY_BYTES];
    pack(&values, 12, &mut out);
    out
}

/// Deserialize a ring element.
///
/// # Errors
/// `Error::InvalidEncoding` if `bytes` is not 384 bytes long or holds a
/// 12-bit value `>= q`.
pub fn poly_from_bytes(bytes: &[u8]) -> Result<Poly> {
    if bytes.len() != POLY_BYTES {
        return Err(Error::InvalidEncoding);
    }
    let values = unpack(bytes, 12);

    // Accumulate the range check over every value before deciding.
    let mut out_of_range = 0u16;
    for &v in &values {
        out_of_range |= (Q - 1).wrapping_sub(v) >> 15;
    }
    if out_of_range != 0 {
        return Err(Error::InvalidEncoding);
    }

    let mut p = Poly::default();
    for (c, &v) in p.coeffs.iter_mut().zip(values.iter()) {
        *c = v as i16;
    }
    Ok(p)
}

/// Deserialize a ring element from trusted bytes, reducing mod q.
pub(crate) fn poly_from_bytes_reduced(bytes: &[u8]) -> Poly {
    let values = unpack(bytes, 12);
    let mut p = Poly::default();
    for (c, &v) in p.coeffs.iter_mut().zip(values.iter()) {
        *c = reduce_u16(v);
    }
    p
}

/// Map a 32-byte message to a ring element: bit `i` becomes
/// coefficient `i`, scaled to `0` or `round(q/2)`.
pub fn msg_to_poly(msg: &[u8; SYMBYTES]) -> Poly {
    let bits = unpack(msg, 1);
    let mut p = Poly::default();
    for (c, &b) in p.coeffs.iter_mut().zip(bits.iter()) {
        *c = decompress_coeff(b, 1) as i16;
    }
    p
}

/// Recover a message: each coefficient is rounded to the nearer of
/// `0` and `round(q/2)`.
pub fn poly_to_msg(p: &Poly) -> [u8; SYMBYTES] {
    let bits: [u16; N] = core::array::from_fn(|i| compress_coeff(freeze(p.coeffs[i]) as u16, 1));
    let mut msg = [0u8; SYMBYTES];
    pack(&bits, 1, &mut msg);
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_codec_roundtrip_all_widths() {
        for d in [1u32, 4, 5, 10, 11, 12] {
            let values: [u16; N] = core::array::from_fn(|i| ((i * 40503) as u16) & ((1 << d) - 1));
            let mut bytes = [0u8; N * 12 / 8];
            let len = N * d as usize / 8;
            byte_encode(&values, d, &mut bytes[..len]).unwrap();
            assert_eq!(byte_decode(&bytes[..len], d).unwrap(), values, "d = {d}");
        }
    }

    #[test]
    fn test_byte_encode_layout() {
        // d = 10: four values in five bytes, low bits first
        let mut values = [0u16; N];
        values[0] = 0x3ff;
        values[1] = 0x001;
        let mut out = [0u8; 320];
        byte_encode(&values, 10, &mut out).unwrap();
        assert_eq!(&out[..3], &[0xff, 0x07, 0x00]);

        // d = 12
        let mut values = [0u16; N];
        values[0] = 0xabc;
        values[1] = 0x123;
        let mut out = [0u8; POLY_BYTES];
        byte_encode(&values, 12, &mut out).unwrap();
        assert_eq!(&out[..3], &[0xbc, 0x3a, 0x12]);
    }

    #[test]
    fn test_byte_codec_rejects_wrong_length() {
        let values = [1u16; N];
        let mut short = [0u8; 10];
        assert_eq!(
            byte_encode(&values, 12, &mut short).unwrap_err(),
            Error::InvalidLength {
                expected: POLY_BYTES,
                actual: 10
            }
        );
        assert_eq!(short, [0u8; 10]);

        let mut long = [0u8; POLY_BYTES + 1];
        assert!(matches!(
            byte_encode(&values, 12, &mut long),
            Err(Error::InvalidLength { .. })
        ));

        assert_eq!(
            byte_decode(&[0xff; 10], 12).unwrap_err(),
            Error::InvalidLength {
                expected: POLY_BYTES,
                actual: 10
            }
        );
        assert_eq!(
            byte_decode(&[0u8; 321], 10).unwrap_err(),
            Error::InvalidLength {
                expected: 320,
                actual: 321
            }
        );
    }

    #[test]
    fn test_byte_codec_rejects_bad_width() {
        let mut out = [0u8; 0];
        assert_eq!(byte_encode(&[0; N], 0, &mut out).unwrap_err(), Error::InvalidEncoding);
        assert_eq!(byte_decode(&[0u8; 416], 13).unwrap_err(), Error::InvalidEncoding);
    }

    #[test]
    fn test_poly_bytes_roundtrip() {
        let coeffs: [u16; N] = core::array::from_fn(|i| (i as u16 * 13) % Q);
        let p = Poly::from_coeffs(&coeffs).unwrap();
        let bytes = poly_to_bytes(&p);
        let back = poly_from_bytes(&bytes).unwrap();
        assert_eq!(back.coeffs(), coeffs);
    }

    #[test]
    fn test_poly_from_bytes_wrong_length() {
        assert_eq!(poly_from_bytes(&[0u8; 383]).unwrap_err(), Error::InvalidEncoding);
        assert_eq!(poly_from_bytes(&[0u8; 385]).unwrap_err(), Error::InvalidEncoding);
    }

    #[test]
    fn test_poly_from_bytes_boundary() {
        let mut values = [0u16; N];
        values[255] = Q - 1;
        let mut bytes = [0u8; POLY_BYTES];
        byte_encode(&values, 12, &mut bytes).unwrap();
        assert!(poly_from_bytes(&bytes).is_ok());

        values[255] = Q;
        byte_encode(&values, 12, &mut bytes).unwrap();
        assert_eq!(poly_from_bytes(&bytes).unwrap_err(), Error::InvalidEncoding);
        assert_eq!(poly_from_bytes_reduced(&bytes).coeffs()[255], 0);
    }

    #[test]
    fn test_poly_to_bytes_freezes() {
        let mut p = Poly::default();
        p.coeffs[0] = -1;
        p.coeffs[1] = Q as i16;
        let back = poly_from_bytes(&poly_to_bytes(&p)).unwrap();
        assert_eq!(back.coeffs()[0], Q - 1);
        assert_eq!(back.coeffs()[1], 0);
    }

    #[test]
    fn test_msg_roundtrip() {
        let msg: [u8; 32] = core::array::from_fn(|i| (i as u8).wrapping_mul(37) ^ 0x5a);
        assert_eq!(poly_to_msg(&msg_to_poly(&msg)), msg);
    }

    #[test]
    fn test_msg_decoding_thresholds() {
        let mut p = Poly::default();
        p.coeffs[0] = 832; // rounds to 0
        p.coeffs[1] = 833; // rounds to 1
        p.coeffs[2] = 2496; // rounds to 1
        p.coeffs[3] = 2497; // rounds to 0
        p.coeffs[4] = -800; // 2529, rounds to 0
        let msg = poly_to_msg(&p);
        assert_eq!(msg[0], 0b0000_0110);
    }
}
