//! Fuzz target for the byte decoders.
//!
//! Arbitrary bytes must either decode to canonical coefficients that
//! re-encode to the same bytes, or fail with an error. Encapsulation to an
//! arbitrary public key must never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use kyber768::encode::{poly_from_bytes, poly_to_bytes};
use kyber768::kem::encapsulate_derand;
use kyber768::params::{POLYVEC_BYTES, POLY_BYTES, PUBLIC_KEY_SIZE, Q};
use kyber768::PolyVec;

fuzz_target!(|data: &[u8]| {
    if let Ok(p) = poly_from_bytes(data) {
        assert_eq!(data.len(), POLY_BYTES);
        assert!(p.coeffs().iter().all(|&c| c < Q));
        assert_eq!(&poly_to_bytes(&p)[..], data);
    }

    if let Ok(v) = PolyVec::from_bytes(data) {
        assert_eq!(data.len(), POLYVEC_BYTES);
        assert_eq!(&v.to_bytes()[..], data);
    }

    let result = encapsulate_derand(data, &[0u8; 32]);
    if data.len() != PUBLIC_KEY_SIZE {
        assert!(result.is_err());
    } else if result.is_ok() {
        assert!(PolyVec::from_bytes(&data[..POLYVEC_BYTES]).is_ok());
    }
});
