//! Integer and text conversions at the field boundary.

use crate::error::{Poseidon2Error, Result};
use ark_bn254::Fr as ArkFr;
use ark_ff::{BigInteger, PrimeField};
use ark_std::string::ToString;
use num_bigint::BigUint;
use num_traits::Num;

/// BigUint -> Fr by LE bytes (auto-reduced mod p)
pub(crate) fn biguint_to_ark_mod(x: &BigUint) -> ArkFr {
    ArkFr::from_le_bytes_mod_order(&x.to_bytes_le())
}

/// Fr -> canonical BigUint (the minimal non-negative residue)
pub(crate) fn ark_to_biguint(f: &ArkFr) -> BigUint {
    BigUint::from_bytes_le(&f.into_bigint().to_bytes_le())
}

/// Fr to 32-byte big-endian
pub(crate) fn ark_to_be_bytes(f: &ArkFr) -> [u8; 32] {
    let mut out = [0u8; 32];
    let be = f.into_bigint().to_bytes_be();
    out[32 - be.len()..].copy_from_slice(&be);
    out
}

/// Parse a base-10 string of ASCII digits.
///
/// Signs, whitespace and digit separators are rejected rather than
/// interpreted, so there is a single accepted spelling per integer.
pub(crate) fn parse_decimal(s: &str) -> Result<BigUint> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Poseidon2Error::InvalidFieldElement(s.to_string()));
    }
    BigUint::from_str_radix(s, 10).map_err(|_| Poseidon2Error::InvalidFieldElement(s.to_string()))
}

/// Parse a hex string, with or without `0x`. Odd digit counts are allowed.
pub(crate) fn parse_hex(s: &str) -> Result<BigUint> {
    let raw = s.strip_prefix("0x").unwrap_or(s);
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Poseidon2Error::InvalidFieldElement(s.to_string()));
    }
    BigUint::from_str_radix(raw, 16).map_err(|_| Poseidon2Error::InvalidFieldElement(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    const P: &str =
        "21888242871839275222246405745257275088548364400416034343698204186575808495617";

    #[test]
    fn modulus_reduces_to_zero() {
        let p = parse_decimal(P).unwrap();
        assert!(biguint_to_ark_mod(&p) == ArkFr::from(0u64));
        let p_plus_one = p + BigUint::one();
        assert_eq!(ark_to_biguint(&biguint_to_ark_mod(&p_plus_one)), BigUint::one());
    }

    #[test]
    fn be_bytes_are_left_padded() {
        let bytes = ark_to_be_bytes(&ArkFr::from(0x0102u64));
        assert!(bytes[..30].iter().all(|b| *b == 0));
        assert_eq!(&bytes[30..], &[0x01, 0x02]);
    }

    #[test]
    fn decimal_parser_is_strict() {
        assert!(parse_decimal("0").unwrap().is_zero());
        assert_eq!(parse_decimal("007").unwrap(), BigUint::from(7u8));
        for bad in ["", "-1", "+1", " 1", "1 ", "1_0", "12a", "0x10"] {
            assert_eq!(
                parse_decimal(bad),
                Err(Poseidon2Error::InvalidFieldElement(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn hex_parser_accepts_prefix_and_odd_length() {
        assert_eq!(parse_hex("0x1").unwrap(), BigUint::one());
        assert_eq!(parse_hex("abc").unwrap(), BigUint::from(0xabcu32));
        assert!(parse_hex("0x").is_err());
        assert!(parse_hex("0xg1").is_err());
    }
}
