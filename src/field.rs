//! Finite-field wrapper for BN254 Fr, compatible with Arkworks 0.5.
//!
//! Every constructor reduces modulo `p`, so two spellings of the same residue
//! (`"5"` and `p + 5`, say) always compare equal. Output is the canonical
//! minimal residue.

use crate::error::{Poseidon2Error, Result};
use crate::utils::{ark_to_be_bytes, ark_to_biguint, biguint_to_ark_mod, parse_decimal, parse_hex};
use ark_bn254::Fr as ArkFr;
use ark_ff::{Field, One, PrimeField, Zero};
use ark_serialize::CanonicalSerialize;
use ark_std::{fmt, str::FromStr, string::String};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub};
use num_bigint::BigUint;

/// BN254 scalar field modulus, base 10.
pub const MODULUS_DEC: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fr(pub ArkFr);

impl Fr {
    /// Construct from u64.
    pub fn from_u64(x: u64) -> Self {
        Fr(ArkFr::from(x))
    }

    /// Construct from an arbitrary-precision integer, reducing mod p.
    pub fn from_biguint(x: &BigUint) -> Self {
        Fr(biguint_to_ark_mod(x))
    }

    /// Construct from a canonical base-10 string, reducing mod p.
    pub fn from_dec_str(s: &str) -> Result<Self> {
        parse_decimal(s).map(|n| Self::from_biguint(&n))
    }

    /// Construct from hex string (with or without 0x prefix), reducing mod p.
    pub fn from_hex(s: &str) -> Result<Self> {
        parse_hex(s).map(|n| Self::from_biguint(&n))
    }

    /// Construct from a 32-byte big-endian array, reducing mod p.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        Fr(ArkFr::from_be_bytes_mod_order(bytes))
    }

    /// Convert to 32-byte big-endian representation.
    pub fn to_bytes(&self) -> [u8; 32] {
        ark_to_be_bytes(&self.0)
    }

    /// Canonical integer value, always `< p`.
    pub fn to_biguint(&self) -> BigUint {
        ark_to_biguint(&self.0)
    }

    /// Canonical base-10 representation.
    pub fn to_dec_string(&self) -> String {
        self.to_biguint().to_str_radix(10)
    }

    /// `0x` followed by 64 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(66);
        out.push_str("0x");
        out.push_str(&hex::encode(self.to_bytes()));
        out
    }

    /// The field modulus as an integer.
    pub fn modulus() -> BigUint {
        ArkFr::MODULUS.into()
    }

    /// Return zero.
    pub fn zero() -> Self {
        Fr(ArkFr::zero())
    }

    /// Return one.
    pub fn one() -> Self {
        Fr(ArkFr::one())
    }

    /// Check if zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Return multiplicative inverse.
    pub fn inverse(&self) -> Result<Self> {
        self.0.inverse().map(Fr).ok_or(Poseidon2Error::NotInvertible)
    }

    /// Exponentiation.
    pub fn pow(&self, exp: u64) -> Self {
        Fr(self.0.pow([exp]))
    }

    pub fn square(&self) -> Self {
        Fr(self.0.square())
    }

    /// x^5, the S-box.
    #[inline(always)]
    pub fn pow5(self) -> Self {
        let x2 = self.0.square();
        let x4 = x2.square();
        Fr(x4 * self.0)
    }

    /// Double.
    #[inline(always)]
    pub fn double(self) -> Self {
        Fr(self.0 + self.0)
    }
}

// Arithmetic ops
impl Add for Fr {
    type Output = Fr;
    fn add(self, rhs: Fr) -> Fr {
        Fr(self.0 + rhs.0)
    }
}

impl AddAssign for Fr {
    fn add_assign(&mut self, rhs: Fr) {
        self.0 += rhs.0;
    }
}

impl Sub for Fr {
    type Output = Fr;
    fn sub(self, rhs: Fr) -> Fr {
        Fr(self.0 - rhs.0)
    }
}

impl Mul for Fr {
    type Output = Fr;
    fn mul(self, rhs: Fr) -> Fr {
        Fr(self.0 * rhs.0)
    }
}

impl MulAssign for Fr {
    fn mul_assign(&mut self, rhs: Fr) {
        self.0 *= rhs.0;
    }
}

impl Neg for Fr {
    type Output = Fr;
    fn neg(self) -> Fr {
        Fr(-self.0)
    }
}

impl From<u64> for Fr {
    fn from(x: u64) -> Self {
        Fr::from_u64(x)
    }
}

impl FromStr for Fr {
    type Err = Poseidon2Error;

    /// Parses base 10; use [`Fr::from_hex`] for hex input.
    fn from_str(s: &str) -> Result<Self> {
        Fr::from_dec_str(s)
    }
}

impl fmt::Display for Fr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dec_string())
    }
}

impl CanonicalSerialize for Fr {
    fn serialize_with_mode<W: ark_serialize::Write>(
        &self,
        mut writer: W,
        _compress: ark_serialize::Compress,
    ) -> core::result::Result<(), ark_serialize::SerializationError> {
        self.0.serialize_compressed(&mut writer)
    }

    fn serialized_size(&self, _compress: ark_serialize::Compress) -> usize {
        self.0.compressed_size()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Fr {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_dec_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Fr {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        Fr::from_dec_str(&s).map_err(serde::de::Error::custom)
    }
}
