//! Fixed-arity sponge: two field elements in, one out.
//!
//! Two inputs never exceed the rate, so each call is a single absorb of
//! `[a, b, 0]`, one permutation, and a squeeze of lane 0. No padding.

use crate::debug::dbg_fr;
use crate::error::{Poseidon2Error, Result};
use crate::field::Fr;
use crate::params::{CAPACITY_VALUE, RATE};
use crate::permutation::permute;
use ark_std::{string::String, vec::Vec};

/// Poseidon2 2-to-1 compression.
pub fn hash2(a: Fr, b: Fr) -> Fr {
    dbg_fr("hash2.a", &a);
    dbg_fr("hash2.b", &b);
    let state = permute([a, b, Fr::from_u64(CAPACITY_VALUE)]);
    dbg_fr("hash2.out", &state[0]);
    state[0]
}

/// Arity-checked entry point; only `RATE` (2) inputs are accepted.
pub fn hash(inputs: &[Fr]) -> Result<Fr> {
    match inputs {
        [a, b] => Ok(hash2(*a, *b)),
        _ => Err(Poseidon2Error::InvalidArity {
            expected: RATE,
            actual: inputs.len(),
        }),
    }
}

/// Decimal strings in, canonical decimal string out.
///
/// Both inputs are validated before any round runs.
pub fn hash2_dec(a: &str, b: &str) -> Result<String> {
    let a = Fr::from_dec_str(a)?;
    let b = Fr::from_dec_str(b)?;
    Ok(hash2(a, b).to_dec_string())
}

/// Convenience: hash2 over 32-byte BE inputs (reduced mod p), 32-byte BE output
pub fn hash2_bytes_be(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    hash2(Fr::from_bytes(a), Fr::from_bytes(b)).to_bytes()
}

/// Hashes each pair on its own state.
pub fn hash2_batch(pairs: &[(Fr, Fr)]) -> Vec<Fr> {
    pairs.iter().map(|&(a, b)| hash2(a, b)).collect()
}
