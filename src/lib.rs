//! Poseidon2 over the BN254 scalar field, width 3, as a 2-to-1 hash.
//!
//! - [`field`] - BN254 Fr wrapper with reduce-on-construct parsing
//! - [`params`] - round constants and linear-layer parameters
//! - [`permutation`] - the Poseidon2 permutation
//! - [`sponge`] - `hash2` and its boundary helpers
//! - [`merkle`] - fixed-depth trees built from `hash2`
//!
//! ```
//! use poseidon2_bn254::{hash2, Fr};
//!
//! let out = hash2(Fr::zero(), Fr::zero());
//! assert_eq!(
//!     out.to_string(),
//!     "21177166670744647784289648293577786481357446166129397094207318338605633126018"
//! );
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

/// Prints when the `trace` feature is on; otherwise type-checks its
/// arguments and emits nothing.
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::std::println!($($arg)*)
    };
}

#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

pub mod debug;
pub mod error;
pub mod field;
pub mod merkle;
pub mod params;
pub mod permutation;
pub mod sponge;
mod utils;

pub use error::{Poseidon2Error, Result};
pub use field::Fr;
pub use params::{Poseidon2Config, Poseidon2Constants};
pub use permutation::{permute, permute_with_trace, State};
pub use sponge::{hash, hash2, hash2_batch, hash2_bytes_be, hash2_dec};
