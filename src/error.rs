//! Error taxonomy shared by the field, sponge and Merkle layers.

use ark_std::string::String;
use thiserror::Error;

/// Reason a hashing or field operation was rejected.
///
/// All of these are raised at the boundary, before any permutation round
/// runs. Once a state has been built from valid [`Fr`](crate::Fr) values the
/// permutation itself cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Poseidon2Error {
    /// The input text is not a non-negative integer in the expected radix.
    #[error("invalid field element: {0:?}")]
    InvalidFieldElement(String),

    /// Wrong number of inputs for a fixed-arity entry point.
    #[error("invalid arity: expected {expected} input(s), got {actual}")]
    InvalidArity { expected: usize, actual: usize },

    /// Inversion of the zero element.
    #[error("zero has no multiplicative inverse")]
    NotInvertible,
}

pub type Result<T> = core::result::Result<T, Poseidon2Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use ark_std::string::ToString;

    #[test]
    fn messages_name_the_offending_input() {
        let err = Poseidon2Error::InvalidFieldElement("-1".into());
        assert_eq!(err.to_string(), "invalid field element: \"-1\"");

        let err = Poseidon2Error::InvalidArity { expected: 2, actual: 3 };
        assert_eq!(err.to_string(), "invalid arity: expected 2 input(s), got 3");
    }
}
