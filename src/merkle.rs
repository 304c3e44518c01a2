//! Fixed-depth binary Merkle trees with `hash2` as the node compressor.
//!
//! Empty positions hold the zero subtree of their level:
//! `zero[0] = 0`, `zero[i + 1] = hash2(zero[i], zero[i])`.

use crate::error::{Poseidon2Error, Result};
use crate::field::Fr;
use crate::sponge::hash2;
use ark_std::vec::Vec;

/// Deepest tree `merkle_root` accepts; leaf indices must fit a `u64`.
pub const MAX_DEPTH: usize = 63;

/// `zero[0..=depth]`.
pub fn zero_hashes(depth: usize) -> Vec<Fr> {
    let mut out = Vec::with_capacity(depth + 1);
    let mut z = Fr::zero();
    out.push(z);
    for _ in 0..depth {
        z = hash2(z, z);
        out.push(z);
    }
    out
}

/// Root of a depth-`depth` tree whose leftmost leaves are `leaves`.
pub fn merkle_root(leaves: &[Fr], depth: usize) -> Result<Fr> {
    if depth > MAX_DEPTH {
        return Err(Poseidon2Error::InvalidArity {
            expected: MAX_DEPTH,
            actual: depth,
        });
    }
    if leaves.is_empty() {
        return Err(Poseidon2Error::InvalidArity {
            expected: 1,
            actual: 0,
        });
    }
    if let Some(max) = u32::try_from(depth).ok().and_then(|d| 1usize.checked_shl(d)) {
        if leaves.len() > max {
            return Err(Poseidon2Error::InvalidArity {
                expected: max,
                actual: leaves.len(),
            });
        }
    }

    let zeros = zero_hashes(depth);
    let mut level = leaves.to_vec();
    for zero in &zeros[..depth] {
        level = level
            .chunks(2)
            .map(|pair| hash2(pair[0], pair.get(1).copied().unwrap_or(*zero)))
            .collect();
    }
    Ok(level[0])
}

/// Root reached from `leaf` at `index` by folding in `siblings`, leaf level
/// first. Bit `i` of `index` set means the node is a right child at level `i`;
/// levels past bit 63 are left children.
pub fn root_from_path(leaf: Fr, index: u64, siblings: &[Fr]) -> Fr {
    siblings.iter().enumerate().fold(leaf, |node, (level, sibling)| {
        let bit = u32::try_from(level)
            .ok()
            .and_then(|l| index.checked_shr(l))
            .unwrap_or(0);
        if bit & 1 == 1 {
            hash2(*sibling, node)
        } else {
            hash2(node, *sibling)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ladder() {
        let z = zero_hashes(3);
        assert_eq!(z.len(), 4);
        assert!(z[0].is_zero());
        assert_eq!(z[1], hash2(Fr::zero(), Fr::zero()));
        assert_eq!(z[3], hash2(z[2], z[2]));
    }

    #[test]
    fn empty_tree_root_is_top_zero() {
        let leaves = [Fr::zero(); 3];
        assert_eq!(merkle_root(&leaves, 4).unwrap(), zero_hashes(4)[4]);
    }

    #[test]
    fn small_trees() {
        let a = Fr::from_u64(1);
        let b = Fr::from_u64(2);
        assert_eq!(merkle_root(&[a], 0).unwrap(), a);
        assert_eq!(merkle_root(&[a, b], 1).unwrap(), hash2(a, b));

        let z1 = hash2(Fr::zero(), Fr::zero());
        assert_eq!(merkle_root(&[a], 2).unwrap(), hash2(hash2(a, Fr::zero()), z1));
    }

    #[test]
    fn leaf_count_is_bounded() {
        let leaves = [Fr::one(); 5];
        assert_eq!(
            merkle_root(&leaves, 2),
            Err(Poseidon2Error::InvalidArity { expected: 4, actual: 5 })
        );
        assert_eq!(
            merkle_root(&[], 2),
            Err(Poseidon2Error::InvalidArity { expected: 1, actual: 0 })
        );
    }

    #[test]
    fn depth_is_bounded() {
        assert_eq!(
            merkle_root(&[Fr::one()], MAX_DEPTH + 1),
            Err(Poseidon2Error::InvalidArity { expected: MAX_DEPTH, actual: MAX_DEPTH + 1 })
        );
        assert_eq!(
            merkle_root(&[Fr::one()], usize::MAX),
            Err(Poseidon2Error::InvalidArity { expected: MAX_DEPTH, actual: usize::MAX })
        );
    }

    #[test]
    fn path_longer_than_index_width() {
        let siblings = [Fr::zero(); 65];
        let expected = siblings.iter().fold(Fr::one(), |node, s| hash2(node, *s));
        assert_eq!(root_from_path(Fr::one(), 0, &siblings), expected);

        // bit 63 is the last one read; level 64 folds as a left child
        let index = 1u64 << 63;
        let mut node = Fr::one();
        for (level, s) in siblings.iter().enumerate() {
            node = if level == 63 { hash2(*s, node) } else { hash2(node, *s) };
        }
        assert_eq!(root_from_path(Fr::one(), index, &siblings), node);
    }

    #[test]
    fn path_matches_root() {
        let leaves: Vec<Fr> = (1..=5).map(Fr::from_u64).collect();
        let depth = 3;
        let root = merkle_root(&leaves, depth).unwrap();

        // leaf 4 (index 4): siblings are zero[0], hash2(0, 0), and the left subtree root
        let zeros = zero_hashes(depth);
        let left = merkle_root(&leaves[..4], 2).unwrap();
        let siblings = [zeros[0], zeros[1], left];
        assert_eq!(root_from_path(leaves[4], 4, &siblings), root);
    }
}
