//! Poseidon2 permutation over `[Fr; 3]`.
//!
//! Schedule: initial external mix, 4 full rounds, 56 partial rounds, 4 full
//! rounds. A full round adds a width-3 constant vector, applies x^5 to every
//! lane, then the external mix. A partial round adds a constant to lane 0,
//! applies x^5 to lane 0 only, then the internal mix.

use crate::debug::dbg_state;
use crate::field::Fr;
use crate::params::{constants, Poseidon2Config, Poseidon2Constants, WIDTH};
use ark_std::vec::Vec;

pub type State = [Fr; WIDTH];

const CONFIG: Poseidon2Config = Poseidon2Config::BN254_T3;

#[inline(always)]
pub(crate) fn sbox(x: Fr) -> Fr {
    match CONFIG.sbox_degree {
        5 => x.pow5(),
        d => x.pow(d),
    }
}

#[inline(always)]
fn sbox_full(state: &mut State) {
    for lane in state.iter_mut() {
        *lane = sbox(*lane);
    }
}

// t=3 external mix, circ(2,1,1): [a+sum, b+sum, c+sum] where sum=a+b+c
#[inline(always)]
pub(crate) fn external_linear_layer(state: &mut State) {
    let sum = state[0] + state[1] + state[2];
    for lane in state.iter_mut() {
        *lane += sum;
    }
}

// t=3 internal mix, diag(1,1,2) + 1·1ᵀ: [a+sum, b+sum, 2c+sum]
#[inline(always)]
pub(crate) fn internal_linear_layer(state: &mut State, diag: &[Fr; WIDTH]) {
    let sum = state[0] + state[1] + state[2];
    for (lane, d) in state.iter_mut().zip(diag.iter()) {
        *lane = *lane * *d + sum;
    }
}

#[inline(always)]
fn full_round(state: &mut State, rc: &[Fr; WIDTH]) {
    for (lane, c) in state.iter_mut().zip(rc.iter()) {
        *lane += *c;
    }
    sbox_full(state);
    external_linear_layer(state);
}

#[inline(always)]
fn partial_round(state: &mut State, rc: Fr, diag: &[Fr; WIDTH]) {
    state[0] += rc;
    state[0] = sbox(state[0]);
    internal_linear_layer(state, diag);
}

/// Runs the schedule, handing every intermediate state to `observe`.
fn run_rounds(mut state: State, params: &Poseidon2Constants, mut observe: impl FnMut(&State)) -> State {
    let half = CONFIG.half_full_rounds();

    // initial external mix
    external_linear_layer(&mut state);
    observe(&state);

    // first 4 full rounds
    for rc in &params.external[..half] {
        full_round(&mut state, rc);
        observe(&state);
    }

    // 56 partial rounds
    for rc in params.internal.iter() {
        partial_round(&mut state, *rc, &params.internal_diag);
        observe(&state);
    }

    // final 4 full rounds
    for rc in &params.external[half..] {
        full_round(&mut state, rc);
        observe(&state);
    }

    state
}

/// Poseidon2 t=3 permutation
pub fn permute(state: State) -> State {
    dbg_state("permute.in", &state);
    let out = run_rounds(state, constants(), |_| {});
    dbg_state("permute.out", &out);
    out
}

/// Permutation plus every intermediate state.
///
/// The trace holds the state after the initial external mix followed by the
/// state after each of the `R_F + R_P` rounds, so `trace[r + 1]` is the
/// output of round `r`. Useful for lining up against a circuit's wires.
pub fn permute_with_trace(state: State) -> (State, Vec<State>) {
    let mut snapshots = Vec::with_capacity(1 + CONFIG.total_rounds());
    let out = run_rounds(state, constants(), |s| snapshots.push(*s));
    trace!("permute_with_trace: {} snapshots", snapshots.len());
    (out, snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FULL_ROUNDS, PARTIAL_ROUNDS, SBOX_DEGREE};

    fn fr(h: &str) -> Fr {
        Fr::from_hex(h).unwrap()
    }

    #[test]
    fn t3_reference_vector() {
        let out = permute([Fr::zero(), Fr::one(), Fr::from_u64(2)]);
        assert_eq!(out[0], fr("0x0bb61d24daca55eebcb1929a82650f328134334da98ea4f847f760054f4a3033"));
        assert_eq!(out[1], fr("0x303b6f7c86d043bfcbcc80214f26a30277a15d3f74ca654992defe7ff8d03570"));
        assert_eq!(out[2], fr("0x1ed25194542b12eef8617361c3ba7c52e660b145994427cc86296242cf766ec8"));
    }

    #[test]
    fn t3_zero_state() {
        let out = permute([Fr::zero(); WIDTH]);
        assert_eq!(out[0], fr("0x2ed1da00b14d635bd35b88ab49390d5c13c90da7e9e3a5f1ea69cd87a0aa3e82"));
        assert_eq!(out[1], fr("0x1e21e979cc3fd844b88c2016fd18f4db07a698aa27deca67ca509f5b0a4480d0"));
        assert_eq!(out[2], fr("0x2c40d0115da2c9b55553b231be55295f411e628ed0cd0e187917066515f0a060"));
    }

    #[test]
    fn sbox_follows_configured_degree() {
        let x = Fr::from_u64(3);
        assert_eq!(sbox(x), x.pow(SBOX_DEGREE));
        assert_eq!(sbox(x), Fr::from_u64(243));
        assert_eq!(CONFIG.half_full_rounds(), FULL_ROUNDS / 2);
    }

    #[test]
    fn external_layer_is_circ_2_1_1() {
        let mut s = [Fr::from_u64(1), Fr::from_u64(2), Fr::from_u64(3)];
        external_linear_layer(&mut s);
        assert_eq!(s, [Fr::from_u64(7), Fr::from_u64(8), Fr::from_u64(9)]);
    }

    #[test]
    fn internal_layer_doubles_last_lane() {
        let diag = constants().internal_diag;
        let mut s = [Fr::from_u64(1), Fr::from_u64(2), Fr::from_u64(3)];
        internal_linear_layer(&mut s, &diag);
        assert_eq!(s, [Fr::from_u64(7), Fr::from_u64(8), Fr::from_u64(12)]);
    }

    #[test]
    fn partial_round_leaves_other_lanes_to_the_mix() {
        let diag = constants().internal_diag;
        let mut s = [Fr::from_u64(2), Fr::from_u64(0), Fr::from_u64(0)];
        partial_round(&mut s, Fr::zero(), &diag);
        // 2^5 = 32 lands in lane 0, then sum = 32 is spread by the mix
        assert_eq!(s, [Fr::from_u64(64), Fr::from_u64(32), Fr::from_u64(32)]);
    }

    #[test]
    fn trace_ends_at_output() {
        let input = [Fr::from_u64(5), Fr::from_u64(6), Fr::zero()];
        let (out, snapshots) = permute_with_trace(input);
        assert_eq!(snapshots.len(), 1 + FULL_ROUNDS + PARTIAL_ROUNDS);
        assert_eq!(snapshots.last(), Some(&out));
        assert_eq!(out, permute(input));
    }

    #[test]
    fn permute_is_deterministic() {
        let input = [Fr::from_u64(11), Fr::from_u64(22), Fr::from_u64(33)];
        assert_eq!(permute(input), permute(input));
    }
}
