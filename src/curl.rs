use crate::constants::*;
use crate::Sponge;

use crunchy::unroll;

const _: () = assert!(NUMBER_OF_ROUNDS == 27);

/// Scalar Curl-P-27 over a single trit stream.
pub struct Curl {
    state: [Trit; STATE_LENGTH],
    scratchpad: [Trit; STATE_LENGTH],
}

impl Default for Curl {
    fn default() -> Curl {
        Curl {
            state: [0; STATE_LENGTH],
            scratchpad: [0; STATE_LENGTH],
        }
    }
}

impl Curl {
    pub fn new() -> Curl {
        Curl::default()
    }

    /// A new zeroed instance. Absorbed state is not carried over.
    pub fn fresh(&self) -> Curl {
        Curl::default()
    }

    /// Permute the state once, in place.
    pub fn transform(&mut self) {
        transform(&mut self.state, &mut self.scratchpad);
    }

    pub fn reset(&mut self) {
        self.state = [0; STATE_LENGTH];
    }

    pub fn state(&self) -> &[Trit; STATE_LENGTH] {
        &self.state
    }

    /// Raw access for callers that splice fields (e.g. a nonce) and call
    /// [`Curl::transform`] themselves. Trits are not validated.
    pub fn state_mut(&mut self) -> &mut [Trit; STATE_LENGTH] {
        &mut self.state
    }

    pub fn set_state(&mut self, state: &[Trit]) {
        assert_eq!(state.len(), STATE_LENGTH);
        self.state.copy_from_slice(state);
    }
}

impl Sponge for Curl {
    type Item = Trit;

    fn absorb(&mut self, trits: &[Self::Item]) {
        assert!(!trits.is_empty(), "nothing to absorb");

        for block in trits.chunks(HASH_LENGTH) {
            self.state[..block.len()].copy_from_slice(block);
            self.transform();
        }
    }

    fn squeeze(&mut self, out: &mut [Self::Item]) {
        assert!(!out.is_empty(), "nothing to squeeze into");

        for block in out.chunks_mut(HASH_LENGTH) {
            let n = block.len();
            block.copy_from_slice(&self.state[..n]);
            self.transform();
        }
    }
}

/// Apply the 27-round permutation to `state`. `scratchpad` holds the
/// previous round and its contents on entry are irrelevant.
pub fn transform(state: &mut [Trit; STATE_LENGTH], scratchpad: &mut [Trit; STATE_LENGTH]) {
    unroll! {
        for _round in 0..27 {
            round(state, scratchpad);
        }
    }
}

#[inline(always)]
fn round(state: &mut [Trit; STATE_LENGTH], scratchpad: &mut [Trit; STATE_LENGTH]) {
    scratchpad.copy_from_slice(&state[..]);

    let mut index = 0;
    for t in state.iter_mut() {
        let prev = index;
        index = step(index);
        *t = TRUTH_TABLE[(scratchpad[prev] + (scratchpad[index] << 2) + 5) as usize];
    }
}
