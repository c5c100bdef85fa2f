use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::constants::*;

use crunchy::unroll;

/// Number of independent trit streams carried by one pair of planes.
pub const LANES: usize = 64;

/// Bit-sliced Curl-P-27. Bit `b` of every word in the two planes holds the
/// trits of lane `b`.
pub struct PairCurl {
    low: Box<[u64; STATE_LENGTH]>,
    high: Box<[u64; STATE_LENGTH]>,
    scratch_low: Box<[u64; STATE_LENGTH]>,
    scratch_high: Box<[u64; STATE_LENGTH]>,
}

impl Default for PairCurl {
    fn default() -> PairCurl {
        PairCurl {
            low: Box::new([HIGH_BITS; STATE_LENGTH]),
            high: Box::new([HIGH_BITS; STATE_LENGTH]),
            scratch_low: Box::new([LOW_BITS; STATE_LENGTH]),
            scratch_high: Box::new([LOW_BITS; STATE_LENGTH]),
        }
    }
}

impl PairCurl {
    pub fn new() -> PairCurl {
        PairCurl::default()
    }

    /// A new instance with every lane back at the initial state.
    pub fn fresh(&self) -> PairCurl {
        PairCurl::default()
    }

    pub fn low(&self) -> &[u64; STATE_LENGTH] {
        &self.low
    }

    pub fn high(&self) -> &[u64; STATE_LENGTH] {
        &self.high
    }

    pub fn absorb(&mut self, low: &[u64], high: &[u64]) {
        assert_eq!(low.len(), high.len());
        assert!(!low.is_empty(), "nothing to absorb");

        for (l, h) in low.chunks(HASH_LENGTH).zip(high.chunks(HASH_LENGTH)) {
            self.low[..l.len()].copy_from_slice(l);
            self.high[..h.len()].copy_from_slice(h);
            self.transform();
        }
    }

    pub fn squeeze(&mut self, low: &mut [u64], high: &mut [u64]) {
        assert_eq!(low.len(), high.len());
        assert!(!low.is_empty(), "nothing to squeeze into");

        for (l, h) in low
            .chunks_mut(HASH_LENGTH)
            .zip(high.chunks_mut(HASH_LENGTH))
        {
            let n = l.len();
            l.copy_from_slice(&self.low[..n]);
            h.copy_from_slice(&self.high[..n]);
            self.transform();
        }
    }

    fn transform(&mut self) {
        transform(
            &mut self.low,
            &mut self.high,
            &mut self.scratch_low,
            &mut self.scratch_high,
        );
    }
}

/// Apply the 27-round permutation to all 64 lanes of `low`/`high` at once.
pub fn transform(
    low: &mut [u64; STATE_LENGTH],
    high: &mut [u64; STATE_LENGTH],
    scratch_low: &mut [u64; STATE_LENGTH],
    scratch_high: &mut [u64; STATE_LENGTH],
) {
    unroll! {
        for _round in 0..27 {
            round(low, high, scratch_low, scratch_high);
        }
    }
}

#[inline(always)]
fn round(
    low: &mut [u64; STATE_LENGTH],
    high: &mut [u64; STATE_LENGTH],
    scratch_low: &mut [u64; STATE_LENGTH],
    scratch_high: &mut [u64; STATE_LENGTH],
) {
    scratch_low.copy_from_slice(&low[..]);
    scratch_high.copy_from_slice(&high[..]);

    let mut index = 0;
    for (l, h) in low.iter_mut().zip(high.iter_mut()) {
        let prev = index;
        index = step(index);
        let (nl, nh) = substitute(
            scratch_low[prev],
            scratch_high[prev],
            scratch_low[index],
            scratch_high[index],
        );
        *l = nl;
        *h = nh;
    }
}

/// The truth table as a boolean circuit, one lane per bit.
#[inline(always)]
fn substitute(alpha: u64, beta: u64, next_low: u64, gamma: u64) -> (u64, u64) {
    let delta = (alpha | !gamma) & (next_low ^ beta);
    (!delta, (alpha ^ gamma) | delta)
}

/// Lane code of a trit as (low, high) bits. `(false, false)` is unused.
pub fn encode(trit: Trit) -> (bool, bool) {
    match trit {
        0 => (true, true),
        1 => (false, true),
        -1 => (true, false),
        _ => panic!("not a trit: {}", trit),
    }
}

pub fn decode(low: bool, high: bool) -> Trit {
    match (low, high) {
        (true, true) => 0,
        (false, true) => 1,
        (true, false) => -1,
        (false, false) => panic!("unused lane code"),
    }
}

fn plane_word(bit: bool) -> u64 {
    if bit {
        HIGH_BITS
    } else {
        LOW_BITS
    }
}

/// Owned pair of planes, for building batched input and reading lanes back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TritPlanes {
    pub low: Vec<u64>,
    pub high: Vec<u64>,
}

impl TritPlanes {
    /// `len` trits of value 0 in every lane.
    pub fn zeroed(len: usize) -> TritPlanes {
        TritPlanes {
            low: alloc::vec![HIGH_BITS; len],
            high: alloc::vec![HIGH_BITS; len],
        }
    }

    /// The same trits in every lane.
    pub fn broadcast(trits: &[Trit]) -> TritPlanes {
        let (low, high) = trits
            .iter()
            .map(|t| {
                let (l, h) = encode(*t);
                (plane_word(l), plane_word(h))
            })
            .unzip();
        TritPlanes { low, high }
    }

    pub fn len(&self) -> usize {
        self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    pub fn set_lane(&mut self, lane: usize, trits: &[Trit]) {
        assert!(lane < LANES);
        assert_eq!(trits.len(), self.len());

        let mask = 1u64 << lane;
        for ((l, h), t) in self.low.iter_mut().zip(self.high.iter_mut()).zip(trits) {
            let (lb, hb) = encode(*t);
            *l = (*l & !mask) | (plane_word(lb) & mask);
            *h = (*h & !mask) | (plane_word(hb) & mask);
        }
    }

    pub fn lane(&self, lane: usize) -> Vec<Trit> {
        assert!(lane < LANES);

        self.low
            .iter()
            .zip(self.high.iter())
            .map(|(l, h)| decode((l >> lane) & 1 == 1, (h >> lane) & 1 == 1))
            .collect()
    }
}
