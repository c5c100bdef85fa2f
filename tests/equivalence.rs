//! Scalar and bit-sliced engines must agree lane by lane.

use bolero::check;
use curl::constants::{Trit, STATE_LENGTH};
use curl::pair::{self, LANES};
use curl::{curl as scalar, Curl, PairCurl, Sponge, TritPlanes, HASH_LENGTH};

fn trits(data: &[u8], len: usize) -> Vec<Trit> {
    if data.is_empty() {
        return vec![0; len];
    }
    data.iter().cycle().take(len).map(|b| (b % 3) as Trit - 1).collect()
}

fn to_state<T: Copy>(v: &[T]) -> [T; STATE_LENGTH] {
    let mut out = [v[0]; STATE_LENGTH];
    out.copy_from_slice(v);
    out
}

fn scalar_transform(state: &[Trit]) -> [Trit; STATE_LENGTH] {
    let mut state = to_state(state);
    let mut scratchpad = [0; STATE_LENGTH];
    scalar::transform(&mut state, &mut scratchpad);
    state
}

fn pair_transform(planes: &TritPlanes) -> TritPlanes {
    let mut low = to_state(&planes.low);
    let mut high = to_state(&planes.high);
    let mut scratch_low = [0; STATE_LENGTH];
    let mut scratch_high = [0; STATE_LENGTH];
    pair::transform(&mut low, &mut high, &mut scratch_low, &mut scratch_high);
    TritPlanes {
        low: low.to_vec(),
        high: high.to_vec(),
    }
}

#[test]
fn broadcast_matches_scalar() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let state = trits(data, STATE_LENGTH);
        let expected = scalar_transform(&state);
        let out = pair_transform(&TritPlanes::broadcast(&state));

        for lane in 0..LANES {
            assert_eq!(out.lane(lane), &expected[..], "lane {} diverged", lane);
        }
    });
}

#[test]
fn distinct_lanes_match_scalar() {
    let states: Vec<Vec<Trit>> = (0..LANES)
        .map(|lane| {
            (0..STATE_LENGTH)
                .map(|i| ((i * (lane + 1) + lane * lane) % 3) as Trit - 1)
                .collect()
        })
        .collect();

    let mut planes = TritPlanes::zeroed(STATE_LENGTH);
    for (lane, state) in states.iter().enumerate() {
        planes.set_lane(lane, state);
    }
    let out = pair_transform(&planes);

    for (lane, state) in states.iter().enumerate() {
        assert_eq!(out.lane(lane), &scalar_transform(state)[..], "lane {}", lane);
    }
}

#[test]
fn sponges_agree() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        let len = 1 + data.len() % (2 * HASH_LENGTH + 7);
        let message = trits(data, len);

        let mut curl = Curl::new();
        curl.absorb(&message);
        let mut digest = vec![0; HASH_LENGTH];
        curl.squeeze(&mut digest);

        let input = TritPlanes::broadcast(&message);
        let mut pair = PairCurl::new();
        pair.absorb(&input.low, &input.high);
        let mut out = TritPlanes::zeroed(HASH_LENGTH);
        pair.squeeze(&mut out.low, &mut out.high);

        assert_eq!(out.lane(0), digest);
        assert_eq!(out.lane(LANES - 1), digest);
    });
}

#[test]
fn fresh_pair_matches_fresh_scalar() {
    let pair = PairCurl::new();
    let planes = TritPlanes {
        low: pair.low().to_vec(),
        high: pair.high().to_vec(),
    };
    let curl = Curl::new();
    for lane in 0..LANES {
        assert_eq!(planes.lane(lane), &curl.state()[..]);
    }
}
