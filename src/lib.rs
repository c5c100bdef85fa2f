//! Curl-P-27, the ternary sponge of the IOTA protocol.
//!
//! [`Curl`] hashes one trit stream. [`PairCurl`] hashes 64 streams at once,
//! each trit stored as a bit pair spread across two `u64` planes.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod constants;
pub mod curl;
pub mod pair;

pub use crate::constants::{Trit, HASH_LENGTH, STATE_LENGTH};
pub use crate::curl::Curl;
pub use crate::pair::{PairCurl, TritPlanes};

pub trait Sponge {
    type Item;

    /// Absorb `input` in blocks of [`HASH_LENGTH`], permuting after each one.
    /// A short final block only overwrites its own prefix of the state.
    fn absorb(&mut self, input: &[Self::Item]);

    /// Fill `out` in blocks of [`HASH_LENGTH`], permuting after each one.
    fn squeeze(&mut self, out: &mut [Self::Item]);
}
