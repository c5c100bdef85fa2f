pub type Trit = i8;
pub const HASH_LENGTH: usize = 243;
pub const STATE_LENGTH: usize = 3 * HASH_LENGTH;
pub const NUMBER_OF_ROUNDS: usize = 27;
/// Indexed by `a + 4 * b + 5`. Slots 3 and 7 are never selected by valid trits.
pub const TRUTH_TABLE: [Trit; 11] = [1, 0, -1, 2, 1, -1, 0, 2, -1, 1, 0];
/// Every lane set.
pub const HIGH_BITS: u64 = 0xFFFF_FFFF_FFFF_FFFF;
pub const LOW_BITS: u64 = 0x0000_0000_0000_0000;

/// Next scratchpad index in the round walk.
#[inline(always)]
pub(crate) fn step(index: usize) -> usize {
    if index < 365 {
        index + 364
    } else {
        index - 365
    }
}
