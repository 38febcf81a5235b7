//! Seeded shuffling.
//!
//! The engine's randomized policies take the RNG explicitly so callers
//! (and tests) control the seed and can reproduce any plan.

use rand::Rng;

/// Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffles each consecutive block of `block` items independently.
///
/// Elements never leave their block, so a slice sorted by bed number stays
/// approximately sorted. Block sizes below 2 leave the slice untouched.
pub fn block_shuffle<T, R: Rng>(items: &mut [T], block: usize, rng: &mut R) {
    if block < 2 {
        return;
    }
    for chunk in items.chunks_mut(block) {
        shuffle(chunk, rng);
    }
}
