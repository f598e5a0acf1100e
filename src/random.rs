//! Seedable random source construction.
//!
//! Every run owns its own generator; nothing in this crate touches global
//! random state. A `ChaCha8Rng` is used so that a given seed reproduces
//! the same search on every platform.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Shuffles a slice in place.
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    slice.shuffle(rng);
}
