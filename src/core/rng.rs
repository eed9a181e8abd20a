//! Deterministic random number generation for dealing.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical deal
//! - **Context streams**: Independent sequences for different purposes
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use concentration::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Deterministic RNG backing the deal shuffle.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// Separates randomness domains (the deal shuffle vs anything else).
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    ///
    /// Forward Fisher-Yates: element `i` is swapped with a uniformly chosen
    /// element in `[i, n)`, giving every permutation equal probability.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        let n = slice.len();
        for i in 0..n {
            let j = self.inner.gen_range(i..n);
            slice.swap(i, j);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_context_produces_different_sequence() {
        let mut base = GameRng::new(42);
        let mut deal = base.for_context("deal");
        let mut other = base.for_context("other");

        let seq_base: Vec<_> = (0..10).map(|_| base.gen_range_usize(0..1000)).collect();
        let seq_deal: Vec<_> = (0..10).map(|_| deal.gen_range_usize(0..1000)).collect();
        let seq_other: Vec<_> = (0..10).map(|_| other.gen_range_usize(0..1000)).collect();

        assert_ne!(seq_base, seq_deal);
        assert_ne!(seq_deal, seq_other);
    }

    #[test]
    fn test_context_is_deterministic() {
        let mut ctx1 = GameRng::new(42).for_context("deal");
        let mut ctx2 = GameRng::new(42).for_context("deal");

        assert_eq!(ctx1.seed(), ctx2.seed());
        for _ in 0..10 {
            assert_eq!(ctx1.gen_range_usize(0..1000), ctx2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(3);
        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![9];
        rng.shuffle(&mut one);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_shuffle_is_uniform() {
        // All 6 orderings of 3 elements should show up roughly equally.
        let mut rng = GameRng::new(7);
        let mut counts = std::collections::HashMap::new();
        let trials = 6000;

        for _ in 0..trials {
            let mut data = [0u8, 1, 2];
            rng.shuffle(&mut data);
            *counts.entry(data).or_insert(0u32) += 1;
        }

        assert_eq!(counts.len(), 6);
        for &count in counts.values() {
            assert!((800..=1200).contains(&count), "skewed permutation count {count}");
        }
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_usize(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
