//! Deterministic random number generation for battles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles and choices
//! - **Serializable**: O(1) state capture and restore
//!
//! Every random decision in a battle (deck shuffles, enemy action choice,
//! `random` conditions, hand disruption, card transformation) goes through
//! one `BattleRng`, so a battle replayed from the same seed and the same
//! player inputs produces the same event sequence.
//!
//! ```
//! use card_battle::core::BattleRng;
//!
//! let mut a = BattleRng::new(7);
//! let mut b = BattleRng::new(7);
//!
//! let mut left = vec![1, 2, 3, 4, 5];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing every random decision of a battle.
///
/// Uses ChaCha8 for speed while keeping a well-distributed stream.
#[derive(Clone, Debug)]
pub struct BattleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl BattleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. Returns `None` for an empty range.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.inner.gen_range(0..len))
        }
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Returns true with the given probability.
    ///
    /// Probabilities outside `[0, 1]` are clamped rather than rejected, since
    /// they come from catalog data.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability.clamp(0.0, 1.0)
    }

    /// Shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> BattleRngState {
        BattleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &BattleRngState) -> Self {
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
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how
/// many numbers were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleRngState {
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
        let mut rng1 = BattleRng::new(42);
        let mut rng2 = BattleRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.index(1000), rng2.index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = BattleRng::new(1);
        let mut rng2 = BattleRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_empty() {
        let mut rng = BattleRng::new(42);
        assert_eq!(rng.index(0), None);
        assert_eq!(rng.index(1), Some(0));
    }

    #[test]
    fn test_chance_bounds() {
        let mut rng = BattleRng::new(42);
        for _ in 0..50 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
            // Out-of-range data is clamped
            assert!(!rng.chance(-3.0));
            assert!(rng.chance(7.5));
        }
    }

    #[test]
    fn test_shuffle() {
        let mut rng = BattleRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose() {
        let mut rng = BattleRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = BattleRng::new(42);
        for _ in 0..100 {
            rng.index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.index(1000)).collect();

        let mut restored = BattleRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.index(1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = BattleRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: BattleRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
