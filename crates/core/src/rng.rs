//! RNG module - sources of the next piece kind
//!
//! The engine only needs "give me the next kind", expressed by the
//! [`Randomizer`] trait. Two implementations ship here:
//!
//! - [`PieceBag`]: the "7-bag" algorithm. Each bag holds one of each kind,
//!   shuffled, and is drawn until empty before a new one is shuffled.
//! - [`FixedSequence`]: replays a given list of kinds in a loop, for
//!   deterministic tests and demos.
//!
//! Also provides a simple LCG so games are reproducible from a seed.

use crate::types::PieceKind;

/// Supplier of the next piece kind. No fairness is assumed by the engine.
pub trait Randomizer {
    fn next_piece(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag {
    bag: [PieceKind; 7],
    /// Index of the next kind to hand out; 7 means the bag is spent
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Kinds left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Randomizer for PieceBag {
    fn next_piece(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl FixedSequence {
    /// An empty list falls back to a single `I`.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds.push(PieceKind::I);
        }
        Self { kinds, next: 0 }
    }

    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl Randomizer for FixedSequence {
    fn next_piece(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut bag = PieceBag::new(1);
        assert_eq!(bag.remaining().len(), 7);

        let mut drawn: Vec<PieceKind> = (0..7).map(|_| bag.next_piece()).collect();
        drawn.sort_by_key(PieceKind::index);
        assert_eq!(drawn, PieceKind::ALL.to_vec());
        assert!(bag.remaining().is_empty());
    }

    #[test]
    fn test_bag_refills() {
        let mut bag = PieceBag::new(99);
        for _ in 0..7 {
            bag.next_piece();
        }
        let _eighth = bag.next_piece();
        assert_eq!(bag.remaining().len(), 6);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = PieceBag::new(42);
        let mut b = PieceBag::new(42);
        for _ in 0..21 {
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }

    #[test]
    fn test_fixed_sequence_cycles() {
        let mut seq = FixedSequence::new([PieceKind::T, PieceKind::O]);
        assert_eq!(seq.next_piece(), PieceKind::T);
        assert_eq!(seq.next_piece(), PieceKind::O);
        assert_eq!(seq.next_piece(), PieceKind::T);

        let mut empty = FixedSequence::new(Vec::new());
        assert_eq!(empty.next_piece(), PieceKind::I);
    }
}
