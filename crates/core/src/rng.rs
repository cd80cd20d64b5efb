//! RNG module - where new piece kinds come from
//!
//! The engine never seeds a global generator. Each game owns a
//! [`PieceSource`] handed in at construction:
//!
//! - [`UniformSource`]: every kind equally likely on every draw (the classic rule)
//! - [`BagSource`]: the "7-bag", one of each kind per shuffled bag
//! - [`SequenceSource`]: a fixed, repeating list for tests and demos
//!
//! Seeded sources use `ChaCha8Rng`, so the same seed replays the same game.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{PieceKind, NUM_KINDS};

/// Supplies the kind of each new "next" piece
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<P: PieceSource + ?Sized> PieceSource for Box<P> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform choice over the seven kinds
#[derive(Debug, Clone)]
pub struct UniformSource<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> UniformSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformSource<ChaCha8Rng> {
    /// Deterministic source for a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from the thread-local generator
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> PieceSource for UniformSource<R> {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..NUM_KINDS)]
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct BagSource<R = ChaCha8Rng> {
    /// Current bag of pieces
    bag: [PieceKind; NUM_KINDS],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: R,
}

impl<R: Rng> BagSource<R> {
    pub fn new(rng: R) -> Self {
        let mut source = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng,
        };
        source.refill_bag();
        source
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Kinds still waiting in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

impl BagSource<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> PieceSource for BagSource<R> {
    fn next_kind(&mut self) -> PieceKind {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let kind = self.bag[self.bag_index];
        self.bag_index += 1;
        kind
    }
}

/// Repeats a fixed list of kinds forever
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let kinds: Vec<PieceKind> = kinds.into_iter().collect();
        assert!(!kinds.is_empty(), "a piece sequence needs at least one kind");
        Self { kinds, index: 0 }
    }

    /// The same kind every time
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl PieceSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index];
        self.index = (self.index + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_deterministic() {
        let mut a = UniformSource::seeded(12345);
        let mut b = UniformSource::seeded(12345);

        for _ in 0..100 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_uniform_reaches_every_kind() {
        let mut source = UniformSource::seeded(7);
        let mut seen = [false; NUM_KINDS];
        for _ in 0..500 {
            seen[source.next_kind().index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "{:?}", seen);
    }

    #[test]
    fn test_bag_draws_all_seven() {
        let mut source = BagSource::seeded(1);
        assert_eq!(source.remaining().len(), 7);

        let mut drawn = Vec::new();
        for _ in 0..7 {
            drawn.push(source.next_kind());
        }

        for kind in PieceKind::ALL {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
        assert!(source.remaining().is_empty());
    }

    #[test]
    fn test_bag_auto_refill() {
        let mut source = BagSource::seeded(1);
        for _ in 0..7 {
            source.next_kind();
        }
        source.next_kind();
        assert_eq!(source.remaining().len(), 6);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut source = SequenceSource::new([PieceKind::O, PieceKind::I]);
        let drawn: Vec<_> = (0..5).map(|_| source.next_kind()).collect();
        assert_eq!(
            drawn,
            vec![
                PieceKind::O,
                PieceKind::I,
                PieceKind::O,
                PieceKind::I,
                PieceKind::O
            ]
        );
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut source: Box<dyn PieceSource> = Box::new(SequenceSource::repeat(PieceKind::S));
        assert_eq!(source.next_kind(), PieceKind::S);
    }
}
