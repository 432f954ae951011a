//! RNG module - random piece generation
//!
//! Kind and color are drawn independently and uniformly from their sets.
//! The generator is seeded so a game can be replayed from its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{PieceColor, PieceKind};

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: StdRng,
    seed: u64,
}

impl PieceGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the kind and color of the next piece
    pub fn next_piece(&mut self) -> (PieceKind, PieceColor) {
        let kind = PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())];
        let color = PieceColor::ALL[self.rng.gen_range(0..PieceColor::ALL.len())];
        (kind, color)
    }
}
