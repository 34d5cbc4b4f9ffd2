//! RNG module - uniform piece selection
//!
//! Every spawn draws one of the seven kinds independently and uniformly.
//! There is no bag, so long droughts and repeats are possible. Sessions can be
//! seeded for reproducible piece sequences.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::types::PieceKind;

#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: StdRng,
    uniform: Uniform<usize>,
}

impl PieceRandomizer {
    /// Deterministic sequence from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            uniform: Uniform::new(0, PieceKind::ALL.len()),
        }
    }

    /// Seed from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            uniform: Uniform::new(0, PieceKind::ALL.len()),
        }
    }

    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.uniform.sample(&mut self.rng)]
    }
}
