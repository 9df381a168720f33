use crate::config::FIRST_PIECE_ID;
use crate::structs::{Piece, PieceKind};
use rand::prelude::*;

/// Hands out piece ids in increasing order, starting at `FIRST_PIECE_ID`.
#[derive(Debug, Clone)]
pub struct IdCounter {
    next: u32,
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl IdCounter {
    pub fn new() -> Self {
        Self {
            next: FIRST_PIECE_ID,
        }
    }

    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone)]
pub struct Generator<R: Rng = StdRng> {
    rng: R,
}

impl Generator<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Generator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn random_kind(&mut self) -> PieceKind {
        let kinds = PieceKind::all();
        kinds[self.rng.gen_range(0..kinds.len())]
    }

    /// Draws a uniformly random kind and takes the counter's current id.
    pub fn next(&mut self, counter: &mut IdCounter) -> Piece {
        let kind = self.random_kind();
        Piece::new(kind, counter.next_id())
    }
}
