use std::collections::VecDeque;

use arrayvec::ArrayVec;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::{PieceKind, Tetrimino};

/// How many kinds each refill cycle queues. One of the seven kinds is left
/// undrawn per cycle.
pub const BAG_REFILL_LEN: usize = 6;

/// Seed for a reproducible bag sequence.
///
/// Two bags built from the same seed pop the same kinds in the same order,
/// which is what session replays and deterministic tests key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagSeed(pub u64);

/// Fair supplier of upcoming piece kinds.
///
/// Each refill draws [`BAG_REFILL_LEN`] kinds uniformly without replacement
/// from the seven, so no kind repeats within one cycle. The bag owns its
/// queue and random generator; nothing here is process-global.
#[derive(Debug, Clone)]
pub struct PieceBag {
    rng: Pcg32,
    queue: VecDeque<PieceKind>,
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceBag {
    /// Creates a bag with a random seed.
    ///
    /// For a reproducible sequence use [`Self::with_seed`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(BagSeed(rand::rng().random()))
    }

    /// Like [`Self::new`], but deterministic for the given seed.
    #[must_use]
    pub fn with_seed(seed: BagSeed) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed.0),
            queue: VecDeque::with_capacity(BAG_REFILL_LEN),
        }
    }

    /// Next kind to spawn. Refills the queue first when it has run dry.
    ///
    /// # Panics
    ///
    /// Never in practice; a refill always queues pieces.
    pub fn pop_next(&mut self) -> PieceKind {
        if self.queue.is_empty() {
            self.refill();
        }
        self.queue.pop_front().expect("refill queues pieces")
    }

    /// Pops the next kind and spawns it centered on a board `board_width`
    /// cells wide.
    pub fn pop_spawned(&mut self, board_width: i32) -> Tetrimino {
        Tetrimino::spawned(self.pop_next(), board_width)
    }

    /// Upcoming kinds in draw order, for preview panels.
    pub fn upcoming(&self) -> impl Iterator<Item = PieceKind> + '_ {
        self.queue.iter().copied()
    }

    /// Draws [`BAG_REFILL_LEN`] kinds from a shrinking working set of the
    /// seven and queues them.
    fn refill(&mut self) {
        let mut working: ArrayVec<PieceKind, { PieceKind::LEN }> =
            PieceKind::ALL.into_iter().collect();
        while self.queue.len() < BAG_REFILL_LEN {
            let index = self.rng.random_range(0..working.len());
            self.queue.push_back(working.swap_remove(index));
        }
    }
}
