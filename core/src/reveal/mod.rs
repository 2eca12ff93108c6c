use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Chooses which hidden cells an auto-reveal tick uncovers.
pub trait CellPicker {
    /// Returns at most `count` distinct cells that are unrevealed in `mask`.
    fn pick(self, mask: &RevealMask, count: CellCount) -> Vec<Coord2>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatchKind {
    Fast,
    Slow,
}

/// How many fast and slow auto-reveal ticks the current round has issued.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoRevealCounters {
    pub fast: u32,
    pub slow: u32,
}

impl AutoRevealCounters {
    pub const fn ticks(&self) -> u32 {
        self.fast.saturating_add(self.slow)
    }

    /// Kind and size of the batch the next tick should reveal.
    pub const fn next_batch(&self, rules: &GameRules) -> (BatchKind, CellCount) {
        if self.fast < rules.fast_batch_ticks {
            (BatchKind::Fast, rules.fast_batch_size)
        } else {
            (BatchKind::Slow, rules.slow_batch_size)
        }
    }

    pub fn record(&mut self, kind: BatchKind) {
        match kind {
            BatchKind::Fast => self.fast = self.fast.saturating_add(1),
            BatchKind::Slow => self.slow = self.slow.saturating_add(1),
        }
    }
}
