use super::*;

/// Picks cells uniformly at random without replacement. A picker is built
/// for one tick: the round seed is mixed with the tick index so each tick
/// draws an independent but reproducible sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomCellPicker {
    seed: u64,
}

impl RandomCellPicker {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn for_tick(round_seed: u64, tick: u32) -> Self {
        let mixed = round_seed.wrapping_add(u64::from(tick).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(mixed)
    }
}

impl CellPicker for RandomCellPicker {
    fn pick(self, mask: &RevealMask, count: CellCount) -> Vec<Coord2> {
        use rand::prelude::*;

        let mut hidden = mask.unrevealed();
        let count = usize::from(count);

        // nothing left to choose from, take everything
        if count >= hidden.len() {
            if count > hidden.len() {
                log::trace!(
                    "Only {} hidden cells left, requested batch of {}",
                    hidden.len(),
                    count
                );
            }
            return hidden;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let (picked, _) = hidden.partial_shuffle(&mut rng, count);
        picked.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn picks_distinct_hidden_cells() {
        let mut mask = RevealMask::new(4);
        mask.reveal((0, 0)).unwrap();
        mask.reveal((3, 3)).unwrap();

        let picked = RandomCellPicker::new(7).pick(&mask, 12);

        assert_eq!(picked.len(), 12);
        let unique: BTreeSet<_> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 12);
        assert!(picked.iter().all(|&coords| !mask.is_revealed(coords)));
    }

    #[test]
    fn oversized_batch_returns_all_hidden_cells() {
        let mut mask = RevealMask::new(2);
        mask.reveal((0, 1)).unwrap();

        let picked = RandomCellPicker::new(1).pick(&mask, 8);

        assert_eq!(picked, [(0, 0), (1, 0), (1, 1)]);
    }

    #[test]
    fn same_seed_same_cells() {
        let mask = RevealMask::new(16);

        let a = RandomCellPicker::for_tick(42, 3).pick(&mask, 12);
        let b = RandomCellPicker::for_tick(42, 3).pick(&mask, 12);

        assert_eq!(a, b);
    }
}
