use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Which cells of the current puzzle have been shown to the player.
///
/// The mask keeps its revealed count in step with the grid so that progress
/// never has to be cached separately.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRevealMask")]
pub struct RevealMask {
    cells: Array2<bool>,
    revealed_count: CellCount,
}

/// Serialized form of [`RevealMask`]. The stored count is ignored and
/// recomputed from the cells.
#[derive(Deserialize)]
struct RawRevealMask {
    cells: Array2<bool>,
}

impl TryFrom<RawRevealMask> for RevealMask {
    type Error = GameError;

    fn try_from(raw: RawRevealMask) -> Result<Self> {
        let (rows, cols) = raw.cells.dim();
        if rows != cols || Coord::try_from(rows).is_err() {
            return Err(GameError::InvalidGridSize);
        }
        let revealed = raw.cells.iter().filter(|&&revealed| revealed).count();
        let revealed_count =
            CellCount::try_from(revealed).map_err(|_| GameError::InvalidGridSize)?;
        Ok(Self {
            cells: raw.cells,
            revealed_count,
        })
    }
}

impl RevealMask {
    pub fn new(grid_size: Coord) -> Self {
        Self {
            cells: Array2::default((grid_size, grid_size).to_nd_index()),
            revealed_count: 0,
        }
    }

    /// Mask with no cells, used while no image is loaded.
    pub fn empty() -> Self {
        Self::new(0)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn grid_size(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.grid_size(), self.grid_size())
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed_count == self.total_cells()
    }

    /// Percentage of revealed cells in `[0, 100]`, zero for an empty mask.
    pub fn progress(&self) -> f32 {
        let total = self.total_cells();
        if total == 0 {
            return 0.0;
        }
        100.0 * f32::from(self.revealed_count) / f32::from(total)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.grid_size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.cells
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    /// Reveals a single cell, returns whether the mask changed.
    pub fn reveal(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        if *cell {
            return Ok(false);
        }
        *cell = true;
        self.revealed_count += 1;
        Ok(true)
    }

    /// Cells not yet revealed, in row-major order.
    pub fn unrevealed(&self) -> Vec<Coord2> {
        self.cells
            .indexed_iter()
            .filter(|&(_, &revealed)| !revealed)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect()
    }
}

impl Default for RevealMask {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mask_is_all_hidden() {
        let mask = RevealMask::new(8);

        assert_eq!(mask.grid_size(), 8);
        assert_eq!(mask.total_cells(), 64);
        assert_eq!(mask.revealed_count(), 0);
        assert_eq!(mask.progress(), 0.0);
        assert_eq!(mask.unrevealed().len(), 64);
    }

    #[test]
    fn reveal_counts_each_cell_once() {
        let mut mask = RevealMask::new(2);

        assert_eq!(mask.reveal((1, 0)), Ok(true));
        assert_eq!(mask.reveal((1, 0)), Ok(false));
        assert!(mask.is_revealed((1, 0)));
        assert_eq!(mask.revealed_count(), 1);
        assert_eq!(mask.progress(), 25.0);
    }

    #[test]
    fn out_of_bounds_reveal_is_rejected() {
        let mut mask = RevealMask::new(2);

        assert_eq!(mask.reveal((2, 0)), Err(GameError::InvalidCoords));
        assert!(!mask.is_revealed((5, 5)));
        assert_eq!(mask.revealed_count(), 0);
    }

    #[test]
    fn deserialized_mask_recounts_revealed_cells() {
        let mut mask = RevealMask::new(2);
        mask.reveal((0, 1)).unwrap();

        let mut value = serde_json::to_value(&mask).unwrap();
        value["revealed_count"] = serde_json::json!(99);
        let restored: RevealMask = serde_json::from_value(value).unwrap();

        assert_eq!(restored, mask);
        assert_eq!(restored.revealed_count(), 1);
        assert_eq!(restored.progress(), 25.0);
    }

    #[test]
    fn deserialized_mask_must_be_square() {
        let mut value = serde_json::to_value(RevealMask::new(2)).unwrap();
        value["cells"]["dim"] = serde_json::json!([2, 3]);
        value["cells"]["data"] = serde_json::json!([false, true, false, false, true, false]);

        assert!(serde_json::from_value::<RevealMask>(value).is_err());
    }

    #[test]
    fn empty_mask_has_zero_progress() {
        let mask = RevealMask::empty();

        assert!(mask.is_empty());
        assert_eq!(mask.total_cells(), 0);
        assert_eq!(mask.progress(), 0.0);
        assert!(mask.is_fully_revealed());
    }
}
