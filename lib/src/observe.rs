//! The observed cell.

use crate::{cells::Coord, history::GenerationHistory};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell watched throughout the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservedCell {
    /// Row.
    pub x: usize,
    /// Column.
    pub y: usize,
    /// Number of generations to simulate after generation zero.
    pub generations: u64,
}

impl ObservedCell {
    /// Observes the cell at row `x`, column `y`, for `generations`
    /// generations after generation zero.
    pub fn new(x: usize, y: usize, generations: u64) -> Self {
        ObservedCell { x, y, generations }
    }

    /// The coordinates of the cell.
    #[inline]
    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }

    /// Number of generations in `history` where the cell is green.
    pub fn count_green(&self, history: &GenerationHistory) -> usize {
        history
            .iter()
            .filter(|generation| {
                generation
                    .cell_type(self.coord())
                    .map_or(false, |cell_type| cell_type.is_green())
            })
            .count()
    }
}
