//! The GreenVsRed rule.

use crate::{cells::CellType, generation::Generation};

/// The GreenVsRed rule.
///
/// A cell becomes [`Green`](CellType::Green) with 3 or 6 green cells around
/// it, keeps its type with 2, and becomes [`Red`](CellType::Red) otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreenVsRed;

impl GreenVsRed {
    /// The type of a cell in the next generation, given the number of green
    /// cells surrounding it and its current type.
    #[inline]
    pub fn next_type(&self, green_neighbours: usize, current: CellType) -> CellType {
        match green_neighbours {
            3 | 6 => CellType::Green,
            2 => current,
            _ => CellType::Red,
        }
    }

    /// Computes the next generation.
    ///
    /// Every cell is decided from `previous` alone, and the result comes
    /// back already linked.
    pub fn step(&self, previous: &Generation) -> Generation {
        let (height, width) = previous.dimensions();
        Generation::from_fn(height, width, |coord| {
            let current = previous.cell(coord).cell_type();
            self.next_type(previous.green_neighbours(coord), current)
        })
    }
}
