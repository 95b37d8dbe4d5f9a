//! Cells in the cellular automaton.

use crate::error::Error;
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two possible states of a cell.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellType {
    /// Written as `0` in the input.
    #[educe(Default)]
    Red,
    /// Written as `1` in the input.
    Green,
}

impl CellType {
    /// Whether the cell is [`Green`](CellType::Green).
    #[inline]
    pub fn is_green(self) -> bool {
        self == CellType::Green
    }
}

impl TryFrom<u8> for CellType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellType::Red),
            1 => Ok(CellType::Green),
            _ => Err(Error::BadCellValue(value.to_string())),
        }
    }
}

impl TryFrom<char> for CellType {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '0' => Ok(CellType::Red),
            '1' => Ok(CellType::Green),
            _ => Err(Error::BadCellValue(value.to_string())),
        }
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
pub type Coord = (usize, usize);

/// The coordinates of a linked neighbour, `(row, column)`.
///
/// Both sides of a grid are below 1000, so `u16` is enough.
pub type Link = (u16, u16);

/// Links from a cell to the four cells next to it in the same generation.
///
/// A link is the coordinates of the neighbour inside the grid that owns both
/// cells, so it never keeps the neighbour alive by itself. `None` means the
/// neighbour would be outside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NeighbourLinks {
    /// The cell in the row above.
    pub up: Option<Link>,
    /// The cell in the row below.
    pub down: Option<Link>,
    /// The cell in the column to the left.
    pub left: Option<Link>,
    /// The cell in the column to the right.
    pub right: Option<Link>,
}

/// A cell in some generation.
///
/// The type of a cell never changes; the next generation gets new cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The type of the cell.
    cell_type: CellType,

    /// The neighbours of the cell.
    ///
    /// Empty until the generation is linked.
    pub(crate) neighbours: NeighbourLinks,
}

impl Cell {
    /// Creates a cell with no neighbours linked yet.
    #[inline]
    pub(crate) fn new(cell_type: CellType) -> Self {
        Cell {
            cell_type,
            neighbours: NeighbourLinks::default(),
        }
    }

    /// The type of the cell.
    #[inline]
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// The neighbours of the cell.
    #[inline]
    pub fn neighbours(&self) -> &NeighbourLinks {
        &self.neighbours
    }
}
