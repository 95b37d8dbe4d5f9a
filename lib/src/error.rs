//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Grid size should satisfy 0 < height <= width < 1000, got {0}x{1}.
    GridSizeOutOfRange(usize, usize),
    /// Malformed input: {0:?}.
    MalformedInput(String),
    /// Cell value should be 0 (red) or 1 (green), got {0:?}.
    BadCellValue(String),
    /// Row {row} has {found} cells, but the grid is {expected} cells wide.
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Observed cell {0:?} is outside the {1}x{2} grid.
    ObservedCellOutOfRange(Coord, usize, usize),
    /// The grid has not been initialized.
    Uninitialized,
    /// Row {0} is outside a grid of height {1}.
    RowOutOfRange(usize, usize),
    /// Row {0} of generation zero has not been loaded.
    MissingRow(usize),
    /// Generation zero is already finalized.
    AlreadyFinalized,
    /// Generation zero has not been finalized.
    NotFinalized,
    /// No observed cell has been set.
    NoObservedCell,
    /// {generations} generations would keep {cells} cells, but at most {max_cells} are allowed.
    TooManyGenerations {
        generations: u64,
        cells: u128,
        max_cells: u64,
    },
}
