//! A generation: one snapshot of the whole grid.

use crate::cells::{Cell, CellType, Coord, Link, NeighbourLinks};
use log::trace;

/// A snapshot of the grid at some step of the simulation.
///
/// The generation owns all of its cells. It is linked as soon as it is built
/// and cannot be mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    /// Number of rows.
    height: usize,

    /// Number of columns.
    width: usize,

    /// All the cells, row by row.
    cells: Box<[Cell]>,
}

impl Generation {
    /// Builds a linked generation, asking `cell_type` for the type at each
    /// position in row-major order.
    pub(crate) fn from_fn<F>(height: usize, width: usize, mut cell_type: F) -> Self
    where
        F: FnMut(Coord) -> CellType,
    {
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                cells.push(Cell::new(cell_type((row, col))));
            }
        }
        Generation {
            height,
            width,
            cells: cells.into_boxed_slice(),
        }
        .link_neighbours()
    }

    /// Links the cells to the cells right above, below, left and right of
    /// them.
    ///
    /// Cells on the edges get `None` for the directions leaving the grid.
    /// Running it again on the same grid gives the same links.
    fn link_neighbours(mut self) -> Self {
        for row in 0..self.height {
            for col in 0..self.width {
                let links = NeighbourLinks {
                    up: self.offset((row, col), -1, 0),
                    down: self.offset((row, col), 1, 0),
                    left: self.offset((row, col), 0, -1),
                    right: self.offset((row, col), 0, 1),
                };
                let index = self.index((row, col));
                self.cells[index].neighbours = links;
            }
        }
        trace!("linked a {}x{} generation", self.height, self.width);
        self
    }

    /// A link to the cell `(dr, dc)` away from `coord`, if it is in the grid.
    fn offset(&self, (row, col): Coord, dr: isize, dc: isize) -> Option<Link> {
        let row = row.checked_add_signed(dr)?;
        let col = col.checked_add_signed(dc)?;
        if row < self.height && col < self.width {
            Some((u16::try_from(row).ok()?, u16::try_from(col).ok()?))
        } else {
            None
        }
    }

    #[inline]
    fn index(&self, (row, col): Coord) -> usize {
        row * self.width + col
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Finds a cell by its coordinates.
    pub fn find_cell(&self, coord: Coord) -> Option<&Cell> {
        let (row, col) = coord;
        if row < self.height && col < self.width {
            Some(&self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// The cell at some coordinates which are known to be in the grid,
    /// e.g. taken from a link.
    #[inline]
    pub(crate) fn cell(&self, coord: Coord) -> &Cell {
        &self.cells[self.index(coord)]
    }

    /// The cell a link points to.
    #[inline]
    pub(crate) fn linked(&self, (row, col): Link) -> &Cell {
        self.cell((usize::from(row), usize::from(col)))
    }

    /// Gets the type of a cell. Returns `None` if there is no such cell.
    pub fn cell_type(&self, coord: Coord) -> Option<CellType> {
        self.find_cell(coord).map(Cell::cell_type)
    }

    /// The cells surrounding a cell.
    ///
    /// Besides the four linked neighbours, the diagonal cells are reached
    /// through the left and right links of the cells above and below. So
    /// when there is no cell above (or below), both diagonals on that side
    /// are missing as well.
    pub fn surrounding(&self, coord: Coord) -> impl Iterator<Item = &Cell> + '_ {
        let links = self
            .find_cell(coord)
            .map(|cell| cell.neighbours)
            .unwrap_or_default();
        let up = links.up.map(|link| self.linked(link).neighbours);
        let down = links.down.map(|link| self.linked(link).neighbours);
        let slots = [
            links.up,
            up.and_then(|n| n.left),
            up.and_then(|n| n.right),
            links.down,
            down.and_then(|n| n.left),
            down.and_then(|n| n.right),
            links.left,
            links.right,
        ];
        slots.into_iter().flatten().map(move |link| self.linked(link))
    }

    /// Number of green cells surrounding a cell.
    pub fn green_neighbours(&self, coord: Coord) -> usize {
        self.surrounding(coord)
            .filter(|cell| cell.cell_type().is_green())
            .count()
    }

    /// Number of green cells in the whole generation.
    pub fn green_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.cell_type().is_green())
            .count()
    }

    /// Iterates over the rows, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }
}
