//! The simulation context.

use crate::{
    cells::{CellType, Coord},
    error::Error,
    generation::Generation,
    history::GenerationHistory,
    observe::ObservedCell,
    rules::GreenVsRed,
};
use log::{debug, info, log_enabled, Level};

/// Height and width must both be smaller than this.
pub const MAX_SIDE: usize = 1000;

/// Default upper bound for the number of cells kept in the history.
///
/// Every generation is kept until the end of a run, so a run of `n`
/// generations on a `height` by `width` grid keeps `height * width * (n + 1)`
/// cells. About half a gigabyte with the default.
pub const DEFAULT_MAX_CELLS: u64 = 20_000_000;

/// Checks that `0 < height <= width < 1000`.
pub(crate) fn check_grid_size(height: usize, width: usize) -> Result<(), Error> {
    if height > 0 && height <= width && width < MAX_SIDE {
        Ok(())
    } else {
        Err(Error::GridSizeOutOfRange(height, width))
    }
}

/// Everything about one run of GreenVsRed.
///
/// Set it up in this order:
///
/// 1. [`init_grid`](Self::init_grid);
/// 2. [`load_row`](Self::load_row) or [`load_cells`](Self::load_cells)
///    for every row;
/// 3. [`finalize_generation_zero`](Self::finalize_generation_zero);
/// 4. [`set_observed_cell`](Self::set_observed_cell), at any point after
///    step 1;
///
/// and then call [`run`](Self::run).
#[derive(Clone, Debug)]
pub struct Simulation {
    /// The rule of the cellular automaton.
    rule: GreenVsRed,

    /// The history may keep at most this many cells.
    max_cells: u64,

    /// `(height, width)`, once the grid is initialized.
    dimensions: Option<(usize, usize)>,

    /// Rows of generation zero loaded so far.
    pending: Vec<Option<Box<[CellType]>>>,

    /// `None` until generation zero is finalized.
    history: Option<GenerationHistory>,

    /// The observed cell.
    observed: Option<ObservedCell>,
}

impl Default for Simulation {
    fn default() -> Self {
        Simulation::with_max_cells(DEFAULT_MAX_CELLS)
    }
}

impl Simulation {
    /// Creates an empty simulation.
    pub fn new() -> Self {
        Simulation::default()
    }

    /// Creates an empty simulation with another bound on the number of cells
    /// in the history.
    pub fn with_max_cells(max_cells: u64) -> Self {
        Simulation {
            rule: GreenVsRed,
            max_cells,
            dimensions: None,
            pending: Vec::new(),
            history: None,
            observed: None,
        }
    }

    /// Allocates an empty generation zero of the given size.
    ///
    /// Everything set up before is forgotten.
    pub fn init_grid(&mut self, height: usize, width: usize) -> Result<(), Error> {
        check_grid_size(height, width)?;
        self.dimensions = Some((height, width));
        self.pending = vec![None; height];
        self.history = None;
        self.observed = None;
        Ok(())
    }

    /// Checks that a row of length `len` can be loaded at index `row`.
    fn check_row(&self, row: usize, len: usize) -> Result<(), Error> {
        let (height, width) = self.dimensions.ok_or(Error::Uninitialized)?;
        if self.history.is_some() {
            return Err(Error::AlreadyFinalized);
        }
        if row >= height {
            return Err(Error::RowOutOfRange(row, height));
        }
        if len != width {
            return Err(Error::RowLengthMismatch {
                row,
                expected: width,
                found: len,
            });
        }
        Ok(())
    }

    /// Loads a row of generation zero, where `0` is red and `1` is green.
    ///
    /// Loading the same row twice keeps the last one.
    pub fn load_row(&mut self, row: usize, cells: &[u8]) -> Result<(), Error> {
        self.check_row(row, cells.len())?;
        let cells = cells
            .iter()
            .map(|&value| CellType::try_from(value))
            .collect::<Result<Box<[_]>, _>>()?;
        self.pending[row] = Some(cells);
        Ok(())
    }

    /// Loads a row of generation zero.
    pub fn load_cells(&mut self, row: usize, cells: &[CellType]) -> Result<(), Error> {
        self.check_row(row, cells.len())?;
        self.pending[row] = Some(cells.into());
        Ok(())
    }

    /// Links generation zero and starts the history with it.
    ///
    /// Every row must be loaded.
    pub fn finalize_generation_zero(&mut self) -> Result<(), Error> {
        let (height, width) = self.dimensions.ok_or(Error::Uninitialized)?;
        if self.history.is_some() {
            return Err(Error::AlreadyFinalized);
        }
        let rows = self
            .pending
            .iter()
            .enumerate()
            .map(|(i, row)| row.as_deref().ok_or(Error::MissingRow(i)))
            .collect::<Result<Vec<_>, _>>()?;
        let generation_zero = Generation::from_fn(height, width, |(row, col)| rows[row][col]);
        info!(
            "generation zero: {}x{}, {} green cells",
            height,
            width,
            generation_zero.green_count()
        );
        self.history = Some(GenerationHistory::new(generation_zero));
        self.pending = Vec::new();
        Ok(())
    }

    /// Sets the cell to observe at row `x`, column `y`, and the number of
    /// generations `n` to simulate.
    ///
    /// The `n + 1` generations of the history must fit in the cell budget.
    pub fn set_observed_cell(&mut self, x: usize, y: usize, n: u64) -> Result<(), Error> {
        let (height, width) = self.dimensions.ok_or(Error::Uninitialized)?;
        if x >= height || y >= width {
            return Err(Error::ObservedCellOutOfRange((x, y), height, width));
        }
        let cells = height as u128 * width as u128 * (u128::from(n) + 1);
        if cells > u128::from(self.max_cells) {
            return Err(Error::TooManyGenerations {
                generations: n,
                cells,
                max_cells: self.max_cells,
            });
        }
        self.observed = Some(ObservedCell::new(x, y, n));
        Ok(())
    }

    /// Simulates the requested number of generations, and returns in how
    /// many of them the observed cell was green, generation zero included.
    ///
    /// Running again starts over from generation zero.
    pub fn run(&mut self) -> Result<usize, Error> {
        let rule = self.rule;
        let observed = self.observed;
        let history = self.history.as_mut().ok_or(Error::NotFinalized)?;
        let observed = observed.ok_or(Error::NoObservedCell)?;

        history.reset();
        info!(
            "simulating {} generations, observing {:?}",
            observed.generations,
            observed.coord()
        );
        for step in 1..=observed.generations {
            let next = rule.step(history.last());
            if log_enabled!(Level::Debug) {
                debug!("generation {}: {} green cells", step, next.green_count());
            }
            history.push(next);
        }

        let count = observed.count_green(history);
        info!(
            "cell {:?} was green in {} of {} generations",
            observed.coord(),
            count,
            history.len()
        );
        Ok(count)
    }

    /// `(height, width)`, once the grid is initialized.
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        self.dimensions
    }

    /// The upper bound for the number of cells in the history.
    pub fn max_cells(&self) -> u64 {
        self.max_cells
    }

    /// The history, once generation zero is finalized.
    pub fn history(&self) -> Option<&GenerationHistory> {
        self.history.as_ref()
    }

    /// Generation zero, once it is finalized.
    pub fn generation_zero(&self) -> Option<&Generation> {
        self.history.as_ref().map(GenerationHistory::first)
    }

    /// The observed cell.
    pub fn observed_cell(&self) -> Option<ObservedCell> {
        self.observed
    }

    /// Gets the type of a cell in some generation of the history.
    pub fn cell_type(&self, generation: usize, coord: Coord) -> Option<CellType> {
        self.history
            .as_ref()?
            .get(generation)?
            .cell_type(coord)
    }
}
