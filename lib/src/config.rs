//! Simulation configuration.

use crate::{
    cells::CellType,
    error::Error,
    input::parse_row,
    simulation::{Simulation, DEFAULT_MAX_CELLS},
};
use educe::Educe;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The simulation will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Height.
    #[educe(Default = 3)]
    pub height: usize,

    /// Width.
    #[educe(Default = 3)]
    pub width: usize,

    /// Generation zero, one string of `0` and `1` per row.
    pub rows: Vec<String>,

    /// Row of the observed cell.
    pub x: usize,

    /// Column of the observed cell.
    pub y: usize,

    /// Number of generations to simulate after generation zero.
    pub generations: u64,

    /// Upper bound for the number of cells kept in the history,
    /// `height * width * (generations + 1)`.
    #[educe(Default(expression = "DEFAULT_MAX_CELLS"))]
    pub max_cells: u64,

    /// Seed for a random generation zero.
    ///
    /// Only used when [`rows`](#structfield.rows) is empty.
    pub seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(height: usize, width: usize) -> Self {
        Config {
            height,
            width,
            ..Config::default()
        }
    }

    /// Sets the size.
    pub fn set_size(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// Sets the rows of generation zero.
    pub fn set_rows<I, S>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows = rows.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the observed cell and the number of generations.
    pub fn set_observed_cell(mut self, x: usize, y: usize, generations: u64) -> Self {
        self.x = x;
        self.y = y;
        self.generations = generations;
        self
    }

    /// Sets the upper bound for the number of cells in the history.
    pub fn set_max_cells(mut self, max_cells: u64) -> Self {
        self.max_cells = max_cells;
        self
    }

    /// Sets the seed for a random generation zero.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// A random generation zero, each cell green with probability 1/2.
    ///
    /// The same seed always gives the same rows.
    fn random_rows(&self, seed: u64) -> Vec<Vec<CellType>> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..self.height)
            .map(|_| {
                (0..self.width)
                    .map(|_| {
                        if rng.gen() {
                            CellType::Green
                        } else {
                            CellType::Red
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Creates a new simulation from the configuration, with generation zero
    /// finalized and the observed cell set.
    pub fn simulation(&self) -> Result<Simulation, Error> {
        let mut simulation = Simulation::with_max_cells(self.max_cells);
        simulation.init_grid(self.height, self.width)?;
        match self.seed {
            Some(seed) if self.rows.is_empty() => {
                debug!("generation zero from seed {}", seed);
                for (row, cells) in self.random_rows(seed).iter().enumerate() {
                    simulation.load_cells(row, cells)?;
                }
            }
            _ => {
                for (row, line) in self.rows.iter().enumerate() {
                    let cells = parse_row(row, line, self.width)?;
                    simulation.load_cells(row, &cells)?;
                }
            }
        }
        simulation.finalize_generation_zero()?;
        simulation.set_observed_cell(self.x, self.y, self.generations)?;
        Ok(simulation)
    }

    /// Creates a simulation and runs it.
    pub fn run(&self) -> Result<usize, Error> {
        self.simulation()?.run()
    }
}
