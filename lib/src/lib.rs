//! The generation engine of GreenVsRed, a two-state cellular automaton.
//!
//! Cells are either [`Green`](CellType::Green) or [`Red`](CellType::Red).
//! A cell becomes green with 3 or 6 green cells around it, keeps its type
//! with 2, and becomes red otherwise. The result of a run is the number of
//! generations in which an observed cell was green.
//!
//! ```
//! use green_vs_red_lib::Config;
//!
//! let config = Config::new(3, 3)
//!     .set_rows(["000", "111", "000"])
//!     .set_observed_cell(0, 1, 10);
//! assert_eq!(config.run().unwrap(), 5);
//! ```

mod cells;
mod config;
mod error;
mod generation;
mod history;
pub mod input;
mod observe;
mod rules;
mod simulation;

pub use cells::{Cell, CellType, Coord, Link, NeighbourLinks};
pub use config::Config;
pub use error::Error;
pub use generation::Generation;
pub use history::GenerationHistory;
pub use observe::ObservedCell;
pub use rules::GreenVsRed;
pub use simulation::{Simulation, DEFAULT_MAX_CELLS, MAX_SIDE};
