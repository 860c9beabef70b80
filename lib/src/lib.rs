//! __golsim__ simulates Conway's Game of Life on a finite board.
//!
//! The board is either wrapped into a torus, or bounded,
//! in which case cells beyond the edges do not exist.
//!
//! # Example
//!
//! ```rust
//! use golsim_lib::{Boundary, Config, ALIVE, DEAD};
//!
//! // A blinker.
//! let config = Config::new(5, 5, 1)
//!     .set_boundary(Boundary::Wrap)
//!     .set_alive_cells(vec![(1, 0), (1, 1), (1, 2)]);
//! let mut simulation = config.simulation().unwrap();
//! let board = simulation.run();
//!
//! assert_eq!(board.get((0, 1)), Ok(ALIVE));
//! assert_eq!(board.get((1, 0)), Ok(DEAD));
//! assert_eq!(board.population(), 3);
//! ```

mod board;
mod cells;
mod config;
mod error;
mod generation;
mod neighborhood;
mod rules;
#[cfg(feature = "serde")]
mod save;
mod simulation;

pub use board::Board;
pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::{Boundary, Config, Speed};
pub use error::Error;
pub use generation::advance;
pub use neighborhood::count_live_neighbors;
pub use rules::next_state;
#[cfg(feature = "serde")]
pub use save::SimulationSer;
pub use simulation::{run, run_with, Simulation, Status};
