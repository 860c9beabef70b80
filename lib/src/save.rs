//! Saves the simulation.

use crate::{
    board::Board, cells::Coord, config::Config, error::Error, simulation::Simulation,
};
use serde::{Deserialize, Serialize};

/// A representation of the simulation which can be easily serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationSer {
    /// Number of generations computed so far.
    pub generation: u64,

    /// Living cells in the current generation.
    pub alive_cells: Vec<Coord>,

    /// Simulation configuration.
    ///
    /// Its [`alive_cells`](Config#structfield.alive_cells) are the living
    /// cells of the initial board.
    pub config: Config,
}

impl SimulationSer {
    /// Restores the simulation from the `SimulationSer`.
    pub fn simulation(&self) -> Result<Simulation, Error> {
        self.config.check_fps()?;
        let board =
            Board::with_alive_cells(self.config.rows, self.config.cols, &self.alive_cells)?;
        let mut simulation =
            Simulation::new(board, self.config.iterations, self.config.boundary)?;
        simulation.set_generation(self.generation);
        Ok(simulation)
    }
}

impl Simulation {
    /// Saves the simulation as a `SimulationSer`.
    ///
    /// `config` is the configuration the simulation was created from.
    pub fn ser(&self, config: &Config) -> SimulationSer {
        let (rows, cols) = self.board().dimensions();
        SimulationSer {
            generation: self.generation(),
            alive_cells: self.board().alive_cells().collect(),
            config: Config {
                rows,
                cols,
                iterations: self.iterations(),
                boundary: self.boundary(),
                ..config.clone()
            },
        }
    }
}
