//! Simulation configuration.

use crate::{
    board::Board,
    cells::Coord,
    error::Error,
    simulation::Simulation,
};
use educe::Educe;

mod boundary;
mod parse;
mod speed;

pub use boundary::Boundary;
pub use speed::Speed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The initial board and the simulation will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of rows.
    #[educe(Default = 16)]
    pub rows: isize,

    /// Number of columns.
    #[educe(Default = 16)]
    pub cols: isize,

    /// Number of generations to run.
    pub iterations: u64,

    /// The boundary policy.
    pub boundary: Boundary,

    /// Whether to show every generation, not only the last one.
    pub show: bool,

    /// Frames per second when [`show`](#structfield.show) is `true`.
    ///
    /// `None` means no delay between frames.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fps: Option<u32>,

    /// Cells that are alive in the initial board.
    ///
    /// Duplicates are allowed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub alive_cells: Vec<Coord>,
}

impl Config {
    /// Sets up a new configuration with given size and number of generations.
    pub fn new(rows: isize, cols: isize, iterations: u64) -> Self {
        Config {
            rows,
            cols,
            iterations,
            ..Config::default()
        }
    }

    /// Sets the number of generations.
    pub fn set_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the boundary policy.
    pub fn set_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets whether to show every generation.
    pub fn set_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    /// Sets the frame rate.
    pub fn set_fps<T: Into<Option<u32>>>(mut self, fps: T) -> Self {
        self.fps = fps.into();
        self
    }

    /// Sets the frame rate from a [`Speed`].
    pub fn set_speed<T: Into<Option<Speed>>>(self, speed: T) -> Self {
        let fps = speed.into().map(Speed::fps);
        self.set_fps(fps)
    }

    /// Sets the initial living cells.
    pub fn set_alive_cells<I: IntoIterator<Item = Coord>>(mut self, alive_cells: I) -> Self {
        self.alive_cells = alive_cells.into_iter().collect();
        self
    }

    /// The frame rate as a [`Speed`], if any.
    pub fn speed(&self) -> Option<Speed> {
        self.fps.map(Speed::Fps)
    }

    /// Creates the initial board from the configuration.
    ///
    /// Returns an error if the size is not positive,
    /// or some living cell is outside the board.
    pub fn board(&self) -> Result<Board, Error> {
        Board::with_alive_cells(self.rows, self.cols, &self.alive_cells)
    }

    /// Checks the presentation parameters.
    pub(crate) fn check_fps(&self) -> Result<(), Error> {
        if self.show && self.fps == Some(0) {
            Err(Error::NonPositiveFps)
        } else {
            Ok(())
        }
    }

    /// Creates a new simulation from the configuration.
    pub fn simulation(&self) -> Result<Simulation, Error> {
        self.check_fps()?;
        Simulation::new(self.board()?, self.iterations, self.boundary)
    }
}
