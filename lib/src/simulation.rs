//! The simulation loop.

use crate::{board::Board, config::Boundary, error::Error, generation::advance_unchecked};
use log::{debug, trace};
use std::mem;

/// Status of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// No generation has been computed yet.
    Idle,
    /// Some, but not all, generations have been computed.
    Running,
    /// All generations have been computed.
    Done,
}

/// A simulation of a fixed number of generations.
///
/// It owns two boards of the same shape: the current generation,
/// and a scratch buffer for the next one. After each step the two
/// buffers are swapped, so no board is allocated during the run.
#[derive(Clone, Debug)]
pub struct Simulation {
    /// The current generation.
    current: Board,

    /// The scratch buffer for the next generation.
    ///
    /// Its content is meaningless between two steps.
    next: Board,

    /// The boundary policy.
    boundary: Boundary,

    /// Total number of generations to run.
    iterations: u64,

    /// Number of generations computed so far.
    generation: u64,
}

impl Simulation {
    /// Creates a new simulation starting from `board`.
    ///
    /// Returns an [`AllocationError`](Error::AllocationError) if the scratch
    /// buffer cannot be allocated.
    pub fn new(board: Board, iterations: u64, boundary: Boundary) -> Result<Self, Error> {
        let (rows, cols) = board.dimensions();
        debug!(
            "new {}x{} simulation, {} generations, boundary {}",
            rows, cols, iterations, boundary
        );
        let next = board.blank_like()?;
        Ok(Simulation {
            current: board,
            next,
            boundary,
            iterations,
            generation: 0,
        })
    }

    /// The current generation.
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Consumes the simulation and returns the current generation.
    pub fn into_board(self) -> Board {
        self.current
    }

    /// The boundary policy.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Total number of generations to run.
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of generations still to compute.
    pub fn remaining(&self) -> u64 {
        self.iterations.saturating_sub(self.generation)
    }

    /// Sets the number of generations computed so far.
    ///
    /// Used when restoring a saved simulation.
    #[cfg(feature = "serde")]
    pub(crate) fn set_generation(&mut self, generation: u64) {
        self.generation = generation.min(self.iterations);
    }

    /// Status of the simulation.
    pub fn status(&self) -> Status {
        if self.generation >= self.iterations {
            Status::Done
        } else if self.generation == 0 {
            Status::Idle
        } else {
            Status::Running
        }
    }

    /// Computes one generation, whether or not the simulation is done.
    pub fn step(&mut self) {
        advance_unchecked(&self.current, &mut self.next, self.boundary);
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        trace!(
            "generation {}: {} living cells",
            self.generation,
            self.current.population()
        );
    }

    /// Runs all the remaining generations.
    pub fn run(&mut self) -> &Board {
        while self.status() != Status::Done {
            self.step();
        }
        debug!("simulation done after {} generations", self.generation);
        &self.current
    }

    /// Runs all the remaining generations, calling `observer` with the
    /// current board and its generation number before each step.
    ///
    /// An error from the observer stops the run immediately,
    /// and is returned unchanged.
    pub fn run_with<F, E>(&mut self, mut observer: F) -> Result<&Board, E>
    where
        F: FnMut(&Board, u64) -> Result<(), E>,
    {
        while self.status() != Status::Done {
            observer(&self.current, self.generation)?;
            self.step();
        }
        debug!("simulation done after {} generations", self.generation);
        Ok(&self.current)
    }
}

/// Runs `iterations` generations starting from `board`, and returns the last one.
///
/// `iterations == 0` returns `board` unchanged.
pub fn run(board: Board, iterations: u64, boundary: Boundary) -> Result<Board, Error> {
    let mut simulation = Simulation::new(board, iterations, boundary)?;
    simulation.run();
    Ok(simulation.into_board())
}

/// Like [`run`], but calls `observer` with each generation before it is
/// advanced. The last generation is not passed to the observer.
///
/// An error from the observer stops the run and is returned unchanged.
pub fn run_with<F, E>(
    board: Board,
    iterations: u64,
    boundary: Boundary,
    observer: F,
) -> Result<Board, E>
where
    F: FnMut(&Board, u64) -> Result<(), E>,
    E: From<Error>,
{
    let mut simulation = Simulation::new(board, iterations, boundary)?;
    simulation.run_with(observer)?;
    Ok(simulation.into_board())
}
