//! The board.

use crate::{
    cells::{Coord, State, ALIVE, DEAD},
    config::Boundary,
    error::Error,
};
use std::fmt::{self, Display, Formatter};

/// A rectangular grid of cells.
///
/// The cells are stored in a single row-major buffer.
/// The shape of a board never changes after its creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    /// Number of rows.
    rows: usize,

    /// Number of columns.
    cols: usize,

    /// The states of all cells, row by row.
    cells: Box<[State]>,
}

impl Board {
    /// Creates a board with all cells dead.
    ///
    /// Returns an [`AllocationError`](Error::AllocationError) if either
    /// dimension is not positive, or if the buffer cannot be allocated.
    pub fn new(rows: isize, cols: isize) -> Result<Self, Error> {
        if rows <= 0 || cols <= 0 {
            return Err(Error::AllocationError(rows, cols));
        }
        let cells = dead_cells(rows as usize, cols as usize)?;
        Ok(Board {
            rows: rows as usize,
            cols: cols as usize,
            cells,
        })
    }

    /// Creates a board whose living cells are exactly `alive_cells`.
    ///
    /// Duplicates are allowed.
    pub fn with_alive_cells<'a, I>(
        rows: isize,
        cols: isize,
        alive_cells: I,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a Coord>,
    {
        let mut board = Board::new(rows, cols)?;
        for &coord in alive_cells {
            board.set_alive(coord)?;
        }
        Ok(board)
    }

    /// Creates a dead board with the same shape as this one.
    pub(crate) fn blank_like(&self) -> Result<Self, Error> {
        Ok(Board {
            rows: self.rows,
            cols: self.cols,
            cells: dead_cells(self.rows, self.cols)?,
        })
    }

    /// The dimensions `(rows, cols)` of the board.
    #[inline]
    pub fn dimensions(&self) -> (isize, isize) {
        (self.rows as isize, self.cols as isize)
    }

    /// Finds the index of a cell in the buffer.
    fn index(&self, coord: Coord) -> Result<usize, Error> {
        let (r, c) = coord;
        if 0 <= r && (r as usize) < self.rows && 0 <= c && (c as usize) < self.cols {
            Ok(r as usize * self.cols + c as usize)
        } else {
            Err(Error::OutOfBoundsError(coord))
        }
    }

    /// Gets the state of a cell.
    pub fn get(&self, coord: Coord) -> Result<State, Error> {
        let index = self.index(coord)?;
        Ok(self.cells[index])
    }

    /// Sets the state of a cell.
    pub fn set_cell(&mut self, coord: Coord, state: State) -> Result<(), Error> {
        let index = self.index(coord)?;
        self.cells[index] = state;
        Ok(())
    }

    /// Sets a cell to [`ALIVE`].
    pub fn set_alive(&mut self, coord: Coord) -> Result<(), Error> {
        self.set_cell(coord, ALIVE)
    }

    /// Gets the state of a cell whose coordinates are known to be valid.
    #[inline]
    pub(crate) fn get_unchecked(&self, r: usize, c: usize) -> State {
        self.cells[r * self.cols + c]
    }

    /// Sets the state of a cell whose coordinates are known to be valid.
    #[inline]
    pub(crate) fn set_unchecked(&mut self, r: usize, c: usize, state: State) {
        self.cells[r * self.cols + c] = state;
    }

    /// Number of rows, as an index bound.
    #[inline]
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, as an index bound.
    #[inline]
    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|s| s.is_alive()).count()
    }

    /// Coordinates of all living cells, in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_alive())
            .map(move |(i, _)| ((i / cols) as isize, (i % cols) as isize))
    }

    /// Computes the next generation into a newly allocated board.
    ///
    /// Returns an [`AllocationError`](Error::AllocationError) if the new
    /// board cannot be allocated.
    ///
    /// See [`advance`](crate::advance) for a version that reuses a buffer.
    pub fn advance(&self, boundary: Boundary) -> Result<Board, Error> {
        let mut next = self.blank_like()?;
        crate::generation::advance_unchecked(self, &mut next, boundary);
        Ok(next)
    }

    /// Displays the board.
    ///
    /// * **Dead** cells are represented by `-`;
    /// * **Living** cells are represented by `@`.
    ///
    /// Each row is ended with a newline, and the board is followed
    /// by an empty line.
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity((self.cols + 1) * self.rows + 1);
        for row in self.cells.chunks(self.cols) {
            str.extend(row.iter().map(|s| s.to_char()));
            str.push('\n');
        }
        str.push('\n');
        str
    }
}

/// Allocates a buffer of `rows * cols` dead cells.
fn dead_cells(rows: usize, cols: usize) -> Result<Box<[State]>, Error> {
    let error = || Error::AllocationError(rows as isize, cols as isize);
    let size = rows.checked_mul(cols).ok_or_else(error)?;
    let mut cells = Vec::new();
    cells.try_reserve_exact(size).map_err(|_| error())?;
    cells.resize(size, DEAD);
    Ok(cells.into_boxed_slice())
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plaintext())
    }
}
