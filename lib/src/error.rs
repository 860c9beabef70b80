//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Unable to allocate a board of {0} rows and {1} columns.
    AllocationError(isize, isize),
    /// Cell at {0:?} is outside the board.
    OutOfBoundsError(Coord),
    /// Expected a board of shape {0:?}, found {1:?}.
    DimensionMismatch((isize, isize), (isize, isize)),
    /// Invalid initial state at line {0}: {1}.
    ParseError(usize, String),
    /// Frames per second should be positive.
    NonPositiveFps,
}
