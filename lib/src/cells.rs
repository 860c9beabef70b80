//! Cells on the board.

use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The Dead state.
    #[educe(Default)]
    Dead,
    /// The Alive state.
    Alive,
}

pub use self::State::{Alive as ALIVE, Dead as DEAD};

impl State {
    /// Whether the state is [`ALIVE`].
    #[inline]
    pub fn is_alive(self) -> bool {
        self == ALIVE
    }

    /// The character used when displaying the board.
    ///
    /// `@` for living cells, `-` for dead cells.
    #[inline]
    pub fn to_char(self) -> char {
        match self {
            ALIVE => '@',
            DEAD => '-',
        }
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
///
/// The coordinates are signed, so that a coordinate read from
/// an input file can be negative and rejected by the board.
pub type Coord = (isize, isize);
