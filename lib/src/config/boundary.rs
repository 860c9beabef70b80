//! How cells on the edges of the board see their neighbors.

use educe::Educe;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The boundary policy of the board.
///
/// It is fixed for a whole simulation run.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Boundary {
    /// `wrap`.
    ///
    /// The board is a torus: each edge is adjacent to the opposite edge,
    /// and each corner to the other three corners.
    #[educe(Default)]
    #[cfg_attr(feature = "serde", serde(rename = "wrap"))]
    Wrap,

    /// `nowrap`.
    ///
    /// Cells beyond the edges do not exist, and are excluded from
    /// the neighbor count. A corner cell has 3 neighbors, a cell
    /// on an edge has 5.
    #[cfg_attr(feature = "serde", serde(rename = "nowrap"))]
    Bounded,
}

impl FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrap" => Ok(Boundary::Wrap),
            "nowrap" => Ok(Boundary::Bounded),
            _ => Err(format!("'{}' is not a valid boundary, expected wrap or nowrap", s)),
        }
    }
}

impl Display for Boundary {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Boundary::Wrap => "wrap",
            Boundary::Bounded => "nowrap",
        };
        write!(f, "{}", s)?;
        Ok(())
    }
}
