//! The rule of Conway's Game of Life, `B3/S23`.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::cells::{State, ALIVE, DEAD};

/// The state of a cell in the next generation, given the number of its
/// living neighbors and its current state.
///
/// * A living cell survives with 2 or 3 living neighbors, and dies otherwise.
/// * A dead cell becomes alive with exactly 3 living neighbors.
#[inline]
pub fn next_state(live_neighbors: u8, state: State) -> State {
    match (state, live_neighbors) {
        (ALIVE, 2) | (ALIVE, 3) => ALIVE,
        (DEAD, 3) => ALIVE,
        _ => DEAD,
    }
}
