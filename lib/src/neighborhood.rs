//! Counting living neighbors under a boundary policy.

use crate::{board::Board, cells::Coord, config::Boundary, error::Error};

/// Offsets of the eight cells in the Moore neighborhood, as `(row, column)`.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Resolves a neighbor index along one axis.
///
/// `len` is the length of the axis. Returns `None` if the neighbor does not
/// exist under the boundary policy.
#[inline]
fn resolve(i: usize, d: isize, len: usize, boundary: Boundary) -> Option<usize> {
    let n = i as isize + d;
    match boundary {
        Boundary::Wrap => Some(n.rem_euclid(len as isize) as usize),
        Boundary::Bounded => {
            if 0 <= n && (n as usize) < len {
                Some(n as usize)
            } else {
                None
            }
        }
    }
}

/// Counts the living neighbors of a cell whose coordinates are known to be valid.
///
/// Under [`Wrap`](Boundary::Wrap), every offset is taken modulo the shape of
/// the board. On a board with fewer than 3 rows or columns, several offsets
/// may lead to the same cell, or back to the cell itself; each distinct
/// neighbor is counted once, and the cell itself never.
///
/// Under [`Bounded`](Boundary::Bounded), neighbors outside the board are
/// excluded from the sum.
pub(crate) fn count_unchecked(board: &Board, r: usize, c: usize, boundary: Boundary) -> u8 {
    let (rows, cols) = (board.rows(), board.cols());
    if rows < 3 || cols < 3 {
        return count_distinct(board, r, c, boundary);
    }
    let mut count = 0;
    for &(dr, dc) in NBHD.iter() {
        if let (Some(nr), Some(nc)) = (
            resolve(r, dr, rows, boundary),
            resolve(c, dc, cols, boundary),
        ) {
            if board.get_unchecked(nr, nc).is_alive() {
                count += 1;
            }
        }
    }
    count
}

/// Like [`count_unchecked`], but skips offsets that lead back to the cell
/// itself or to a neighbor already counted.
///
/// Only needed on boards with fewer than 3 rows or columns.
fn count_distinct(board: &Board, r: usize, c: usize, boundary: Boundary) -> u8 {
    let (rows, cols) = (board.rows(), board.cols());
    let mut seen = [(0, 0); 8];
    let mut len = 0;
    let mut count = 0;
    for &(dr, dc) in NBHD.iter() {
        if let (Some(nr), Some(nc)) = (
            resolve(r, dr, rows, boundary),
            resolve(c, dc, cols, boundary),
        ) {
            if (nr, nc) == (r, c) || seen[..len].contains(&(nr, nc)) {
                continue;
            }
            seen[len] = (nr, nc);
            len += 1;
            if board.get_unchecked(nr, nc).is_alive() {
                count += 1;
            }
        }
    }
    count
}

/// Counts the living neighbors of a cell under the boundary policy.
///
/// The result is always in `0..=8`. Under [`Bounded`](Boundary::Bounded),
/// corner cells have at most 3 neighbors, and other cells on the edges have
/// at most 5.
///
/// Returns an [`OutOfBoundsError`](Error::OutOfBoundsError) if the cell is
/// not on the board.
pub fn count_live_neighbors(board: &Board, coord: Coord, boundary: Boundary) -> Result<u8, Error> {
    board.get(coord)?;
    Ok(count_unchecked(
        board,
        coord.0 as usize,
        coord.1 as usize,
        boundary,
    ))
}
