//! Advancing a board by one generation.

use crate::{
    board::Board, config::Boundary, error::Error, neighborhood::count_unchecked,
    rules::next_state,
};

/// Computes the next generation of `current` into `next`.
///
/// Every cell of `next` is overwritten, so its previous content does not
/// matter. Since `current` is borrowed immutably and `next` mutably, the two
/// buffers can never alias.
///
/// Returns a [`DimensionMismatch`](Error::DimensionMismatch) if the two boards
/// have different shapes. In that case `next` is untouched.
pub fn advance(current: &Board, next: &mut Board, boundary: Boundary) -> Result<(), Error> {
    if current.dimensions() != next.dimensions() {
        return Err(Error::DimensionMismatch(
            current.dimensions(),
            next.dimensions(),
        ));
    }
    advance_unchecked(current, next, boundary);
    Ok(())
}

/// Computes the next generation, assuming both boards have the same shape.
pub(crate) fn advance_unchecked(current: &Board, next: &mut Board, boundary: Boundary) {
    for r in 0..current.rows() {
        for c in 0..current.cols() {
            let count = count_unchecked(current, r, c, boundary);
            next.set_unchecked(r, c, next_state(count, current.get_unchecked(r, c)));
        }
    }
}
