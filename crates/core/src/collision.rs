//! Collision checker
//!
//! A candidate piece is valid when all four squares are inside the grid and
//! none of them sits on a locked square. The check does not say which rule
//! failed; callers only commit or drop the candidate.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{COLUMNS, ROWS};

/// Whether `(x, y)` lies inside the grid.
#[inline]
pub fn in_bounds(x: i8, y: i8) -> bool {
    x >= 0 && (x as usize) < COLUMNS && y >= 0 && (y as usize) < ROWS
}

/// True iff every square of `piece` is in bounds and on an empty grid cell.
pub fn is_valid(piece: &Piece, grid: &Grid) -> bool {
    piece
        .occupied_cells()
        .iter()
        .all(|&(x, y)| in_bounds(x, y) && !grid.is_filled(x as usize, y as usize))
}
