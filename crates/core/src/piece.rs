//! Piece module - tetromino shape table and the active piece value
//!
//! A [`Piece`] is a plain `Copy` value: a centre on the grid plus four offsets.
//! Every transformation ([`Piece::translated`], [`Piece::rotated`]) returns a new
//! piece and leaves the receiver untouched, so callers can build a candidate,
//! validate it, and only then overwrite the active piece.
//!
//! Rotation is a fixed quarter turn of each offset around the centre, with no
//! recentring and no wall kicks. The O piece never rotates.

use crate::types::{Direction, Rgb, ShapeKind, SPAWN_CENTER, SQUARE_COUNT};

/// Offset of a single square relative to the piece centre
pub type SquareOffset = (i8, i8);

/// Shape of a piece - 4 square offsets from the piece centre
pub type PieceShape = [SquareOffset; SQUARE_COUNT];

/// Spawn orientation of each shape, `y` pointing down.
pub fn shape_offsets(kind: ShapeKind) -> PieceShape {
    match kind {
        // Horizontal bar on the row above the centre.
        ShapeKind::I => [(-2, -1), (-1, -1), (0, -1), (1, -1)],
        ShapeKind::J => [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        ShapeKind::L => [(-1, 0), (0, 0), (1, 0), (1, -1)],
        ShapeKind::O => [(-1, 0), (0, 0), (-1, 1), (0, 1)],
        ShapeKind::S => [(1, -1), (0, -1), (0, 0), (-1, 0)],
        ShapeKind::T => [(-1, 0), (0, 0), (0, -1), (1, 0)],
        ShapeKind::Z => [(-1, -1), (0, -1), (0, 0), (1, 0)],
    }
}

/// Rotate a single offset a quarter turn around the origin.
///
/// `Left` maps `(x, y)` to `(-y, x)`; `Right` is the inverse, `(y, -x)`.
#[inline]
pub fn rotate_offset((x, y): SquareOffset, direction: Direction) -> SquareOffset {
    match direction {
        Direction::Left => (-y, x),
        Direction::Right => (y, -x),
    }
}

/// A tetromino placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: ShapeKind,
    pub center: (i8, i8),
    pub offsets: PieceShape,
    pub color: Rgb,
}

impl Piece {
    /// Create a piece of `shape` at the spawn centre in its spawn orientation.
    pub fn spawn(shape: ShapeKind, color: Rgb) -> Self {
        Self {
            shape,
            center: SPAWN_CENTER,
            offsets: shape_offsets(shape),
            color,
        }
    }

    /// Spawn with the shape's own display color.
    pub fn new(shape: ShapeKind) -> Self {
        Self::spawn(shape, shape.color())
    }

    /// Copy of this piece with the centre moved by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            center: (
                self.center.0.saturating_add(dx),
                self.center.1.saturating_add(dy),
            ),
            ..*self
        }
    }

    /// Copy of this piece turned a quarter turn in `direction`.
    ///
    /// The O piece comes back unchanged.
    #[must_use]
    pub fn rotated(&self, direction: Direction) -> Self {
        if self.shape == ShapeKind::O {
            return *self;
        }

        let mut offsets = self.offsets;
        for offset in &mut offsets {
            *offset = rotate_offset(*offset, direction);
        }

        Self { offsets, ..*self }
    }

    /// Grid coordinates of the four squares, `center + offset`.
    ///
    /// Values may lie outside the grid for candidates; see [`crate::collision::is_valid`].
    pub fn occupied_cells(&self) -> [(i8, i8); SQUARE_COUNT] {
        let (cx, cy) = self.center;
        self.offsets
            .map(|(dx, dy)| (cx.saturating_add(dx), cy.saturating_add(dy)))
    }

    /// Lowest grid row this piece occupies (largest `y`).
    pub fn bottom_row(&self) -> i8 {
        self.occupied_cells()
            .iter()
            .map(|&(_, y)| y)
            .max()
            .unwrap_or(self.center.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut cells: [(i8, i8); SQUARE_COUNT]) -> [(i8, i8); SQUARE_COUNT] {
        cells.sort_unstable();
        cells
    }

    #[test]
    fn test_spawn_places_shape_at_spawn_center() {
        let piece = Piece::spawn(ShapeKind::T, Rgb::PURPLE);
        assert_eq!(piece.center, SPAWN_CENTER);
        assert_eq!(piece.offsets, shape_offsets(ShapeKind::T));
        assert_eq!(piece.color, Rgb::PURPLE);
        assert_eq!(
            sorted(piece.occupied_cells()),
            sorted([(3, 1), (4, 1), (4, 0), (5, 1)])
        );
    }

    #[test]
    fn test_every_shape_has_four_distinct_squares() {
        for kind in ShapeKind::ALL {
            let cells = sorted(Piece::new(kind).occupied_cells());
            for pair in cells.windows(2) {
                assert_ne!(pair[0], pair[1], "{:?} repeats a square", kind);
            }
        }
    }

    #[test]
    fn test_spawn_cells_fit_the_top_rows() {
        for kind in ShapeKind::ALL {
            for (x, y) in Piece::new(kind).occupied_cells() {
                assert!((0..10).contains(&x), "{:?} x={}", kind, x);
                assert!((0..3).contains(&y), "{:?} y={}", kind, y);
            }
        }
    }

    #[test]
    fn test_translated_does_not_mutate() {
        let piece = Piece::new(ShapeKind::L);
        let moved = piece.translated(-1, 2);

        assert_eq!(piece.center, SPAWN_CENTER);
        assert_eq!(moved.center, (SPAWN_CENTER.0 - 1, SPAWN_CENTER.1 + 2));
        assert_eq!(moved.offsets, piece.offsets);
    }

    #[test]
    fn test_rotated_applies_quarter_turn() {
        let piece = Piece::new(ShapeKind::J);
        let left = piece.rotated(Direction::Left);
        let right = piece.rotated(Direction::Right);

        assert_eq!(left.offsets, [(1, -1), (0, -1), (0, 0), (0, 1)]);
        assert_eq!(right.offsets, [(-1, 1), (0, 1), (0, 0), (0, -1)]);
        assert_eq!(left.center, piece.center);
        assert_eq!(piece.offsets, shape_offsets(ShapeKind::J));
    }

    #[test]
    fn test_o_piece_never_rotates() {
        let piece = Piece::new(ShapeKind::O);
        assert_eq!(piece.rotated(Direction::Left), piece);
        assert_eq!(piece.rotated(Direction::Right), piece);
    }

    #[test]
    fn test_four_turns_are_identity() {
        for kind in ShapeKind::ALL {
            let piece = Piece::new(kind);
            let mut turned = piece;
            for _ in 0..4 {
                turned = turned.rotated(Direction::Right);
            }
            assert_eq!(turned, piece);
        }
    }

    #[test]
    fn test_bottom_row() {
        assert_eq!(Piece::new(ShapeKind::O).bottom_row(), 2);
        assert_eq!(Piece::new(ShapeKind::I).bottom_row(), 0);
    }
}
