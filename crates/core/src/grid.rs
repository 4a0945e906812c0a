//! Grid module - the playfield
//!
//! The grid is a 10 x ROWS matrix of cells stored as a flat, row-major array so it
//! lives entirely on the stack. Coordinates are `(x, y)` with `y = 0` at the top
//! (spawn side) and `y = ROWS - 1` at the floor.
//!
//! Direct accessors treat out-of-range coordinates as a broken caller contract and
//! panic. Range checking for candidate pieces belongs to [`crate::collision`].

use arrayvec::ArrayVec;

use crate::types::{Rgb, BACKGROUND, COLUMNS, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = COLUMNS * ROWS;

/// A single playfield cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub filled: bool,
    pub color: Rgb,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        filled: false,
        color: BACKGROUND,
    };

    pub const fn filled(color: Rgb) -> Self {
        Self {
            filled: true,
            color,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// The playfield: `COLUMNS` x `ROWS` cells in row-major order (y * COLUMNS + x).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: usize, y: usize) -> usize {
        assert!(
            x < COLUMNS && y < ROWS,
            "grid access out of bounds: ({}, {})",
            x,
            y
        );
        y * COLUMNS + x
    }

    pub fn width(&self) -> usize {
        COLUMNS
    }

    pub fn height(&self) -> usize {
        ROWS
    }

    /// Cell at `(x, y)`. Panics when out of bounds.
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[Self::index(x, y)]
    }

    /// Whether `(x, y)` holds a locked square. Panics when out of bounds.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        self.cells[Self::index(x, y)].filled
    }

    /// Mark `(x, y)` as filled with `color`. Panics when out of bounds.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) {
        self.cells[Self::index(x, y)] = Cell::filled(color);
    }

    /// Check if a row is completely filled
    pub fn row_is_full(&self, row: usize) -> bool {
        self.row(row).iter().all(|cell| cell.filled)
    }

    /// Reset every cell of `row` to empty.
    pub fn clear_row(&mut self, row: usize) {
        let start = Self::index(0, row);
        self.cells[start..start + COLUMNS].fill(Cell::EMPTY);
    }

    /// Apply gravity after removing `from_row`.
    ///
    /// Every row from `from_row` up to row 1 receives a copy of the row above it,
    /// and the top row is emptied. Rows below `from_row` are untouched.
    pub fn shift_down(&mut self, from_row: usize) {
        let _ = Self::index(0, from_row);

        // copy_within handles the overlapping ranges
        for row in (1..=from_row).rev() {
            let src = (row - 1) * COLUMNS;
            let dst = row * COLUMNS;
            self.cells.copy_within(src..src + COLUMNS, dst);
        }

        self.clear_row(0);
    }

    /// Remove every full row and compact the grid, returning how many rows were removed.
    ///
    /// Full rows are all marked before anything moves, then removed from the top down.
    /// Removing a row only shifts rows with a smaller index, so the remaining marks
    /// (all further down) still point at the right rows and nothing is skipped or
    /// counted twice. A locked piece spans at most four rows, so reachable states
    /// report 0..=4.
    pub fn consolidate_full_rows(&mut self) -> u8 {
        let full: ArrayVec<usize, ROWS> = (0..ROWS).filter(|&row| self.row_is_full(row)).collect();

        for &row in &full {
            self.shift_down(row);
        }

        full.len() as u8
    }

    /// The cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = Self::index(0, row);
        &self.cells[start..start + COLUMNS]
    }

    /// Number of filled cells on the whole grid.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.filled).count()
    }

    /// Iterate over every filled cell as `(x, y, color)`.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.filled)
            .map(|(i, cell)| (i % COLUMNS, i / COLUMNS, cell.color))
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
