//! Frame painting - grid and active piece onto a [`DisplaySurface`]
//!
//! Layout on the 128x160 panel:
//!
//! ```text
//!  x=3,4                      x=124,125
//!   ||  [cell][cell] ... [cell]  ||   <- row 0 at the top
//!   ||                           ||
//!   ||  [cell][cell] ... [cell]  ||   <- row ROWS-1
//!   =============================     <- floor, y=155..156
//! ```
//!
//! A cell is a `SQUARE_SIZE` square inside a `SQUARE_WIDTH` pitch, so a one
//! pixel gap of background separates neighbours.

use crate::game::Game;
use crate::ports::DisplaySurface;
use crate::types::{
    Rgb, BACKGROUND, DISPLAY_HEIGHT, FRAME_COLOR, ROWS, SQUARE_SIZE, SQUARE_WIDTH, X_LEFT,
    X_RIGHT, Y_BOTTOM,
};

/// Lower frame line (the floor the stack rests on).
pub const FLOOR_Y: u16 = DISPLAY_HEIGHT - Y_BOTTOM;

/// First pixel row of the well.
pub const WELL_TOP: u16 = FLOOR_Y - ROWS as u16 * SQUARE_WIDTH;

/// Top-left pixel of the square drawn for grid cell `(x, y)`.
pub const fn cell_origin(x: u16, y: u16) -> (u16, u16) {
    (X_LEFT + 2 + x * SQUARE_WIDTH, WELL_TOP + 1 + y * SQUARE_WIDTH)
}

/// Draw the double-width walls and floor.
pub fn paint_well<D: DisplaySurface + ?Sized>(display: &mut D) {
    for x in [X_LEFT, X_LEFT + 1, X_RIGHT - 1, X_RIGHT] {
        display.draw_line(x, WELL_TOP, x, FLOOR_Y, FRAME_COLOR);
    }
    for y in [FLOOR_Y - 1, FLOOR_Y] {
        display.draw_line(X_LEFT, y, X_RIGHT, y, FRAME_COLOR);
    }
}

fn paint_cell<D: DisplaySurface + ?Sized>(display: &mut D, x: u16, y: u16, color: Rgb) {
    let (px, py) = cell_origin(x, y);
    display.draw_filled_rect(px, py, SQUARE_SIZE, SQUARE_SIZE, color);
}

/// Paint one complete frame and present it.
///
/// Reads the game only. The background is cleared every frame, so nothing
/// from the previous frame survives.
pub fn paint_frame<R, D: DisplaySurface + ?Sized>(game: &Game<R>, display: &mut D) {
    display.fill(BACKGROUND);
    paint_well(display);

    for (x, y, color) in game.grid().filled_cells() {
        paint_cell(display, x as u16, y as u16, color);
    }

    if let Some(piece) = game.active() {
        for (x, y) in piece.occupied_cells() {
            // A valid piece is always in bounds; skip rather than wrap if not.
            if x >= 0 && y >= 0 {
                paint_cell(display, x as u16, y as u16, piece.color);
            }
        }
    }

    display.present();
}
