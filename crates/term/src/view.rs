//! CanvasView: maps a presented [`PixelCanvas`] into a terminal framebuffer.
//!
//! Each terminal cell shows two vertically stacked pixel blocks with the upper
//! half block glyph: the foreground paints the top block, the background the
//! bottom one. At scale `s` a cell covers `s` pixels across and `2 * s` down,
//! so the default scale of 2 turns the 128x160 panel into 64x40 cells.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::PixelCanvas;
use crate::core::Game;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, BACKGROUND};

const HALF_BLOCK: char = '▀';

/// Rows below the canvas used for the status text.
pub const STATUS_ROWS: u16 = 2;

/// Score readout shown under the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusLine {
    pub score: u32,
    pub level: u8,
    pub lines: u16,
    pub game_over: bool,
}

impl StatusLine {
    pub fn from_game<R>(game: &Game<R>) -> Self {
        let score = game.score();
        Self {
            score: score.score,
            level: score.level,
            lines: score.cleared_lines,
            game_over: game.is_game_over(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasView {
    scale: u16,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self { scale: 2 }
    }
}

impl CanvasView {
    /// `scale` is clamped to `1..=4`.
    pub fn new(scale: u16) -> Self {
        Self {
            scale: scale.clamp(1, 4),
        }
    }

    pub fn scale(&self) -> u16 {
        self.scale
    }

    /// Framebuffer size needed for `canvas`, status rows included.
    pub fn size_for(&self, canvas: &PixelCanvas) -> (u16, u16) {
        let cols = canvas.width().div_ceil(self.scale);
        let rows = canvas.height().div_ceil(2 * self.scale);
        (cols, rows + STATUS_ROWS)
    }

    /// Render the presented canvas and the status rows into `fb`.
    ///
    /// Reuses `fb`'s allocation; it is only resized when the scale changes.
    pub fn render_into(&self, canvas: &PixelCanvas, status: &StatusLine, fb: &mut FrameBuffer) {
        let (cols, rows) = self.size_for(canvas);
        fb.resize(cols, rows);
        fb.clear(CellStyle::default().into_cell(' '));

        let pixel_rows = rows - STATUS_ROWS;
        for row in 0..pixel_rows {
            for col in 0..cols {
                let x = col * self.scale;
                let top = self.sample(canvas, x, row * 2 * self.scale);
                let bottom = self.sample(canvas, x, row * 2 * self.scale + self.scale);
                fb.set(col, row, CellStyle::new(top, bottom).into_cell(HALF_BLOCK));
            }
        }

        self.draw_status(fb, pixel_rows, status);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, canvas: &PixelCanvas, status: &StatusLine) -> FrameBuffer {
        let (cols, rows) = self.size_for(canvas);
        let mut fb = FrameBuffer::new(cols, rows);
        self.render_into(canvas, status, &mut fb);
        fb
    }

    /// Color of the `scale x scale` block at `(x, y)`.
    ///
    /// Any non-background pixel wins, so one-pixel frame lines survive downscaling.
    fn sample(&self, canvas: &PixelCanvas, x: u16, y: u16) -> Rgb {
        let mut first = None;
        for dy in 0..self.scale {
            for dx in 0..self.scale {
                let Some(px) = canvas.pixel(x + dx, y + dy) else {
                    continue;
                };
                if px != BACKGROUND {
                    return px;
                }
                first.get_or_insert(px);
            }
        }
        first.unwrap_or(Rgb::BLACK)
    }

    fn draw_status(&self, fb: &mut FrameBuffer, y: u16, status: &StatusLine) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut x = 0;
        for (name, n) in [
            ("SCORE ", status.score),
            ("LV ", status.level as u32),
            ("LINES ", status.lines as u32),
        ] {
            fb.put_str(x, y, name, label);
            x += name.len() as u16;
            x += put_u32(fb, x, y, n, value) + 1;
        }

        let hint = if status.game_over {
            "GAME OVER  r restart  q quit"
        } else {
            "<> move  z/x rotate  q quit"
        };
        let style = if status.game_over { label } else { value };
        fb.put_str(0, y + 1, hint, style);
    }
}

/// Write `n` in decimal without allocating. Returns the number of digits.
fn put_u32(fb: &mut FrameBuffer, x: u16, y: u16, mut n: u32, style: CellStyle) -> u16 {
    let mut digits = [0u8; 10];
    let mut len = 0;
    loop {
        digits[len] = b'0' + (n % 10) as u8;
        len += 1;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    for (i, d) in digits[..len].iter().rev().enumerate() {
        fb.set(x + i as u16, y, style.into_cell(*d as char));
    }
    len as u16
}
