//! PixelCanvas: an in-memory stand-in for the TFT sprite.
//!
//! Drawing goes to a back buffer. [`DisplaySurface::present`] copies it to the
//! front buffer, which is what the terminal view reads, so a half-painted frame
//! is never shown.

use crate::core::DisplaySurface;
use crate::types::{Rgb, DISPLAY_HEIGHT, DISPLAY_WIDTH};

#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u16,
    height: u16,
    back: Vec<Rgb>,
    front: Vec<Rgb>,
    presents: u32,
}

impl PixelCanvas {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            back: vec![Rgb::BLACK; len],
            front: vec![Rgb::BLACK; len],
            presents: 0,
        }
    }

    /// Canvas with the panel's 128x160 geometry.
    pub fn panel() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of completed frames.
    pub fn presents(&self) -> u32 {
        self.presents
    }

    /// Presented pixel at `(x, y)`.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.front[i])
    }

    /// Pixel in the frame being drawn.
    pub fn back_pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.back[i])
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline(always)]
    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return;
        }
        if let Some(i) = self.idx(x as u16, y as u16) {
            self.back[i] = color;
        }
    }
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::panel()
    }
}

impl DisplaySurface for PixelCanvas {
    /// Bresenham line, both endpoints included, clipped to the canvas.
    fn draw_line(&mut self, x1: u16, y1: u16, x2: u16, y2: u16, color: Rgb) {
        let (mut x, mut y) = (x1 as i32, y1 as i32);
        let (x2, y2) = (x2 as i32, y2 as i32);
        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x, y, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_filled_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y..y_end {
            let row = py as usize * self.width as usize;
            for px in x..x_end {
                self.back[row + px as usize] = color;
            }
        }
    }

    fn fill(&mut self, color: Rgb) {
        self.back.fill(color);
    }

    fn present(&mut self) {
        self.front.copy_from_slice(&self.back);
        self.presents = self.presents.wrapping_add(1);
    }
}
