//! Collaborator interfaces
//!
//! The engine never touches hardware. Everything it needs from the outside world
//! comes through these four traits: a pixel display, debounced command flags, a
//! random source and a millisecond clock.

use crate::types::{Command, Rgb};

/// Pixel drawing surface (the TFT sprite on the device).
///
/// Coordinates are display pixels with the origin in the top-left corner.
/// Drawing happens into a back buffer; [`DisplaySurface::present`] pushes it
/// to the panel.
pub trait DisplaySurface {
    fn draw_line(&mut self, x1: u16, y1: u16, x2: u16, y2: u16, color: Rgb);

    fn draw_filled_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb);

    fn fill(&mut self, color: Rgb);

    fn present(&mut self);
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for &mut D {
    fn draw_line(&mut self, x1: u16, y1: u16, x2: u16, y2: u16, color: Rgb) {
        (**self).draw_line(x1, y1, x2, y2, color)
    }

    fn draw_filled_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Rgb) {
        (**self).draw_filled_rect(x, y, w, h, color)
    }

    fn fill(&mut self, color: Rgb) {
        (**self).fill(color)
    }

    fn present(&mut self) {
        (**self).present()
    }
}

/// Pending player commands, set asynchronously by the input side.
///
/// `take` must read and clear the pending flag in one step so an edge that
/// arrives concurrently is either consumed now or kept for the next tick.
pub trait InputSource {
    /// Consume `command` if it is pending.
    fn take(&self, command: Command) -> bool;
}

/// Uniform random numbers for shape selection.
pub trait RandomSource {
    /// Integer in `[0, n)`. `n` is never zero.
    fn next_uniform(&mut self, n: u32) -> u32;
}

/// Monotonic millisecond clock. Wraps at `u32::MAX`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

impl<F: Fn() -> u32> Clock for F {
    fn now_ms(&self) -> u32 {
        self()
    }
}
