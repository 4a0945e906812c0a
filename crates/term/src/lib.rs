//! Terminal stand-in for the TFT panel.
//!
//! The game paints into a [`PixelCanvas`] exactly as it would paint the panel.
//! [`CanvasView`] turns the presented pixels into half-block terminal cells and
//! [`TerminalRenderer`] writes the changed cells with `crossterm`.
//!
//! Goals:
//! - Keep `core` unaware of the terminal
//! - Show pixel-level output, so frame and cell geometry can be checked by eye
//! - Write only what changed between frames

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod view;

pub use tft_tetris_core as core;
pub use tft_tetris_types as types;

pub use canvas::PixelCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{CanvasView, StatusLine, STATUS_ROWS};
