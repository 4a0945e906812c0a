//! TFT Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name, `tft_tetris::{core, input,
//! term, types}`, and adds the [`host`] pieces the terminal binary needs.

pub mod host;

pub use tft_tetris_core as core;
pub use tft_tetris_input as input;
pub use tft_tetris_term as term;
pub use tft_tetris_types as types;
