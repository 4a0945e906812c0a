//! Input module - button edges to pending commands.
//!
//! [`CommandFlags`] is the engine-facing side: debounced, lock-free flags that
//! implement [`tft_tetris_core::InputSource`]. [`map`] turns `crossterm` key
//! events into button edges for the terminal host, standing in for the four
//! hardware buttons.

pub mod flags;
pub mod map;

pub use tft_tetris_types as types;

pub use flags::CommandFlags;
pub use map::{command_for_key, handle_key_event, should_quit, HostKey};
