//! Core game logic - deterministic, allocation-free and `no_std`
//!
//! This crate holds every game rule and the cooperative main loop. It never
//! touches hardware: the display, the buttons, the random source and the clock
//! all come in through the traits in [`ports`], so the same code runs on the
//! device, in the terminal host and under test.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x13 cell grid, row tests and row compaction
//! - [`piece`]: shape offset table, quarter-turn rotation, pure transforms
//! - [`collision`]: bounds and overlap check for a candidate piece
//! - [`scoring`]: classic line scores, level progression, speed table
//! - [`game`]: the spawn / fall / lock / clear state machine
//! - [`game_loop`]: input, gravity and draw timers polled without blocking
//! - [`paint`]: one frame of the well, the stack and the falling piece
//! - [`ports`]: collaborator traits
//! - [`rng`]: seeded LCG for reproducible games
//!
//! # Game Rules
//!
//! - A random shape spawns at the top; if it does not fit, the game is over
//! - Moves and rotations are tried on a copy and kept only when valid
//! - Rotation is a plain quarter turn about the piece center, no wall kicks
//! - A piece that cannot fall locks immediately; there is no lock delay
//! - Full rows are removed together and the rows above shift down
//!
//! # Example
//!
//! ```
//! use tft_tetris_core::{Game, GravityOutcome, SimpleRng};
//! use tft_tetris_core::types::Command;
//!
//! let mut game = Game::new(SimpleRng::new(12345));
//! game.start();
//!
//! game.apply_command(Command::MoveRight);
//! game.apply_command(Command::RotateRight);
//! assert_eq!(game.step_gravity(), GravityOutcome::Fell);
//!
//! assert_eq!(game.score().score, 0);
//! assert!(!game.is_game_over());
//! ```
//!
//! # Timing
//!
//! - **Frames**: 10 per second (`FRAME_INTERVAL_MS` = 100ms)
//! - **Gravity**: 1000ms at level 0, down to 120ms from level 9
//!
//! Call [`GameLoop::poll`](game_loop::GameLoop::poll) as often as possible; it
//! decides itself what is due.

#![cfg_attr(not(test), no_std)]

pub mod collision;
pub mod game;
pub mod game_loop;
pub mod grid;
pub mod paint;
pub mod piece;
pub mod ports;
pub mod rng;
pub mod scoring;

pub use tft_tetris_types as types;

// Re-export commonly used types for convenience
pub use collision::{in_bounds, is_valid};
pub use game::{Game, GameStatus, GravityOutcome, Phase};
pub use game_loop::{GameLoop, PollOutcome};
pub use grid::{Cell, Grid};
pub use paint::{cell_origin, paint_frame};
pub use piece::{rotate_offset, shape_offsets, Piece};
pub use ports::{Clock, DisplaySurface, InputSource, RandomSource};
pub use rng::{random_shape, SimpleRng};
pub use scoring::{apply_line_clear, fall_interval_for_level, line_points, ScoreState};
