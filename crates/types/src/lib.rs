//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used by every other crate in the
//! workspace. Everything here is plain data and compiled-in tables: the game has
//! no configuration files, so the shape table, speed table and score table below
//! *are* the configuration.
//!
//! # Display and Playfield Geometry
//!
//! The game targets a 128x160 pixel TFT panel in portrait orientation.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DISPLAY_WIDTH` | 128 | Panel width in pixels |
//! | `DISPLAY_HEIGHT` | 160 | Panel height in pixels |
//! | `X_LEFT` | 3 | Left wall of the well |
//! | `X_RIGHT` | 125 | Right wall of the well |
//! | `Y_BOTTOM` | 4 | Floor line distance from the bottom edge |
//! | `SQUARE_WIDTH` | 12 | Pixel pitch of one grid cell |
//! | `COLUMNS` | 10 | Grid width in cells |
//! | `ROWS` | 13 | Grid height in cells, `(160 - 4) / 12` |
//!
//! Grid coordinates are `(x, y)` with `x` growing to the right and `y` growing in
//! the direction pieces fall: row `0` is the top (spawn side) and row `ROWS - 1`
//! is the floor row.
//!
//! # Drop Intervals by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1000ms |
//! | 1 | 800ms |
//! | 2 | 650ms |
//! | 3 | 500ms |
//! | 4 | 400ms |
//! | 5 | 320ms |
//! | 6 | 250ms |
//! | 7 | 200ms |
//! | 8 | 160ms |
//! | 9+ | 120ms |
//!
//! # Examples
//!
//! ```
//! use tft_tetris_types::{Command, Direction, ShapeKind, COLUMNS, ROWS};
//!
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(ROWS, 13);
//!
//! assert_eq!(ShapeKind::from_index(3), ShapeKind::O);
//! assert_eq!(ShapeKind::from_index(10), ShapeKind::O);
//! assert_eq!(Command::RotateLeft.rotation(), Some(Direction::Left));
//! ```

#![cfg_attr(not(test), no_std)]

/// Panel width in pixels.
pub const DISPLAY_WIDTH: u16 = 128;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u16 = 160;

/// X coordinate of the outer left wall line.
pub const X_LEFT: u16 = 3;

/// X coordinate of the outer right wall line.
pub const X_RIGHT: u16 = 125;

/// Distance of the floor line from the bottom edge of the panel.
pub const Y_BOTTOM: u16 = 4;

/// Pixel pitch of one grid cell.
pub const SQUARE_WIDTH: u16 = 12;

/// Side length of the filled rectangle drawn inside a cell slot.
pub const SQUARE_SIZE: u16 = 10;

/// Grid width in cells.
pub const COLUMNS: usize = 10;

/// Grid height in cells, derived from the panel height.
pub const ROWS: usize = ((DISPLAY_HEIGHT - Y_BOTTOM) / SQUARE_WIDTH) as usize;

/// Number of squares in every tetromino.
pub const SQUARE_COUNT: usize = 4;

/// Display refresh rate of the draw timer.
pub const FPS: u32 = 10;

/// Interval between two draw ticks.
pub const FRAME_INTERVAL_MS: u32 = 1000 / FPS;

/// Minimum time between two accepted button edges (any button).
pub const DEBOUNCE_MS: u32 = 150;

/// Spawn coordinate of a new piece's centre (top centre of the well).
pub const SPAWN_CENTER: (i8, i8) = (4, 1);

/// Fall interval per level in milliseconds.
///
/// Levels past the end of the table stay at the last entry.
pub const SPEED_TABLE_MS: [u16; 10] = [1000, 800, 650, 500, 400, 320, 250, 200, 160, 120];

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Lines needed per level step: level `n` is left once `10 * (n + 1)` lines are cleared.
pub const LINES_PER_LEVEL: u16 = 10;

/// 24-bit RGB color.
///
/// The core treats colors as opaque values and only hands them to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const DARK_GREY: Rgb = Rgb::new(123, 125, 123);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const ORANGE: Rgb = Rgb::new(255, 180, 0);
    pub const PURPLE: Rgb = Rgb::new(128, 0, 128);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Screen background behind the well.
pub const BACKGROUND: Rgb = Rgb::DARK_GREY;

/// Color of the well walls and floor.
pub const FRAME_COLOR: Rgb = Rgb::WHITE;

/// The seven tetromino shapes
///
/// Each shape has a fixed display color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue
/// - **L**: Orange (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All shapes, in the order used by [`ShapeKind::from_index`].
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    /// Number of distinct shapes.
    pub const COUNT: u32 = 7;

    /// Map a uniform index in `[0, 7)` onto a shape.
    ///
    /// Larger indices wrap, so any random value is usable.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % Self::COUNT) as usize]
    }

    /// Display color of this shape.
    pub fn color(self) -> Rgb {
        match self {
            ShapeKind::I => Rgb::CYAN,
            ShapeKind::J => Rgb::BLUE,
            ShapeKind::L => Rgb::ORANGE,
            ShapeKind::O => Rgb::YELLOW,
            ShapeKind::S => Rgb::GREEN,
            ShapeKind::T => Rgb::PURPLE,
            ShapeKind::Z => Rgb::RED,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::O => "o",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// Rotation direction of a quarter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

/// Discrete player commands delivered by the input collaborator.
///
/// Each physical button edge yields at most one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    RotateLeft,
    RotateRight,
}

impl Command {
    /// Commands in the order the game loop checks them; the first pending one wins a tick.
    pub const PRIORITY: [Command; 4] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateLeft,
        Command::RotateRight,
    ];

    /// Stable slot index, used by flag arrays.
    pub fn index(self) -> usize {
        match self {
            Command::MoveLeft => 0,
            Command::MoveRight => 1,
            Command::RotateLeft => 2,
            Command::RotateRight => 3,
        }
    }

    /// Horizontal offset for move commands.
    pub fn shift(self) -> Option<i8> {
        match self {
            Command::MoveLeft => Some(-1),
            Command::MoveRight => Some(1),
            _ => None,
        }
    }

    /// Rotation direction for rotate commands.
    pub fn rotation(self) -> Option<Direction> {
        match self {
            Command::RotateLeft => Some(Direction::Left),
            Command::RotateRight => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateLeft => "rotateLeft",
            Command::RotateRight => "rotateRight",
        }
    }
}
