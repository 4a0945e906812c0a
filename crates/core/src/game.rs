//! Game state module - the falling-piece state machine
//!
//! This module ties together the grid, the active piece, the collision check and
//! scoring. Phases run in a fixed cycle:
//!
//! ```text
//! Spawning -> Falling -> Locking -> LineClear -> Spawning
//!    |
//!    +-> GameOver (spawn position blocked, terminal)
//! ```
//!
//! Every change to the active piece goes through a candidate: the piece is copied
//! and transformed, the copy is checked, and only a valid copy replaces the active
//! piece. An invalid state is never stored, not even for one tick.

use log::{debug, info, trace};

use crate::collision::is_valid;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::ports::RandomSource;
use crate::rng::random_shape;
use crate::scoring::{apply_line_clear, ScoreState};
use crate::types::Command;

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Spawning,
    Falling,
    Locking,
    LineClear,
    GameOver,
}

/// Externally observable game status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// Result of one gravity step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityOutcome {
    /// The piece moved one row down.
    Fell,
    /// The piece could not move, was locked, and lines were cleared.
    /// Check [`Game::status`] to see whether the next piece could spawn.
    Locked { lines: u8 },
    /// Nothing to move (game over, or no active piece).
    Idle,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R> {
    grid: Grid,
    active: Option<Piece>,
    score: ScoreState,
    phase: Phase,
    rng: R,
    /// Number of pieces that spawned successfully this game.
    pieces_spawned: u32,
}

impl<R> Game<R> {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::GameOver => GameStatus::GameOver,
            _ => GameStatus::Running,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Current gravity interval, from the level.
    pub fn fall_interval_ms(&self) -> u32 {
        self.score.fall_interval_ms as u32
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game on an empty grid. Call [`Game::start`] to spawn the first piece.
    pub fn new(rng: R) -> Self {
        Self::with_grid(rng, Grid::new())
    }

    /// Create a game on a prepared grid (puzzles, tests).
    pub fn with_grid(rng: R, grid: Grid) -> Self {
        Self {
            grid,
            active: None,
            score: ScoreState::new(),
            phase: Phase::Spawning,
            rng,
            pieces_spawned: 0,
        }
    }

    /// Spawn the first piece if the game has not started yet.
    pub fn start(&mut self) -> GameStatus {
        if self.phase == Phase::Spawning {
            self.spawn();
        }
        self.status()
    }

    /// Start over: empty grid, zero score, fresh piece.
    pub fn reset(&mut self) -> GameStatus {
        self.grid.clear();
        self.score = ScoreState::new();
        self.active = None;
        self.pieces_spawned = 0;
        self.phase = Phase::Spawning;
        info!("new game");
        self.start()
    }

    /// Spawning: place a random shape at the spawn point, or end the game.
    fn spawn(&mut self) -> bool {
        debug_assert_eq!(self.phase, Phase::Spawning);

        let shape = random_shape(&mut self.rng);
        let candidate = Piece::new(shape);

        if !is_valid(&candidate, &self.grid) {
            self.active = None;
            self.phase = Phase::GameOver;
            info!(
                "game over: {} blocked at spawn, score={} level={} lines={}",
                shape.as_str(),
                self.score.score,
                self.score.level,
                self.score.cleared_lines
            );
            return false;
        }

        self.active = Some(candidate);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.phase = Phase::Falling;
        trace!("spawned {}", shape.as_str());
        true
    }

    /// Replace the active piece with `candidate` if it is valid.
    fn try_commit(&mut self, candidate: Piece) -> bool {
        if is_valid(&candidate, &self.grid) {
            self.active = Some(candidate);
            true
        } else {
            trace!("rejected candidate at {:?}", candidate.center);
            false
        }
    }

    /// Apply a player command to the falling piece.
    ///
    /// Returns whether the piece changed. Rejected moves are silently dropped, and
    /// every command is ignored outside the `Falling` phase.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = match (command.shift(), command.rotation()) {
            (Some(dx), _) => active.translated(dx, 0),
            (_, Some(direction)) => active.rotated(direction),
            (None, None) => return false,
        };

        self.try_commit(candidate)
    }

    /// Try to move the falling piece one row down.
    ///
    /// When the row below is blocked the piece locks, full rows are cleared and
    /// scored, and the next piece spawns, all within this call.
    pub fn step_gravity(&mut self) -> GravityOutcome {
        if self.phase != Phase::Falling {
            return GravityOutcome::Idle;
        }
        let Some(active) = self.active else {
            return GravityOutcome::Idle;
        };

        if self.try_commit(active.translated(0, 1)) {
            return GravityOutcome::Fell;
        }

        self.phase = Phase::Locking;
        self.lock(&active);

        self.phase = Phase::LineClear;
        let lines = self.clear_lines();

        self.phase = Phase::Spawning;
        self.spawn();

        GravityOutcome::Locked { lines }
    }

    /// Locking: copy the piece's squares into the grid.
    fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.occupied_cells() {
            // Active pieces are always valid, so every square is in bounds.
            self.grid.set(x as usize, y as usize, piece.color);
        }
        self.active = None;
        debug!(
            "locked {} at {:?}",
            piece.shape.as_str(),
            piece.center
        );
    }

    /// LineClear: compact full rows and feed the count to scoring.
    fn clear_lines(&mut self) -> u8 {
        let lines = self.grid.consolidate_full_rows();
        if lines == 0 {
            return 0;
        }

        let outcome = apply_line_clear(lines, &mut self.score);
        debug!(
            "cleared {} line(s) for {} points, score={}",
            lines, outcome.points, self.score.score
        );
        if outcome.leveled_up {
            info!(
                "level {} reached, fall interval {}ms",
                self.score.level, self.score.fall_interval_ms
            );
        }
        lines
    }
}
