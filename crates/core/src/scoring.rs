//! Scoring module - line clear points and level progression
//!
//! Classic scoring: 40 / 100 / 300 / 1200 points for 1-4 lines, multiplied by
//! `level + 1`. Every ten cleared lines raise the level by one, and the level
//! selects the fall interval from the speed table.

use crate::types::{LINES_PER_LEVEL, LINE_SCORES, SPEED_TABLE_MS};

/// Score and level progression of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreState {
    pub score: u32,
    pub level: u8,
    pub cleared_lines: u16,
    /// Always `fall_interval_for_level(level)`.
    pub fall_interval_ms: u16,
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 0,
            cleared_lines: 0,
            fall_interval_ms: fall_interval_for_level(0),
        }
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

/// What a single [`apply_line_clear`] call changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClearOutcome {
    pub points: u32,
    pub leveled_up: bool,
}

/// Calculate line clear score
/// lines: number of lines cleared (clamped to 4)
/// level: current level (0-based)
pub fn line_points(lines: u8, level: u8) -> u32 {
    let lines = lines.min(4) as usize;
    LINE_SCORES[lines].saturating_mul(level as u32 + 1)
}

/// Get the fall interval for a level (in milliseconds)
/// Levels past the table use its last entry
pub fn fall_interval_for_level(level: u8) -> u16 {
    let last = SPEED_TABLE_MS.len() - 1;
    SPEED_TABLE_MS[(level as usize).min(last)]
}

/// Fold one lock's line clear into `state`.
///
/// Points use the level in effect before the clear. Zero lines change nothing.
/// Counts above four are clamped, never rejected.
pub fn apply_line_clear(lines_cleared: u8, state: &mut ScoreState) -> LineClearOutcome {
    let lines = lines_cleared.min(4);
    if lines == 0 {
        return LineClearOutcome::default();
    }

    let points = line_points(lines, state.level);
    state.score = state.score.saturating_add(points);
    state.cleared_lines = state.cleared_lines.saturating_add(lines as u16);

    let threshold = LINES_PER_LEVEL.saturating_mul(state.level as u16 + 1);
    let leveled_up = state.cleared_lines >= threshold && state.level < u8::MAX;
    if leveled_up {
        state.level += 1;
        state.fall_interval_ms = fall_interval_for_level(state.level);
    }

    LineClearOutcome { points, leveled_up }
}
