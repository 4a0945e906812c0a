//! Game state machine tests - spawn, fall, lock, clear and game over

use tft_tetris::core::{is_valid, Game, GameStatus, GravityOutcome, Grid, Phase, RandomSource};
use tft_tetris::types::{Command, Rgb, ShapeKind, COLUMNS, ROWS};

/// Always draws the same shape.
struct Always(ShapeKind);

impl RandomSource for Always {
    fn next_uniform(&mut self, n: u32) -> u32 {
        let i = ShapeKind::ALL.iter().position(|k| *k == self.0).unwrap() as u32;
        i % n
    }
}

fn started(shape: ShapeKind, grid: Grid) -> Game<Always> {
    let mut game = Game::with_grid(Always(shape), grid);
    assert_eq!(game.start(), GameStatus::Running);
    game
}

#[test]
fn test_start_spawns_falling_piece() {
    let game = started(ShapeKind::T, Grid::new());
    assert_eq!(game.phase(), Phase::Falling);
    assert_eq!(game.active().unwrap().shape, ShapeKind::T);
    assert_eq!(game.pieces_spawned(), 1);
    assert_eq!(game.fall_interval_ms(), 1000);
}

#[test]
fn test_o_falls_to_floor_then_locks() {
    let mut game = started(ShapeKind::O, Grid::new());
    let active = *game.active().unwrap();
    assert!(!is_valid(&active.translated(0, ROWS as i8), game.grid()));

    let mut falls = 0;
    while game.active().unwrap().bottom_row() < ROWS as i8 - 1 {
        assert_eq!(game.step_gravity(), GravityOutcome::Fell);
        falls += 1;
    }
    assert_eq!(falls, ROWS as i32 - 1 - active.bottom_row() as i32);

    let landed = *game.active().unwrap();
    assert!(!is_valid(&landed.translated(0, 1), game.grid()));
    assert_eq!(game.step_gravity(), GravityOutcome::Locked { lines: 0 });

    for (x, y) in landed.occupied_cells() {
        assert_eq!(game.grid().cell(x as usize, y as usize).color, Rgb::YELLOW);
    }
    // Next piece is already falling.
    assert_eq!(game.phase(), Phase::Falling);
    assert_eq!(game.pieces_spawned(), 2);
}

#[test]
fn test_lock_into_gap_clears_one_row() {
    let floor = ROWS - 1;
    let mut grid = Grid::new();
    for x in 0..COLUMNS {
        if x != 4 {
            grid.set(x, floor, Rgb::RED);
        }
    }
    let mut game = started(ShapeKind::T, grid);

    // Two left turns point the T's stem down, straight over the gap.
    assert!(game.apply_command(Command::RotateLeft));
    assert!(game.apply_command(Command::RotateLeft));

    let outcome = loop {
        match game.step_gravity() {
            GravityOutcome::Fell => continue,
            other => break other,
        }
    };
    assert_eq!(outcome, GravityOutcome::Locked { lines: 1 });
    assert_eq!(game.score().score, 40);
    assert_eq!(game.score().cleared_lines, 1);

    // The T's bar dropped into the cleared row; the row above it is empty.
    for x in 0..COLUMNS {
        assert_eq!(game.grid().is_filled(x, floor), (3..=5).contains(&x), "x={}", x);
        assert!(!game.grid().is_filled(x, floor - 1));
    }
}

#[test]
fn test_blocked_spawn_is_game_over() {
    let mut grid = Grid::new();
    for y in 0..ROWS {
        for x in 0..COLUMNS {
            grid.set(x, y, Rgb::BLUE);
        }
    }
    let mut game = Game::with_grid(Always(ShapeKind::I), grid);

    assert_eq!(game.start(), GameStatus::GameOver);
    assert!(game.is_game_over());
    assert!(game.active().is_none());
    assert_eq!(game.pieces_spawned(), 0);
}

#[test]
fn test_spawn_blocked_on_single_row() {
    // The I bar sits on row 0 only, so one filled cell there is enough.
    let mut grid = Grid::new();
    grid.set(4, 0, Rgb::BLUE);
    let mut game = Game::with_grid(Always(ShapeKind::I), grid);
    assert_eq!(game.start(), GameStatus::GameOver);
    assert_eq!(game.pieces_spawned(), 0);

    // The T's bar is on row 1, below its nub.
    let mut grid = Grid::new();
    grid.set(3, 1, Rgb::BLUE);
    let mut game = Game::with_grid(Always(ShapeKind::T), grid);
    assert_eq!(game.start(), GameStatus::GameOver);
    assert_eq!(game.pieces_spawned(), 0);

    // Row 1 full does not stop an I.
    let mut grid = Grid::new();
    for x in 0..COLUMNS {
        grid.set(x, 1, Rgb::BLUE);
    }
    let mut game = Game::with_grid(Always(ShapeKind::I), grid);
    assert_eq!(game.start(), GameStatus::Running);
    assert_eq!(game.pieces_spawned(), 1);
}

#[test]
fn test_game_over_is_terminal() {
    let mut game = started(ShapeKind::O, Grid::new());

    let mut steps = 0;
    while !game.is_game_over() {
        game.step_gravity();
        steps += 1;
        assert!(steps < 500, "stack never reached the spawn row");
    }
    // Six O pieces stack two rows each up to the spawn rows.
    assert_eq!(game.pieces_spawned(), 6);

    let grid = game.grid().clone();
    let score = *game.score();
    for command in Command::PRIORITY {
        assert!(!game.apply_command(command));
    }
    assert_eq!(game.step_gravity(), GravityOutcome::Idle);
    assert_eq!(game.grid(), &grid);
    assert_eq!(game.score(), &score);
}

#[test]
fn test_rejected_move_keeps_piece() {
    let mut game = started(ShapeKind::I, Grid::new());

    // Walk into the left wall.
    let mut moved = 0;
    while game.apply_command(Command::MoveLeft) {
        moved += 1;
    }
    let at_wall = *game.active().unwrap();
    assert!(moved > 0);
    assert!(!game.apply_command(Command::MoveLeft));
    assert_eq!(game.active().unwrap(), &at_wall);
    assert!(at_wall.occupied_cells().iter().any(|&(x, _)| x == 0));
}

#[test]
fn test_reset_starts_over() {
    let mut game = started(ShapeKind::O, Grid::new());
    while !game.is_game_over() {
        game.step_gravity();
    }

    assert_eq!(game.reset(), GameStatus::Running);
    assert_eq!(game.grid().filled_count(), 0);
    assert_eq!(game.score().score, 0);
    assert_eq!(game.pieces_spawned(), 1);
    assert_eq!(game.phase(), Phase::Falling);
}
