use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tft_tetris::core::{is_valid, paint_frame, Game, Grid, Piece, SimpleRng};
use tft_tetris::term::PixelCanvas;
use tft_tetris::types::{Command, Rgb, ShapeKind, COLUMNS, ROWS};

fn bench_gravity_step(c: &mut Criterion) {
    let mut game = Game::new(SimpleRng::new(12345));
    game.start();

    c.bench_function("gravity_step", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.reset();
            }
            black_box(game.step_gravity());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("consolidate_4_rows", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            // Fill bottom 4 rows
            for y in ROWS - 4..ROWS {
                for x in 0..COLUMNS {
                    grid.set(x, y, Rgb::CYAN);
                }
            }
            black_box(grid.consolidate_full_rows());
        })
    });
}

fn bench_is_valid(c: &mut Criterion) {
    let mut grid = Grid::new();
    for x in 0..COLUMNS - 1 {
        grid.set(x, ROWS - 1, Rgb::RED);
    }
    let piece = Piece::new(ShapeKind::T).translated(0, 8);

    c.bench_function("is_valid", |b| {
        b.iter(|| is_valid(black_box(&piece), black_box(&grid)))
    });
}

fn bench_apply_command(c: &mut Criterion) {
    let mut game = Game::new(SimpleRng::new(12345));
    game.start();

    c.bench_function("apply_rotate", |b| {
        b.iter(|| {
            game.apply_command(black_box(Command::RotateRight));
        })
    });
}

fn bench_paint_frame(c: &mut Criterion) {
    let mut grid = Grid::new();
    for y in ROWS / 2..ROWS {
        for x in 0..COLUMNS - 1 {
            grid.set(x, y, Rgb::ORANGE);
        }
    }
    let mut game = Game::with_grid(SimpleRng::new(12345), grid);
    game.start();
    let mut canvas = PixelCanvas::panel();

    c.bench_function("paint_frame", |b| {
        b.iter(|| paint_frame(black_box(&game), &mut canvas))
    });
}

criterion_group!(
    benches,
    bench_gravity_step,
    bench_line_clear,
    bench_is_valid,
    bench_apply_command,
    bench_paint_frame
);
criterion_main!(benches);
