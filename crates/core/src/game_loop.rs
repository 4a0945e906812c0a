//! Game loop - cooperative polling over input, gravity and draw timers
//!
//! One call to [`GameLoop::poll`] is one iteration of the device's main loop:
//!
//! 1. take at most one pending command (priority `MoveLeft`, `MoveRight`,
//!    `RotateLeft`, `RotateRight`) and apply it,
//! 2. if the gravity interval elapsed, step the piece down,
//! 3. if the frame interval elapsed, paint a frame.
//!
//! Nothing blocks. The three sources are paced independently, and the draw timer
//! never holds back game state. Input runs before gravity, so a move on the same
//! tick as a gravity step is applied first and gravity sees the moved piece.
//!
//! Timestamps are wrapping `u32` milliseconds, like `millis()` on the device.

use crate::game::{Game, GameStatus, GravityOutcome};
use crate::paint::paint_frame;
use crate::ports::{Clock, DisplaySurface, InputSource, RandomSource};
use crate::types::{Command, FRAME_INTERVAL_MS};

/// What one poll iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollOutcome {
    /// The command consumed this tick and whether it moved the piece.
    pub command: Option<(Command, bool)>,
    /// Result of the gravity step, when the gravity timer fired.
    pub gravity: Option<GravityOutcome>,
    /// Whether a frame was painted.
    pub drew: bool,
}

/// Owns a [`Game`] and the two deadlines that pace it.
#[derive(Debug, Clone)]
pub struct GameLoop<R> {
    game: Game<R>,
    last_fall_ms: u32,
    last_draw_ms: u32,
    frames: u32,
}

impl<R: RandomSource> GameLoop<R> {
    /// Wrap `game`, starting it if needed. Both timers start at `now_ms`.
    pub fn new(mut game: Game<R>, now_ms: u32) -> Self {
        game.start();
        Self {
            game,
            last_fall_ms: now_ms,
            last_draw_ms: now_ms,
            frames: 0,
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<R> {
        &mut self.game
    }

    /// Number of frames painted so far.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Start a new game and restart the gravity timer.
    pub fn restart(&mut self, now_ms: u32) -> GameStatus {
        self.last_fall_ms = now_ms;
        self.game.reset()
    }

    /// Run one loop iteration.
    pub fn poll<I, C, D>(&mut self, input: &I, clock: &C, display: &mut D) -> PollOutcome
    where
        I: InputSource + ?Sized,
        C: Clock + ?Sized,
        D: DisplaySurface + ?Sized,
    {
        let mut outcome = PollOutcome::default();

        if !self.game.is_game_over() {
            outcome.command = self.poll_input(input);
        } else {
            // Frozen board: drain presses so they do not pile up.
            for command in Command::PRIORITY {
                input.take(command);
            }
        }

        let now = clock.now_ms();
        if now.wrapping_sub(self.last_fall_ms) >= self.game.fall_interval_ms() {
            self.last_fall_ms = now;
            if !self.game.is_game_over() {
                outcome.gravity = Some(self.game.step_gravity());
            }
        }

        if self.frames == 0 || now.wrapping_sub(self.last_draw_ms) >= FRAME_INTERVAL_MS {
            self.last_draw_ms = now;
            paint_frame(&self.game, display);
            self.frames = self.frames.wrapping_add(1);
            outcome.drew = true;
        }

        outcome
    }

    fn poll_input<I: InputSource + ?Sized>(&mut self, input: &I) -> Option<(Command, bool)> {
        let command = Command::PRIORITY
            .into_iter()
            .find(|&command| input.take(command))?;
        Some((command, self.game.apply_command(command)))
    }

    /// Poll until `stop` returns true, checking it before every iteration.
    pub fn run_until<I, C, D>(
        &mut self,
        input: &I,
        clock: &C,
        display: &mut D,
        mut stop: impl FnMut(&Game<R>) -> bool,
    ) where
        I: InputSource + ?Sized,
        C: Clock + ?Sized,
        D: DisplaySurface + ?Sized,
    {
        while !stop(&self.game) {
            self.poll(input, clock, display);
        }
    }

    /// Poll forever. This is the device main loop; it only ends at power-off.
    pub fn run<I, C, D>(&mut self, input: &I, clock: &C, display: &mut D) -> !
    where
        I: InputSource + ?Sized,
        C: Clock + ?Sized,
        D: DisplaySurface + ?Sized,
    {
        loop {
            self.poll(input, clock, display);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::{Rgb, ShapeKind};
    use core::cell::Cell;

    #[derive(Default)]
    struct Flags([Cell<bool>; 4]);

    impl Flags {
        fn press(&self, command: Command) {
            self.0[command.index()].set(true);
        }
    }

    impl InputSource for Flags {
        fn take(&self, command: Command) -> bool {
            self.0[command.index()].replace(false)
        }
    }

    #[derive(Default)]
    struct CountingSurface {
        presents: u32,
    }

    impl DisplaySurface for CountingSurface {
        fn draw_line(&mut self, _: u16, _: u16, _: u16, _: u16, _: Rgb) {}
        fn draw_filled_rect(&mut self, _: u16, _: u16, _: u16, _: u16, _: Rgb) {}
        fn fill(&mut self, _: Rgb) {}
        fn present(&mut self) {
            self.presents += 1;
        }
    }

    struct FixedRng(u32);

    impl RandomSource for FixedRng {
        fn next_uniform(&mut self, n: u32) -> u32 {
            self.0 % n
        }
    }

    fn t_loop() -> GameLoop<FixedRng> {
        let t = ShapeKind::ALL.iter().position(|k| *k == ShapeKind::T).unwrap() as u32;
        GameLoop::new(Game::new(FixedRng(t)), 0)
    }

    #[test]
    fn test_first_poll_draws() {
        let mut game_loop = GameLoop::new(Game::new(SimpleRng::new(1)), 0);
        let flags = Flags::default();
        let mut surface = CountingSurface::default();

        let outcome = game_loop.poll(&flags, &|| 0u32, &mut surface);
        assert!(outcome.drew);
        assert_eq!(outcome.gravity, None);
        assert_eq!(surface.presents, 1);

        // Same instant: nothing due.
        let outcome = game_loop.poll(&flags, &|| 0u32, &mut surface);
        assert!(!outcome.drew);
        assert_eq!(surface.presents, 1);
    }

    #[test]
    fn test_one_command_per_tick_in_priority_order() {
        let mut game_loop = t_loop();
        let flags = Flags::default();
        let mut surface = CountingSurface::default();

        flags.press(Command::RotateRight);
        flags.press(Command::MoveRight);

        let first = game_loop.poll(&flags, &|| 1u32, &mut surface);
        assert_eq!(first.command, Some((Command::MoveRight, true)));

        let second = game_loop.poll(&flags, &|| 2u32, &mut surface);
        assert_eq!(second.command, Some((Command::RotateRight, true)));

        let third = game_loop.poll(&flags, &|| 3u32, &mut surface);
        assert_eq!(third.command, None);
    }

    #[test]
    fn test_gravity_fires_on_interval() {
        let mut game_loop = t_loop();
        let flags = Flags::default();
        let mut surface = CountingSurface::default();
        let start_y = game_loop.game().active().unwrap().center.1;

        let outcome = game_loop.poll(&flags, &|| 999u32, &mut surface);
        assert_eq!(outcome.gravity, None);

        let outcome = game_loop.poll(&flags, &|| 1000u32, &mut surface);
        assert_eq!(outcome.gravity, Some(GravityOutcome::Fell));
        assert_eq!(game_loop.game().active().unwrap().center.1, start_y + 1);

        // The next step is a full interval after the last one.
        let outcome = game_loop.poll(&flags, &|| 1999u32, &mut surface);
        assert_eq!(outcome.gravity, None);
    }

    #[test]
    fn test_input_applies_before_gravity_on_same_tick() {
        let mut game_loop = t_loop();
        let flags = Flags::default();
        let mut surface = CountingSurface::default();
        let start = *game_loop.game().active().unwrap();

        flags.press(Command::MoveLeft);
        let outcome = game_loop.poll(&flags, &|| 1000u32, &mut surface);

        assert_eq!(outcome.command, Some((Command::MoveLeft, true)));
        assert_eq!(outcome.gravity, Some(GravityOutcome::Fell));
        assert_eq!(
            game_loop.game().active().unwrap().center,
            (start.center.0 - 1, start.center.1 + 1)
        );
    }

    #[test]
    fn test_timers_survive_clock_wrap() {
        let t = ShapeKind::ALL.iter().position(|k| *k == ShapeKind::T).unwrap() as u32;
        let mut game_loop = GameLoop::new(Game::new(FixedRng(t)), u32::MAX - 10);
        let flags = Flags::default();
        let mut surface = CountingSurface::default();

        let outcome = game_loop.poll(&flags, &|| 990u32, &mut surface);
        assert_eq!(outcome.gravity, Some(GravityOutcome::Fell));
    }

    #[test]
    fn test_frames_paced_by_frame_interval() {
        let mut game_loop = t_loop();
        let flags = Flags::default();
        let mut surface = CountingSurface::default();

        for now in 0..=1000u32 {
            game_loop.poll(&flags, &move || now, &mut surface);
        }
        // Frame at t=0, then every 100ms.
        assert_eq!(surface.presents, 11);
        assert_eq!(game_loop.frames(), 11);
    }
}
