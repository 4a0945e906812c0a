//! Terminal runner (default binary).
//!
//! Runs the game loop against a pixel canvas and shows it in the terminal.
//! Key presses stand in for the four hardware buttons and go through the same
//! debounced flags the button interrupts use on the device.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use log::{debug, info, warn};

use tft_tetris::core::{Clock, Game, GameLoop, SimpleRng};
use tft_tetris::host::{init_logging, HostConfig, InstantClock};
use tft_tetris::input::{handle_key_event, CommandFlags, HostKey};
use tft_tetris::term::{CanvasView, FrameBuffer, PixelCanvas, StatusLine, TerminalRenderer};

/// Upper bound on how long one key read may stall the game loop.
const INPUT_POLL: Duration = Duration::from_millis(5);

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }
    info!("starting: seed={} scale={}", config.seed, config.scale);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!("terminal restore failed: {err:#}");
        if result.is_ok() {
            return Err(err);
        }
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &HostConfig) -> Result<()> {
    let clock = InstantClock::new();
    let flags = CommandFlags::new();
    let mut canvas = PixelCanvas::panel();
    let view = CanvasView::new(config.scale);
    let mut fb = FrameBuffer::new(0, 0);

    let mut game_loop = GameLoop::new(Game::new(SimpleRng::new(config.seed)), clock.now_ms());

    loop {
        if event::poll(INPUT_POLL)? {
            match event::read()? {
                Event::Key(key) => match handle_key_event(key) {
                    Some(HostKey::Quit) => {
                        info!("quit, score={}", game_loop.game().score().score);
                        return Ok(());
                    }
                    Some(HostKey::Restart) => {
                        flags.clear();
                        game_loop.restart(clock.now_ms());
                    }
                    Some(HostKey::Command(command)) => {
                        if !flags.press(command, clock.now_ms()) {
                            debug!("debounced {}", command.as_str());
                        }
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let outcome = game_loop.poll(&flags, &clock, &mut canvas);
        if outcome.drew {
            let status = StatusLine::from_game(game_loop.game());
            view.render_into(&canvas, &status, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
