//! Key mapping from terminal events to the four device buttons.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a host key press means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKey {
    /// One of the four game buttons.
    Command(Command),
    /// Start a new game.
    Restart,
    /// Leave the host.
    Quit,
}

/// Map a game key to its button command.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Command::MoveRight),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(Command::RotateRight),
        KeyCode::Char('z')
        | KeyCode::Char('Z')
        | KeyCode::Char('y')
        | KeyCode::Char('Y') => Some(Command::RotateLeft),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Classify a terminal key event.
///
/// Only presses count as button edges; repeats and releases map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<HostKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(HostKey::Quit);
    }
    if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
        return Some(HostKey::Restart);
    }
    command_for_key(key).map(HostKey::Command)
}
