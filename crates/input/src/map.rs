//! Key mapping from terminal events to input signals.

use crate::types::InputSignal;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the signal it drives, if any.
///
/// Ctrl-C maps to [`InputSignal::Quit`] before any letter binding is checked.
pub fn map_key(key: KeyEvent) -> Option<InputSignal> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputSignal::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputSignal::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputSignal::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputSignal::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(InputSignal::Rotate),

        KeyCode::Char(' ') => Some(InputSignal::ToggleAutoDescend),
        KeyCode::F(2) | KeyCode::Enter => Some(InputSignal::StartNewGame),

        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputSignal::Quit),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    map_key(key) == Some(InputSignal::Quit)
}
