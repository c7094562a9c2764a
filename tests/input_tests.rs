//! Input tests - key events to per-tick signals, fed into a game

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use blockfall::core::{GameState, ScriptedSource};
use blockfall::input::{should_quit, KeyboardState};
use blockfall::types::{GamePhase, InputSignal};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

#[test]
fn test_enter_starts_game() {
    let mut keyboard = KeyboardState::new();
    let mut game = GameState::with_rng(ScriptedSource::new(vec![6, 0]));

    keyboard.handle_key_event(press(KeyCode::Enter), 0.0);
    game.tick(0.0, &keyboard.signals(0.0));
    game.tick(16.0, &keyboard.signals(16.0));
    assert_eq!(game.phase(), GamePhase::Playing);
}

#[test]
fn test_tap_moves_once() {
    let mut keyboard = KeyboardState::new().with_key_release_timeout_ms(50.0);
    let mut game = GameState::with_rng(ScriptedSource::new(vec![6, 0]));
    game.new_game(0.0);

    // A single tap with no release event expires before the gate reopens.
    keyboard.handle_key_event(press(KeyCode::Char('a')), 200.0);
    let mut t = 200.0;
    while t < 480.0 {
        game.tick(t, &keyboard.signals(t));
        t += 16.0;
    }

    assert_eq!(game.active().unwrap().col(), 3);
    assert!(!keyboard.is_held(InputSignal::MoveLeft));
}

#[test]
fn test_space_toggles_auto_descent() {
    let mut keyboard = KeyboardState::new();
    let mut game = GameState::with_rng(ScriptedSource::new(vec![6, 0]));
    game.new_game(0.0);

    keyboard.handle_key_event(press(KeyCode::Char(' ')), 600.0);
    game.tick(600.0, &keyboard.signals(600.0));
    assert!(!game.auto_descend());
}

#[test]
fn test_quit_keys() {
    let ctrl_c = KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    };
    assert!(should_quit(ctrl_c));
    assert!(should_quit(press(KeyCode::Esc)));
    assert!(!should_quit(press(KeyCode::Char('c'))));
    assert!(!should_quit(press(KeyCode::Enter)));
}
