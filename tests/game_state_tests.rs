//! Game state tests - phase machine driven through `tick`

use blockfall::core::{GameState, RngSource, ScriptedSource, Timings};
use blockfall::types::{GamePhase, InputSignal, InputSignals, ShapeKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAME: f64 = 16.0;

fn idle() -> InputSignals {
    InputSignals::default()
}

/// Tick at 16ms steps from `from` up to (and including) `to`.
fn run_frames<R: blockfall::core::RandomSource>(
    state: &mut GameState<R>,
    from: f64,
    to: f64,
    input: &InputSignals,
) -> f64 {
    let mut t = from;
    while t <= to {
        state.tick(t, input);
        t += FRAME;
    }
    t
}

fn started<R: blockfall::core::RandomSource>(mut state: GameState<R>) -> GameState<R> {
    state.tick(0.0, &InputSignals::pressed(&[InputSignal::StartNewGame]));
    state.tick(FRAME, &idle());
    assert_eq!(state.phase(), GamePhase::Playing);
    state
}

#[test]
fn test_waits_for_start() {
    let mut state = GameState::new(1);
    run_frames(&mut state, 0.0, 2000.0, &idle());
    assert_eq!(state.phase(), GamePhase::AwaitingNewGame);
    assert_eq!(state.board().occupied_count(), 0);
}

#[test]
fn test_idle_game_eventually_ends() {
    let mut state = started(GameState::new(99));

    // Pieces stack up in the middle column until a spawn is blocked.
    let mut t = FRAME;
    while state.phase() == GamePhase::Playing && t < 600_000.0 {
        t += FRAME;
        state.tick(t, &idle());
    }

    assert_eq!(state.phase(), GamePhase::AwaitingNewGame);
    assert!(state.active().is_none());
    assert!(state.pieces() > 1);
    assert_eq!(state.snapshot().games, 1);
}

#[test]
fn test_restart_after_game_over() {
    let mut state = started(GameState::with_rng(ScriptedSource::new(vec![5, 3])));

    // Bars stack in column 4; the seventh spawn overlaps the sixth.
    let mut t = FRAME;
    while state.phase() == GamePhase::Playing {
        t += FRAME;
        state.tick(t, &InputSignals::pressed(&[InputSignal::SoftDrop]));
    }
    assert_eq!(state.pieces(), 6);

    state.tick(t + FRAME, &InputSignals::pressed(&[InputSignal::StartNewGame]));
    state.tick(t + 2.0 * FRAME, &idle());
    assert_eq!(state.phase(), GamePhase::Playing);
    assert_eq!(state.pieces(), 1);
    assert_eq!(state.games(), 2);
    assert_eq!(state.board().occupied_count(), 3);
    assert_eq!(state.active().unwrap().kind(), ShapeKind::I);
}

#[test]
fn test_held_left_moves_every_interval() {
    let mut state = started(GameState::with_rng(ScriptedSource::new(vec![6, 0])));
    assert_eq!(state.active().unwrap().col(), 4);

    // Auto-descent off so the square stays put vertically.
    state.tick(600.0, &InputSignals::pressed(&[InputSignal::ToggleAutoDescend]));
    assert!(!state.auto_descend());

    let left = InputSignals::pressed(&[InputSignal::MoveLeft]);
    run_frames(&mut state, 616.0, 1200.0, &left);
    assert_eq!(state.active().unwrap().col(), 0);
}

#[test]
fn test_custom_timings_respected() {
    let timings = Timings {
        auto_descent_ms: 100.0,
        ..Timings::default()
    };
    let mut state = GameState::with_config(
        ScriptedSource::new(vec![6, 0]),
        Default::default(),
        timings,
        Default::default(),
    );
    state.new_game(0.0);

    state.tick(101.0, &idle());
    state.tick(202.0, &idle());
    assert_eq!(state.active().unwrap().row(), 2);
}

#[test]
fn test_rand_backed_game_is_reproducible() {
    let play = || {
        let mut state = started(GameState::with_rng(RngSource(StdRng::seed_from_u64(5))));
        run_frames(&mut state, 2.0 * FRAME, 20_000.0, &InputSignals::pressed(&[InputSignal::SoftDrop]));
        state.snapshot()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_snapshot_tracks_lines() {
    let mut state = started(GameState::with_rng(ScriptedSource::new(vec![5, 0])));
    let drop = InputSignals::pressed(&[InputSignal::SoftDrop]);

    // Ten bars side by side fill rows 17..=19.
    let mut t = FRAME;
    for target in [0, 1, 2, 3, 5, 6, 7, 8, 9, 4] {
        let left = InputSignals::pressed(&[InputSignal::MoveLeft]);
        let right = InputSignals::pressed(&[InputSignal::MoveRight]);
        while state.active().unwrap().col() != target {
            t += FRAME;
            let input = if state.active().unwrap().col() > target { &left } else { &right };
            state.tick(t, input);
        }
        let pieces = state.pieces();
        while state.pieces() == pieces {
            t += FRAME;
            state.tick(t, &drop);
        }
    }

    let snap = state.snapshot();
    assert_eq!(snap.lines, 3);
    assert_eq!(snap.pieces, 11);
    assert_eq!(state.board().occupied_count(), 3);
}
