//! Game state module - the phase machine driving play
//!
//! [`GameState`] owns the board, the catalog, the random source and the active
//! piece, and turns per-tick input signals into piece operations. It is driven
//! entirely by [`GameState::tick`]; there is no internal clock and no thread.

use log::{debug, info};

use crate::board::{Board, BoardLayout};
use crate::catalog::ShapeCatalog;
use crate::piece::{ActivePiece, Descent};
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::timing::{Gates, Timings};
use crate::types::{GamePhase, InputSignal, InputSignals};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    board: Board,
    catalog: ShapeCatalog,
    rng: R,
    active: Option<ActivePiece>,
    phase: GamePhase,
    timings: Timings,
    gates: Gates,
    auto_descend: bool,
    /// Rows cleared in the current game
    lines: u32,
    /// Pieces placed in the current game
    pieces: u32,
    /// Games started since construction
    games: u32,
}

impl GameState<SimpleRng> {
    /// Create a game with a seeded [`SimpleRng`]
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    pub fn with_rng(rng: R) -> Self {
        Self::with_config(rng, ShapeCatalog::standard(), Timings::default(), BoardLayout::default())
    }

    pub fn with_config(
        rng: R,
        catalog: ShapeCatalog,
        timings: Timings,
        layout: BoardLayout,
    ) -> Self {
        Self {
            board: Board::with_layout(layout),
            catalog,
            rng,
            active: None,
            phase: GamePhase::AwaitingNewGame,
            timings,
            gates: Gates::new(&timings),
            auto_descend: true,
            lines: 0,
            pieces: 0,
            games: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    pub fn gates(&self) -> &Gates {
        &self.gates
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn auto_descend(&self) -> bool {
        self.auto_descend
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces(&self) -> u32 {
        self.pieces
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Advance the phase machine by one frame
    ///
    /// `now_ms` is monotonic milliseconds from any fixed origin. Returns the
    /// phase after the tick.
    pub fn tick(&mut self, now_ms: f64, input: &InputSignals) -> GamePhase {
        match self.phase {
            GamePhase::AwaitingNewGame => {
                if input.is_pressed(InputSignal::StartNewGame) {
                    self.phase = GamePhase::PreparingNewGame;
                }
            }
            GamePhase::PreparingNewGame => self.new_game(now_ms),
            GamePhase::Playing => self.play(now_ms, input),
            // Declared but never entered.
            GamePhase::Paused | GamePhase::GameOver => {}
        }
        self.phase
    }

    /// Reset board, gates and statistics, then spawn the first piece
    pub fn new_game(&mut self, now_ms: f64) {
        self.board.reset();
        self.gates.reset(now_ms);
        self.auto_descend = true;
        self.active = None;
        self.lines = 0;
        self.pieces = 0;
        self.games = self.games.wrapping_add(1);
        self.phase = GamePhase::Playing;

        info!("new game #{} at {:.0}ms", self.games, now_ms);
        self.spawn_piece();
    }

    fn play(&mut self, now_ms: f64, input: &InputSignals) {
        self.gates.poll(now_ms);

        // Left and right share one gate; left is served first.
        if input.is_pressed(InputSignal::MoveLeft) && self.gates.horizontal.is_ready() {
            self.move_left();
            self.gates.horizontal.consume(now_ms);
        }
        if input.is_pressed(InputSignal::MoveRight) && self.gates.horizontal.is_ready() {
            self.move_right();
            self.gates.horizontal.consume(now_ms);
        }

        // Independent of the auto-descent flag.
        if input.is_pressed(InputSignal::SoftDrop)
            && self.gates.manual_descent.has_elapsed(now_ms)
        {
            self.move_down();
            self.gates.manual_descent.stamp(now_ms);
            if self.phase != GamePhase::Playing {
                return;
            }
        }

        if input.is_pressed(InputSignal::Rotate) && self.gates.rotation.is_ready() {
            self.rotate();
            self.gates.rotation.consume(now_ms);
        }

        if input.is_pressed(InputSignal::ToggleAutoDescend)
            && self.gates.descent_toggle.has_elapsed(now_ms)
        {
            self.auto_descend = !self.auto_descend;
            self.gates.descent_toggle.stamp(now_ms);
            debug!("auto-descent {}", if self.auto_descend { "on" } else { "off" });
        }

        if self.auto_descend && self.gates.auto_descent.is_ready() {
            self.move_down();
            self.gates.auto_descent.clear();
        }
    }

    /// Spawn the next piece; a blocked spawn ends the game
    ///
    /// Returns whether a piece was placed.
    pub fn spawn_piece(&mut self) -> bool {
        let spawn = ActivePiece::spawn(&mut self.board, &self.catalog, &mut self.rng);

        if spawn.rows_cleared > 0 {
            self.lines = self.lines.saturating_add(spawn.rows_cleared as u32);
            debug!("cleared {} row(s), {} total", spawn.rows_cleared, self.lines);
        }

        if spawn.is_blocked() {
            self.game_over();
            return false;
        }

        self.pieces = self.pieces.saturating_add(1);
        self.active = Some(spawn.piece);
        true
    }

    fn game_over(&mut self) {
        info!(
            "game over after {} piece(s), {} line(s)",
            self.pieces, self.lines
        );
        self.active = None;
        self.phase = GamePhase::AwaitingNewGame;
    }

    pub fn move_left(&mut self) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.move_left(&mut self.board),
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.move_right(&mut self.board),
            None => false,
        }
    }

    /// Move the active piece one row down, spawning the next piece on landing
    ///
    /// Returns `None` when there is no active piece.
    pub fn move_down(&mut self) -> Option<Descent> {
        let descent = self.active.as_mut()?.move_down(&mut self.board);
        if descent == Descent::Landed {
            self.spawn_piece();
        }
        Some(descent)
    }

    pub fn rotate(&mut self) -> bool {
        match self.active.as_mut() {
            Some(piece) => piece.rotate(&mut self.board),
            None => false,
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_cell_views(&mut out.board);

        out.phase = self.phase;
        out.auto_descend = self.auto_descend;
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.lines = self.lines;
        out.pieces = self.pieces;
        out.games = self.games;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
