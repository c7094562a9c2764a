use crate::piece::ActivePiece;
use crate::types::{Color, GamePhase, ShapeKind, BACKGROUND, BOARD_COLS, BOARD_ROWS};

/// Occupancy and color of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellView {
    pub occupied: bool,
    pub color: Color,
}

impl Default for CellView {
    fn default() -> Self {
        Self {
            occupied: false,
            color: BACKGROUND,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub row: i32,
    pub col: i32,
    pub rows: usize,
    pub cols: usize,
    pub color: Color,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            row: value.row(),
            col: value.col(),
            rows: value.shape().rows(),
            cols: value.shape().cols(),
            color: value.color(),
        }
    }
}

/// Everything a renderer needs for one frame
///
/// The active piece is already committed to `board`; `active` is metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[CellView; BOARD_COLS]; BOARD_ROWS],
    pub phase: GamePhase,
    pub auto_descend: bool,
    pub active: Option<ActiveSnapshot>,
    pub lines: u32,
    pub pieces: u32,
    pub games: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[CellView::default(); BOARD_COLS]; BOARD_ROWS];
        self.phase = GamePhase::AwaitingNewGame;
        self.auto_descend = true;
        self.active = None;
        self.lines = 0;
        self.pieces = 0;
        self.games = 0;
    }

    pub fn playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[CellView::default(); BOARD_COLS]; BOARD_ROWS],
            phase: GamePhase::AwaitingNewGame,
            auto_descend: true,
            active: None,
            lines: 0,
            pieces: 0,
            games: 0,
        };
        s.clear();
        s
    }
}
