//! Piece module - the active falling piece
//!
//! The active piece lives *on* the board: after every operation its filled
//! cells are committed (occupied + piece color). Each move therefore follows
//! the same pattern:
//!
//! 1. erase the current footprint
//! 2. shift the position (or swap in the rotated shape)
//! 3. test for collision
//! 4. commit either the new placement or, on collision, the old one
//!
//! Every step happens inside one `&mut Board` borrow, so nothing outside can
//! observe the erased-but-not-recommitted board.
//!
//! Cells above the top edge (board row < 0) are never read or written; they
//! are not on the board yet.

use crate::board::Board;
use crate::catalog::{Shape, ShapeCatalog};
use crate::rng::RandomSource;
use crate::types::{Color, ShapeKind, BACKGROUND, BOARD_COLS, BOARD_ROWS, PALETTE};

const LAST_ROW: i32 = BOARD_ROWS as i32 - 1;
const LAST_COL: i32 = BOARD_COLS as i32 - 1;

/// Result of a downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descent {
    /// The piece moved one row down
    Fell,
    /// The piece could not move and is committed where it was; a new piece is due
    Landed,
}

/// Whether a freshly spawned piece fit on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// Committed at the top of the board
    Placed,
    /// Overlaps occupied cells; nothing was committed and a new game is required
    Blocked,
}

/// A spawned piece together with what happened while spawning it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub piece: ActivePiece,
    pub outcome: SpawnOutcome,
    /// Rows cleared by the line-clear pass that runs during spawn
    pub rows_cleared: usize,
}

impl Spawn {
    pub fn is_blocked(&self) -> bool {
        self.outcome == SpawnOutcome::Blocked
    }
}

/// The currently controllable shape and its board placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: ShapeKind,
    shape: Shape,
    row: i32,
    col: i32,
    bottom_row: i32,
    right_col: i32,
    color: Color,
}

impl ActivePiece {
    /// Place a shape with its top-left corner at (row, col)
    ///
    /// Nothing is written to the board.
    pub fn new(kind: ShapeKind, shape: Shape, row: i32, col: i32, color: Color) -> Self {
        Self {
            kind,
            shape,
            row,
            col,
            bottom_row: row + shape.rows() as i32 - 1,
            right_col: col + shape.cols() as i32 - 1,
            color,
        }
    }

    /// Spawn a random catalog shape at the top center of the board
    ///
    /// Order matters here and is kept exactly:
    /// 1. shape, then color, are drawn from `rng`
    /// 2. the new color is painted (color only) onto the cells under the shape
    /// 3. complete rows are cleared, resolving the previous piece's landing
    /// 4. collision check; only a non-colliding piece is committed
    pub fn spawn(
        board: &mut Board,
        catalog: &ShapeCatalog,
        rng: &mut impl RandomSource,
    ) -> Spawn {
        let (kind, shape) = catalog.pick(rng);
        let col = (BOARD_COLS as i32 - shape.cols() as i32) / 2;
        let color = PALETTE[rng.next_index(PALETTE.len())];
        let piece = Self::new(kind, shape, 0, col, color);

        piece.paint(board);
        let rows_cleared = board.clear_completed_rows().len();

        let outcome = if piece.collides(board) {
            SpawnOutcome::Blocked
        } else {
            piece.commit(board);
            SpawnOutcome::Placed
        };

        log::trace!(
            "spawned {} at ({}, {}) color {:?}: {:?}",
            kind.as_str(),
            piece.row,
            piece.col,
            color,
            outcome
        );

        Spawn {
            piece,
            outcome,
            rows_cleared,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn bottom_row(&self) -> i32 {
        self.bottom_row
    }

    pub fn right_col(&self) -> i32 {
        self.right_col
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Board coordinates of the filled cells that are on the board (row >= 0)
    pub fn footprint(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.shape.filled().filter_map(move |(r, c)| {
            let row = self.row + r as i32;
            let col = self.col + c as i32;
            (row >= 0).then_some((row as usize, col as usize))
        })
    }

    /// Check if any on-board filled cell overlaps an occupied board cell
    pub fn collides(&self, board: &Board) -> bool {
        self.footprint()
            .any(|(row, col)| board.is_occupied(row, col))
    }

    /// Write the footprint onto the board (occupied, piece color)
    pub fn commit(&self, board: &mut Board) {
        for (row, col) in self.footprint() {
            board.set_occupied(row, col, true);
            board.set_color(row, col, self.color);
        }
    }

    /// Remove the footprint from the board (unoccupied, background color)
    pub fn erase(&self, board: &mut Board) {
        for (row, col) in self.footprint() {
            board.set_occupied(row, col, false);
            board.set_color(row, col, BACKGROUND);
        }
    }

    /// Color pass used at spawn; occupancy is left alone
    fn paint(&self, board: &mut Board) {
        for (row, col) in self.footprint() {
            board.set_color(row, col, self.color);
        }
    }

    fn shift(&mut self, d_row: i32, d_col: i32) {
        self.row += d_row;
        self.bottom_row += d_row;
        self.col += d_col;
        self.right_col += d_col;
    }

    /// Shift one column left; returns whether the piece moved
    ///
    /// At column 0 this returns immediately without touching the board.
    pub fn move_left(&mut self, board: &mut Board) -> bool {
        if self.col == 0 {
            return false;
        }
        self.try_shift(board, 0, -1)
    }

    /// Shift one column right; returns whether the piece moved
    pub fn move_right(&mut self, board: &mut Board) -> bool {
        if self.right_col >= LAST_COL {
            return false;
        }
        self.try_shift(board, 0, 1)
    }

    fn try_shift(&mut self, board: &mut Board, d_row: i32, d_col: i32) -> bool {
        self.erase(board);
        self.shift(d_row, d_col);

        if self.collides(board) {
            self.shift(-d_row, -d_col);
            self.commit(board);
            false
        } else {
            self.commit(board);
            true
        }
    }

    /// Move one row down
    ///
    /// Hitting the floor or another piece leaves the piece committed in its
    /// previous place and reports [`Descent::Landed`]; spawning the next piece
    /// is up to the caller.
    pub fn move_down(&mut self, board: &mut Board) -> Descent {
        self.erase(board);
        self.shift(1, 0);

        if self.bottom_row > LAST_ROW || self.collides(board) {
            self.shift(-1, 0);
            self.commit(board);
            return Descent::Landed;
        }

        self.commit(board);
        Descent::Fell
    }

    /// Rotate 90° in place, recentering and clamping to the board
    ///
    /// Returns whether the rotation was adopted. A rotation that would collide
    /// leaves shape and position unchanged.
    pub fn rotate(&mut self, board: &mut Board) -> bool {
        let rotated = self.shape.rotated();
        let old_width = self.shape.cols() as i32;
        let old_height = self.shape.rows() as i32;

        let longer = old_width.max(old_height);
        let shorter = old_width.min(old_height);
        let mut offset = (longer - shorter) / 2;
        offset = if offset > 0 { offset - 1 } else { 0 };

        let mut col = self.col;
        let mut row = self.row;
        if old_width > old_height {
            col += offset;
            row -= offset;
        } else if old_width < old_height {
            col -= offset;
            row += offset;
        }
        // The rotated piece is old_height wide and old_width tall.
        let mut right_col = col + old_height - 1;
        let mut bottom_row = row + old_width - 1;

        self.erase(board);

        while col < 0 {
            col += 1;
            right_col += 1;
        }
        while right_col > LAST_COL {
            col -= 1;
            right_col -= 1;
        }
        while bottom_row > LAST_ROW {
            row -= 1;
            bottom_row -= 1;
        }
        // The top edge is also measured against the last row, not row 0.
        while row > LAST_ROW {
            row -= 1;
            bottom_row -= 1;
        }

        let candidate = Self {
            shape: rotated,
            row,
            col,
            bottom_row,
            right_col,
            ..*self
        };

        if candidate.collides(board) {
            log::debug!(
                "rotation of {} at ({}, {}) blocked",
                self.kind.as_str(),
                self.row,
                self.col
            );
            self.commit(board);
            return false;
        }

        *self = candidate;
        self.commit(board);
        true
    }
}

/// Free-function form of [`ActivePiece::collides`]
pub fn collides(board: &Board, piece: &ActivePiece) -> bool {
    piece.collides(board)
}
