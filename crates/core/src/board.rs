//! Board module - manages the game grid
//!
//! The board is a 20x10 grid where each cell carries an occupancy flag, a
//! color and its screen rectangle. Uses a flat array for cache locality and
//! zero allocation; the same array is reused across games.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col
//! ranges 0..9 (left to right).
//!
//! Out-of-range coordinates are a caller bug. Every caller in this crate
//! clips to the board before touching it, so accessors panic instead of
//! returning an `Option`.

use arrayvec::ArrayVec;

use crate::geometry::{GeometryError, Rect};
use crate::snapshot::CellView;
use crate::types::{
    Color, BACKGROUND, BOARD_COLS, BOARD_ORIGIN, BOARD_ROWS, CELL_HEIGHT, CELL_SPACING_X,
    CELL_SPACING_Y, CELL_WIDTH,
};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_ROWS * BOARD_COLS;

/// Screen placement of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    origin_x: i32,
    origin_y: i32,
    cell_width: i32,
    cell_height: i32,
    spacing_x: i32,
    spacing_y: i32,
}

impl BoardLayout {
    /// Validate a layout: origin and spacing must be non-negative, cell sizes positive
    pub fn new(
        origin: (i32, i32),
        cell_size: (i32, i32),
        spacing: (i32, i32),
    ) -> Result<Self, GeometryError> {
        // Probing the first cell validates origin and size in one place.
        Rect::new(origin.0, origin.1, cell_size.0, cell_size.1)?;
        for (name, value) in [("spacing_x", spacing.0), ("spacing_y", spacing.1)] {
            if value < 0 {
                return Err(GeometryError::InvalidArgument {
                    name,
                    value,
                    requirement: "zero or greater",
                });
            }
        }

        Ok(Self {
            origin_x: origin.0,
            origin_y: origin.1,
            cell_width: cell_size.0,
            cell_height: cell_size.1,
            spacing_x: spacing.0,
            spacing_y: spacing.1,
        })
    }

    /// Screen rectangle of the cell at (row, col)
    pub fn cell_bounds(&self, row: usize, col: usize) -> Rect {
        let x = self.origin_x + col as i32 * (self.cell_width + self.spacing_x);
        let y = self.origin_y + row as i32 * (self.cell_height + self.spacing_y);
        Rect::from_parts(x as f32, y as f32, self.cell_width, self.cell_height)
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            origin_x: BOARD_ORIGIN.0,
            origin_y: BOARD_ORIGIN.1,
            cell_width: CELL_WIDTH,
            cell_height: CELL_HEIGHT,
            spacing_x: CELL_SPACING_X,
            spacing_y: CELL_SPACING_Y,
        }
    }
}

/// One grid cell: screen rectangle plus play state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardCell {
    pub bounds: Rect,
    pub occupied: bool,
    pub color: Color,
}

impl BoardCell {
    fn empty(bounds: Rect) -> Self {
        Self {
            bounds,
            occupied: false,
            color: BACKGROUND,
        }
    }
}

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [BoardCell; BOARD_SIZE],
    layout: BoardLayout,
}

impl Board {
    /// Create a new empty board with the default layout
    pub fn new() -> Self {
        Self::with_layout(BoardLayout::default())
    }

    pub fn with_layout(layout: BoardLayout) -> Self {
        let cells = std::array::from_fn(|idx| {
            BoardCell::empty(layout.cell_bounds(idx / BOARD_COLS, idx % BOARD_COLS))
        });
        Self { cells, layout }
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        debug_assert!(
            row < BOARD_ROWS && col < BOARD_COLS,
            "board coordinate ({}, {}) out of range",
            row,
            col
        );
        row * BOARD_COLS + col
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        BOARD_ROWS
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        BOARD_COLS
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> BoardCell {
        self.cells[Self::index(row, col)]
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.cells[Self::index(row, col)].occupied
    }

    pub fn set_occupied(&mut self, row: usize, col: usize, occupied: bool) {
        self.cells[Self::index(row, col)].occupied = occupied;
    }

    pub fn set_color(&mut self, row: usize, col: usize, color: Color) {
        self.cells[Self::index(row, col)].color = color;
    }

    /// Mark every cell unoccupied and paint it with the background color
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.occupied = false;
            cell.color = BACKGROUND;
        }
    }

    /// Check if every column of a row is occupied
    pub fn is_row_complete(&self, row: usize) -> bool {
        let start = Self::index(row, 0);
        self.cells[start..start + BOARD_COLS]
            .iter()
            .all(|cell| cell.occupied)
    }

    fn clear_row(&mut self, row: usize) {
        let start = Self::index(row, 0);
        for cell in &mut self.cells[start..start + BOARD_COLS] {
            cell.occupied = false;
            cell.color = BACKGROUND;
        }
    }

    /// Copy occupancy and color (never bounds) from one row to another
    fn copy_row(&mut self, src: usize, dst: usize) {
        for col in 0..BOARD_COLS {
            let from = self.cells[Self::index(src, col)];
            let to = &mut self.cells[Self::index(dst, col)];
            to.occupied = from.occupied;
            to.color = from.color;
        }
    }

    /// Clear complete rows and pack the remaining rows toward the bottom
    ///
    /// Single bottom-to-top pass with one pending destination row: the first
    /// complete row found becomes the destination, every incomplete row above
    /// it is copied down into the destination (and cleared), and the
    /// destination then moves up one row. Further complete rows are cleared
    /// without moving the destination.
    ///
    /// Returns the indices of the complete rows, bottom to top.
    pub fn clear_completed_rows(&mut self) -> ArrayVec<usize, BOARD_ROWS> {
        let mut cleared = ArrayVec::new();
        let mut destination: Option<usize> = None;

        // Row 0 is scanned too; a complete top row is cleared like any other.
        for row in (0..BOARD_ROWS).rev() {
            if self.is_row_complete(row) {
                self.clear_row(row);
                cleared.push(row);
                if destination.is_none() {
                    destination = Some(row);
                }
            } else if let Some(dst) = destination {
                if row < dst {
                    self.copy_row(row, dst);
                    self.clear_row(row);
                    destination = Some(dst - 1);
                }
            }
        }

        cleared
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.occupied).count()
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    /// Occupancy grid, mostly useful for assertions
    pub fn occupancy(&self) -> [[bool; BOARD_COLS]; BOARD_ROWS] {
        let mut out = [[false; BOARD_COLS]; BOARD_ROWS];
        for (row, line) in out.iter_mut().enumerate() {
            for (col, slot) in line.iter_mut().enumerate() {
                *slot = self.is_occupied(row, col);
            }
        }
        out
    }

    /// Copy occupancy and color into a renderer grid
    pub fn write_cell_views(&self, out: &mut [[CellView; BOARD_COLS]; BOARD_ROWS]) {
        for (row, line) in out.iter_mut().enumerate() {
            let start = Self::index(row, 0);
            for (view, cell) in line.iter_mut().zip(&self.cells[start..start + BOARD_COLS]) {
                view.occupied = cell.occupied;
                view.color = cell.color;
            }
        }
    }

    /// Create from rows of `#` (occupied) and `.` (empty) for testing
    ///
    /// Rows are bottom-aligned: the last string is row 19.
    #[cfg(test)]
    pub fn from_pattern(pattern: &[&str], color: Color) -> Self {
        assert!(pattern.len() <= BOARD_ROWS);
        let mut board = Self::new();
        let offset = BOARD_ROWS - pattern.len();
        for (i, line) in pattern.iter().enumerate() {
            assert_eq!(line.len(), BOARD_COLS);
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    board.set_occupied(offset + i, col, true);
                    board.set_color(offset + i, col, color);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
