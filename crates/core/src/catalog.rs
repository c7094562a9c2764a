//! Catalog module - shape matrices and the fixed shape catalog
//!
//! A [`Shape`] is a small rectangular boolean matrix (at most 3x3) stored
//! inline, so shapes are `Copy` and a rotated shape is always a fresh value,
//! never an alias of a catalog entry.

use crate::rng::RandomSource;
use crate::types::{ShapeKind, MAX_SHAPE_DIM};

/// Rectangular filled/empty matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty, ragged, or larger than 3x3.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let t = Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]]);
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert!(t.is_filled(1, 1));
    /// assert!(!t.is_filled(1, 0));
    /// ```
    pub fn from_rows(matrix: &[&[u8]]) -> Self {
        let rows = matrix.len();
        assert!(rows > 0 && rows <= MAX_SHAPE_DIM, "shape must have 1..=3 rows");
        let cols = matrix[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM, "shape must have 1..=3 columns");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, line) in matrix.iter().enumerate() {
            assert_eq!(line.len(), cols, "shape rows must have equal length");
            for (c, &value) in line.iter().enumerate() {
                cells[r][c] = value != 0;
            }
        }

        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row][col]
    }

    /// Iterate the (row, col) offsets of filled cells, row-major
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r, c))
        })
    }

    /// Rotate 90°: dimensions swap and (r, c) moves to (c, last_row - r)
    ///
    /// Always turns the same way; four calls give back the original matrix.
    pub fn rotated(&self) -> Self {
        let last_row = self.rows - 1;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for r in 0..self.rows {
            for c in 0..self.cols {
                cells[c][last_row - r] = self.cells[r][c];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// The fixed set of selectable shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeCatalog {
    entries: [(ShapeKind, Shape); 7],
}

impl ShapeCatalog {
    /// The standard seven shapes in catalog order (see [`ShapeKind::ALL`])
    pub fn standard() -> Self {
        Self {
            entries: [
                (ShapeKind::Z, Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]])),
                (ShapeKind::S, Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]])),
                (ShapeKind::T, Shape::from_rows(&[&[1, 1, 1], &[0, 1, 0]])),
                (ShapeKind::J, Shape::from_rows(&[&[0, 1], &[0, 1], &[1, 1]])),
                (ShapeKind::L, Shape::from_rows(&[&[1, 0], &[1, 0], &[1, 1]])),
                (ShapeKind::I, Shape::from_rows(&[&[1], &[1], &[1]])),
                (ShapeKind::O, Shape::from_rows(&[&[1, 1], &[1, 1]])),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<(ShapeKind, Shape)> {
        self.entries.get(index).copied()
    }

    /// Catalog index of a shape kind
    pub fn index_of(&self, kind: ShapeKind) -> Option<usize> {
        self.entries.iter().position(|&(k, _)| k == kind)
    }

    pub fn shape(&self, kind: ShapeKind) -> Option<Shape> {
        self.entries
            .iter()
            .find(|&&(k, _)| k == kind)
            .map(|&(_, shape)| shape)
    }

    /// Pick an entry uniformly at random
    pub fn pick(&self, rng: &mut impl RandomSource) -> (ShapeKind, Shape) {
        self.entries[rng.next_index(self.entries.len())]
    }
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
