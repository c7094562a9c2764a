//! Geometry module - screen rectangle bookkeeping for board cells
//!
//! A [`Rect`] tracks its four edges, its center and the center it had when it
//! was created. Sizes are whole pixels, positions are floats so a renderer can
//! move cells by fractional amounts.
//!
//! Constructors and setters validate eagerly: a non-positive width or height, or
//! a negative construction coordinate, is rejected with
//! [`GeometryError::InvalidArgument`] rather than clamped.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("invalid argument `{name}`: {value} (must be {requirement})")]
    InvalidArgument {
        name: &'static str,
        value: i32,
        requirement: &'static str,
    },
}

fn require_positive(name: &'static str, value: i32) -> Result<i32, GeometryError> {
    if value <= 0 {
        return Err(GeometryError::InvalidArgument {
            name,
            value,
            requirement: "greater than zero",
        });
    }
    Ok(value)
}

fn require_non_negative(name: &'static str, value: i32) -> Result<i32, GeometryError> {
    if value < 0 {
        return Err(GeometryError::InvalidArgument {
            name,
            value,
            requirement: "zero or greater",
        });
    }
    Ok(value)
}

/// A point in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    left: f32,
    top: f32,
    width: i32,
    height: i32,
    /// Center at construction time; never moves.
    anchor: Point,
}

impl Rect {
    /// Create a rectangle with its top-left corner at `(x, y)`
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::geometry::Rect;
    ///
    /// let rect = Rect::new(5, 5, 25, 25).unwrap();
    /// assert_eq!(rect.right(), 30.0);
    /// assert_eq!(rect.center().x, 17.0);
    ///
    /// assert!(Rect::new(0, 0, 0, 10).is_err());
    /// assert!(Rect::new(-1, 0, 10, 10).is_err());
    /// ```
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GeometryError> {
        let width = require_positive("width", width)?;
        let height = require_positive("height", height)?;
        let x = require_non_negative("x", x)?;
        let y = require_non_negative("y", y)?;
        Ok(Self::from_parts(x as f32, y as f32, width, height))
    }

    /// Build from values the caller has already validated
    pub(crate) fn from_parts(left: f32, top: f32, width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0);
        let mut rect = Self {
            left,
            top,
            width,
            height,
            anchor: Point::default(),
        };
        rect.anchor = rect.center();
        rect
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn right(&self) -> f32 {
        self.left + self.width as f32
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height as f32
    }

    /// Center point, using integer half sizes
    pub fn center(&self) -> Point {
        Point::new(
            self.left + (self.width / 2) as f32,
            self.top + (self.height / 2) as f32,
        )
    }

    /// Center the rectangle had when it was created
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Corners in order: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right(), self.top),
            Point::new(self.left, self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// Check if a point lies inside (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Change both dimensions, keeping the top-left corner
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), GeometryError> {
        let width = require_positive("width", width)?;
        let height = require_positive("height", height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn set_width(&mut self, width: i32) -> Result<(), GeometryError> {
        self.width = require_positive("width", width)?;
        Ok(())
    }

    pub fn set_height(&mut self, height: i32) -> Result<(), GeometryError> {
        self.height = require_positive("height", height)?;
        Ok(())
    }

    pub fn move_left(&mut self, delta: f32) {
        self.left -= delta;
    }

    pub fn move_right(&mut self, delta: f32) {
        self.left += delta;
    }

    pub fn move_up(&mut self, delta: f32) {
        self.top -= delta;
    }

    pub fn move_down(&mut self, delta: f32) {
        self.top += delta;
    }

    /// Translate so the center lands on `(x, y)`
    pub fn move_center(&mut self, x: f32, y: f32) {
        self.left = x - (self.width / 2) as f32;
        self.top = y - (self.height / 2) as f32;
    }

    /// Translate horizontally so the left edge lands on `x`
    pub fn set_left(&mut self, x: f32) {
        self.translate_x(x - self.left);
    }

    /// Translate horizontally so the right edge lands on `x`
    pub fn set_right(&mut self, x: f32) {
        self.translate_x(x - self.right());
    }

    /// Translate vertically so the top edge lands on `y`
    pub fn set_top(&mut self, y: f32) {
        self.translate_y(y - self.top);
    }

    /// Translate vertically so the bottom edge lands on `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.translate_y(y - self.bottom());
    }

    fn translate_x(&mut self, delta: f32) {
        if delta < 0.0 {
            self.move_left(delta.abs());
        } else if delta > 0.0 {
            self.move_right(delta);
        }
    }

    fn translate_y(&mut self, delta: f32) {
        if delta < 0.0 {
            self.move_up(delta.abs());
        } else if delta > 0.0 {
            self.move_down(delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_edges_and_center() {
        let rect = Rect::new(10, 20, 25, 15).unwrap();
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 35.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 35.0);
        // Half sizes use integer division.
        assert_eq!(rect.center(), Point::new(22.0, 27.0));
        assert_eq!(rect.anchor(), rect.center());
    }

    #[test]
    fn test_new_rejects_bad_arguments() {
        assert_eq!(
            Rect::new(0, 0, 0, 5),
            Err(GeometryError::InvalidArgument {
                name: "width",
                value: 0,
                requirement: "greater than zero",
            })
        );
        assert!(matches!(
            Rect::new(0, 0, 5, -3),
            Err(GeometryError::InvalidArgument { name: "height", .. })
        ));
        assert!(matches!(
            Rect::new(-1, 0, 5, 5),
            Err(GeometryError::InvalidArgument { name: "x", .. })
        ));
        assert!(matches!(
            Rect::new(0, -7, 5, 5),
            Err(GeometryError::InvalidArgument { name: "y", .. })
        ));
    }

    #[test]
    fn test_setters_validate_without_mutating() {
        let mut rect = Rect::new(0, 0, 10, 10).unwrap();
        assert!(rect.resize(0, 4).is_err());
        assert!(rect.set_width(-2).is_err());
        assert!(rect.set_height(0).is_err());
        assert_eq!((rect.width(), rect.height()), (10, 10));

        rect.resize(4, 6).unwrap();
        assert_eq!((rect.right(), rect.bottom()), (4.0, 6.0));
    }

    #[test]
    fn test_moves_keep_anchor() {
        let mut rect = Rect::new(10, 10, 10, 10).unwrap();
        let anchor = rect.anchor();

        rect.move_right(5.0);
        rect.move_down(2.5);
        assert_eq!(rect.left(), 15.0);
        assert_eq!(rect.top(), 12.5);

        rect.move_left(15.0);
        rect.move_up(12.5);
        assert_eq!((rect.left(), rect.top()), (0.0, 0.0));
        assert_eq!(rect.anchor(), anchor);
    }

    #[test]
    fn test_edge_setters_translate() {
        let mut rect = Rect::new(0, 0, 10, 4).unwrap();
        rect.set_right(30.0);
        assert_eq!((rect.left(), rect.right()), (20.0, 30.0));

        rect.set_bottom(2.0);
        assert_eq!((rect.top(), rect.bottom()), (-2.0, 2.0));

        rect.set_left(1.0);
        rect.set_top(1.0);
        assert_eq!(rect.corners()[0], Point::new(1.0, 1.0));
        assert_eq!(rect.corners()[3], Point::new(11.0, 5.0));
    }

    #[test]
    fn test_move_center() {
        let mut rect = Rect::new(0, 0, 10, 10).unwrap();
        rect.move_center(50.0, 60.0);
        assert_eq!(rect.center(), Point::new(50.0, 60.0));
        assert!(rect.contains(Point::new(45.0, 55.0)));
        assert!(!rect.contains(Point::new(44.0, 55.0)));
    }
}
