//! Logical coordinate types for widget geometry.
//!
//! All values are density-independent units as reported by the host layout
//! system. The coordinate system uses:
//! - Origin (0, 0) at the top-left corner of the widget
//! - X-axis increases to the right
//! - Y-axis increases downward
//! - Negative coordinates are allowed (touch areas may overflow the widget)
//!
//! # Example
//!
//! ```
//! use notch_ui::geometry::{Point, Rect, Size};
//!
//! let rect = Rect::new(10.0, 10.0, 40.0, 40.0);
//! assert!(rect.contains_point(10.0, 50.0));
//! assert!(rect.contains(Point::new(30.0, 30.0)));
//!
//! let size = Size::new(40.0, 40.0);
//! assert_eq!(Rect::from_position_size(Point::new(10.0, 10.0), size), rect);
//! ```

use std::ops::{Add, Sub};

use crate::dp::Dp;

/// A 2D position in logical space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by the given offsets.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Self) -> Self::Output {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// A 2D size in logical space.
///
/// Sizes compare exactly; the layout handshake relies on bitwise-equal
/// repeats being detected as "unchanged".
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Size {
    /// The width.
    pub width: f64,
    /// The height.
    pub height: f64,
}

impl Size {
    /// A zero size, the value of every measurement before the first layout
    /// pass.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Creates a size from two [`Dp`] lengths.
    pub const fn from_dp(width: Dp, height: Dp) -> Self {
        Self {
            width: width.0,
            height: height.0,
        }
    }
}

impl From<[f64; 2]> for Size {
    fn from([width, height]: [f64; 2]) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in logical space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x: f64,
    /// The y-coordinate of the top-left corner.
    pub y: f64,
    /// The width of the rectangle.
    pub width: f64,
    /// The height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// A zero rectangle (0×0 at the origin).
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a position and size.
    pub fn from_position_size(position: Point, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Returns the top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the size of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the rectangle moved by the given offsets.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Checks whether a point lies inside the rectangle.
    ///
    /// All four edges are inclusive: a point exactly on the border counts as
    /// inside. A NaN coordinate is never inside.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }

    /// Same as [`Rect::contains_point`] for a [`Point`].
    pub fn contains(&self, point: Point) -> bool {
        self.contains_point(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_point_inclusive_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);

        assert!(rect.contains_point(10.0, 20.0));
        assert!(rect.contains_point(40.0, 60.0));
        assert!(rect.contains_point(10.0, 60.0));
        assert!(rect.contains_point(40.0, 20.0));
        assert!(rect.contains_point(25.0, 35.0));
    }

    #[test]
    fn test_contains_point_outside() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);

        assert!(!rect.contains_point(9.999, 30.0));
        assert!(!rect.contains_point(40.001, 30.0));
        assert!(!rect.contains_point(20.0, 19.5));
        assert!(!rect.contains_point(20.0, 60.5));
        assert!(!rect.contains_point(f64::NAN, 30.0));
    }

    #[test]
    fn test_negative_origin() {
        let rect = Rect::new(-15.0, -10.0, 40.0, 40.0);
        assert!(rect.contains(Point::new(-15.0, 0.0)));
        assert!(rect.contains(Point::new(25.0, 30.0)));
        assert!(!rect.contains(Point::new(-16.0, 0.0)));
    }

    #[test]
    fn test_translate_keeps_size() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0).translate(-1.0, 5.0);
        assert_eq!(rect, Rect::new(0.0, 7.0, 3.0, 4.0));
        assert_eq!(rect.size(), Size::new(3.0, 4.0));
        assert_eq!(rect.origin(), Point::new(0.0, 7.0));
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(5.0, 15.0);
        assert_eq!(a + b, Point::new(15.0, 35.0));
        assert_eq!(a - b, Point::new(5.0, 5.0));
        assert_eq!(a.offset(1.0, -1.0), Point::new(11.0, 19.0));
    }
}
