//! Geometric primitives for rasterization.
//!
//! Provides the integer grid-coordinate types consumed by the rasterizers.

use std::fmt;

/// A 2D point with integer grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A line segment between two grid points.
///
/// Endpoints carry no ordering constraint; rasterizers that require a
/// particular traversal direction normalize internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

/// A circle defined by a center point and an integer radius.
///
/// Radius 0 degenerates to the center cell. Negative radii are
/// representable; the rasterizer rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Radius in grid cells.
    pub radius: i32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    /// Create a circle from center coordinates and a radius.
    #[must_use]
    pub const fn from_coords(xc: i32, yc: i32, radius: i32) -> Self {
        Self::new(Point::new(xc, yc), radius)
    }
}
