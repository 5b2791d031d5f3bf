//! Terminal output encoder.
//!
//! Renders rasters as ASCII cell grids, one character per grid cell, with
//! grid y growing upward (the top row of the output is the highest y).

use crate::geometry::Point;
use crate::raster::Raster;
use std::collections::HashSet;

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    cell: char,
    empty: char,
    axes: bool,
    bounds: Option<(i32, i32, i32, i32)>,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cell: '#',
            empty: '.',
            axes: false,
            bounds: None,
        }
    }

    /// Set the characters for filled and empty cells.
    #[must_use]
    pub fn glyphs(mut self, cell: char, empty: char) -> Self {
        self.cell = cell;
        self.empty = empty;
        self
    }

    /// Mark the axis rows and columns (`|`, `-`, `+` at the origin).
    #[must_use]
    pub fn axes(mut self, axes: bool) -> Self {
        self.axes = axes;
        self
    }

    /// Set the view window in grid coordinates (inclusive).
    /// If not set, the window is fitted to the raster's extent.
    #[must_use]
    pub fn bounds(mut self, x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        self.bounds = Some((x_min, y_min, x_max, y_max));
        self
    }

    /// Render a raster to a string.
    ///
    /// An empty raster without explicit bounds renders to an empty string.
    #[must_use]
    pub fn encode(&self, raster: &Raster) -> String {
        let Some((x_min, y_min, x_max, y_max)) = self.bounds.or_else(|| extent(raster)) else {
            return String::new();
        };

        let cells: HashSet<Point> = raster.iter().collect();
        let width = (x_max - x_min + 1) as usize;
        let height = (y_max - y_min + 1) as usize;
        let mut out = String::with_capacity((width + 1) * height);

        for y in (y_min..=y_max).rev() {
            for x in x_min..=x_max {
                out.push(self.glyph_at(&cells, x, y));
            }
            out.push('\n');
        }

        out
    }

    /// Write output directly to stdout.
    pub fn print(&self, raster: &Raster) {
        print!("{}", self.encode(raster));
    }

    fn glyph_at(&self, cells: &HashSet<Point>, x: i32, y: i32) -> char {
        if cells.contains(&Point::new(x, y)) {
            self.cell
        } else if self.axes && x == 0 && y == 0 {
            '+'
        } else if self.axes && x == 0 {
            '|'
        } else if self.axes && y == 0 {
            '-'
        } else {
            self.empty
        }
    }
}

/// Bounding box of a raster's cells, if any.
fn extent(raster: &Raster) -> Option<(i32, i32, i32, i32)> {
    let first = raster.first()?;
    let mut bounds = (first.x, first.y, first.x, first.y);
    for point in raster.iter() {
        bounds.0 = bounds.0.min(point.x);
        bounds.1 = bounds.1.min(point.y);
        bounds.2 = bounds.2.max(point.x);
        bounds.3 = bounds.3.max(point.y);
    }
    Some(bounds)
}
