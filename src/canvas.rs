//! Grid canvas rendering.
//!
//! Maps grid cells to screen pixels and paints the visualization surface:
//! background, grid lines, axes, and one filled square per rasterized cell.
//! The rasterizers themselves know nothing about pixels; everything
//! screen-related lives here.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::raster::Raster;

/// Screen rectangle covered by one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    /// X pixel of the top-left corner.
    pub x: i32,
    /// Y pixel of the top-left corner.
    pub y: i32,
    /// Side length in pixels.
    pub size: u32,
}

/// Grid-to-screen mapping.
///
/// Grid y grows upward while screen y grows downward, so the cell at grid
/// `(x, y)` covers the square with top-left pixel
/// `(x * size + origin_x, -y * size + origin_y - size)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellTransform {
    cell_size: i32,
    origin_x: i32,
    origin_y: i32,
}

impl CellTransform {
    /// Create a transform with an explicit origin (the screen position of
    /// the grid origin's corner).
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is not positive.
    pub fn new(cell_size: i32, origin_x: i32, origin_y: i32) -> Result<Self> {
        if cell_size <= 0 {
            return Err(Error::InvalidCellSize { cell_size });
        }
        Ok(Self {
            cell_size,
            origin_x,
            origin_y,
        })
    }

    /// Create a transform whose origin is centered in a surface of the
    /// given pixel dimensions, snapped to the cell boundary at or below the
    /// midpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is not positive.
    pub fn centered(width: u32, height: u32, cell_size: i32) -> Result<Self> {
        if cell_size <= 0 {
            return Err(Error::InvalidCellSize { cell_size });
        }
        let origin_x = (width as i32 / 2 / cell_size) * cell_size;
        let origin_y = (height as i32 / 2 / cell_size) * cell_size;
        Self::new(cell_size, origin_x, origin_y)
    }

    /// Cell side length in pixels.
    #[must_use]
    pub const fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Screen position of the grid origin's corner.
    #[must_use]
    pub const fn origin(&self) -> (i32, i32) {
        (self.origin_x, self.origin_y)
    }

    /// Map a grid point to its screen rectangle.
    #[must_use]
    pub const fn apply(&self, point: Point) -> CellRect {
        CellRect {
            x: point.x * self.cell_size + self.origin_x,
            y: -point.y * self.cell_size + self.origin_y - self.cell_size,
            size: self.cell_size as u32,
        }
    }
}

/// Colors for the canvas layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTheme {
    /// Background fill.
    pub background: Rgba,
    /// Grid-line color.
    pub grid: Rgba,
    /// Axis color.
    pub axis: Rgba,
    /// Rasterized-cell fill.
    pub cell: Rgba,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            grid: Rgba::LIGHT_GRAY,
            axis: Rgba::DARK_GRAY,
            cell: Rgba::BLACK,
        }
    }
}

/// Paints rasters onto a grid surface.
///
/// The canvas centers the grid origin, paints grid lines every cell, a
/// vertical and horizontal axis through the origin, and filled squares for
/// rasterized cells. Cells outside the surface are clipped.
///
/// # Example
///
/// ```
/// use rasterviz::canvas::GridCanvas;
/// use rasterviz::geometry::Line;
/// use rasterviz::raster::bresenham;
///
/// let canvas = GridCanvas::new(800, 800, 20).unwrap();
/// let raster = bresenham(Line::from_coords(0, 0, 10, 4));
/// let fb = canvas.render(&raster).unwrap();
/// assert_eq!(fb.width(), 800);
/// ```
#[derive(Debug, Clone)]
pub struct GridCanvas {
    width: u32,
    height: u32,
    transform: CellTransform,
    theme: GridTheme,
}

impl GridCanvas {
    /// Create a canvas with a centered grid origin.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or `cell_size` is not
    /// positive.
    pub fn new(width: u32, height: u32, cell_size: i32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            transform: CellTransform::centered(width, height, cell_size)?,
            theme: GridTheme::default(),
        })
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: GridTheme) -> Self {
        self.theme = theme;
        self
    }

    /// The canvas's grid-to-screen transform.
    #[must_use]
    pub const fn transform(&self) -> CellTransform {
        self.transform
    }

    /// Paint grid lines every cell, starting from the top-left corner.
    pub fn draw_grid(&self, fb: &mut Framebuffer) {
        let step = self.transform.cell_size();
        let mut x = 0;
        while x < self.width as i32 {
            fb.fill_rect(x, 0, 1, self.height, self.theme.grid);
            x += step;
        }
        let mut y = 0;
        while y < self.height as i32 {
            fb.fill_rect(0, y, self.width, 1, self.theme.grid);
            y += step;
        }
    }

    /// Paint the vertical and horizontal axes through the grid origin.
    pub fn draw_axes(&self, fb: &mut Framebuffer) {
        let (origin_x, origin_y) = self.transform.origin();
        fb.fill_rect(origin_x, 0, 1, self.height, self.theme.axis);
        fb.fill_rect(0, origin_y, self.width, 1, self.theme.axis);
    }

    /// Fill one grid cell.
    pub fn fill_cell(&self, fb: &mut Framebuffer, point: Point, color: Rgba) {
        let rect = self.transform.apply(point);
        fb.fill_rect(rect.x, rect.y, rect.size, rect.size, color);
    }

    /// Fill every cell of a raster.
    pub fn fill_raster(&self, fb: &mut Framebuffer, raster: &Raster, color: Rgba) {
        for point in raster.iter() {
            self.fill_cell(fb, point, color);
        }
    }

    /// Render a raster onto a fresh framebuffer.
    ///
    /// Layers are painted in order: background, grid, axes, cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be allocated.
    pub fn render(&self, raster: &Raster) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(self.theme.background);
        self.draw_grid(&mut fb);
        self.draw_axes(&mut fb);
        self.fill_raster(&mut fb, raster, self.theme.cell);
        Ok(fb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Line;
    use crate::raster::bresenham;

    #[test]
    fn test_transform_maps_origin_cell() {
        let transform = CellTransform::new(20, 400, 400).expect("positive cell size");
        let rect = transform.apply(Point::new(0, 0));
        assert_eq!(
            rect,
            CellRect {
                x: 400,
                y: 380,
                size: 20
            }
        );
    }

    #[test]
    fn test_transform_inverts_y() {
        let transform = CellTransform::new(20, 400, 400).expect("positive cell size");

        // One cell up in grid space is one cell toward the top of the screen.
        let up = transform.apply(Point::new(0, 1));
        assert_eq!(up.y, 360);

        let down = transform.apply(Point::new(0, -1));
        assert_eq!(down.y, 400);

        let right = transform.apply(Point::new(1, 0));
        assert_eq!(right.x, 420);
    }

    #[test]
    fn test_centered_snaps_to_cell_boundary() {
        let transform = CellTransform::centered(810, 810, 20).expect("positive cell size");
        assert_eq!(transform.origin(), (400, 400));

        let exact = CellTransform::centered(800, 600, 20).expect("positive cell size");
        assert_eq!(exact.origin(), (400, 300));
    }

    #[test]
    fn test_zero_cell_size_is_rejected() {
        assert!(matches!(
            CellTransform::new(0, 0, 0),
            Err(Error::InvalidCellSize { cell_size: 0 })
        ));
        assert!(matches!(
            CellTransform::centered(800, 800, 0),
            Err(Error::InvalidCellSize { cell_size: 0 })
        ));
        assert!(CellTransform::new(-5, 0, 0).is_err());
    }

    #[test]
    fn test_canvas_rejects_zero_dimensions() {
        assert!(GridCanvas::new(0, 800, 20).is_err());
        assert!(GridCanvas::new(800, 0, 20).is_err());
    }

    #[test]
    fn test_grid_and_axis_pixels() {
        let canvas = GridCanvas::new(100, 100, 10).expect("canvas creation should succeed");
        let theme = GridTheme::default();
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(theme.background);
        canvas.draw_grid(&mut fb);
        canvas.draw_axes(&mut fb);

        // Grid lines land on every cell boundary.
        assert_eq!(fb.get_pixel(10, 5), Some(theme.grid));
        assert_eq!(fb.get_pixel(5, 20), Some(theme.grid));
        // Open cells keep the background.
        assert_eq!(fb.get_pixel(5, 5), Some(theme.background));
        // Axes pass through the centered origin and cover the grid line there.
        assert_eq!(canvas.transform().origin(), (50, 50));
        assert_eq!(fb.get_pixel(50, 5), Some(theme.axis));
        assert_eq!(fb.get_pixel(5, 50), Some(theme.axis));
    }

    #[test]
    fn test_fill_cell_paints_expected_square() {
        let canvas = GridCanvas::new(100, 100, 10).expect("canvas creation should succeed");
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        // Origin is (50, 50): cell (0, 0) covers x 50..60, y 40..50.
        canvas.fill_cell(&mut fb, Point::new(0, 0), Rgba::BLACK);
        assert_eq!(fb.get_pixel(50, 40), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(59, 49), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(60, 50), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(49, 39), Some(Rgba::WHITE));
    }

    #[test]
    fn test_off_canvas_cells_are_clipped() {
        let canvas = GridCanvas::new(100, 100, 10).expect("canvas creation should succeed");
        let mut fb = Framebuffer::new(100, 100).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);

        canvas.fill_cell(&mut fb, Point::new(100, 100), Rgba::BLACK);
        canvas.fill_cell(&mut fb, Point::new(-100, -100), Rgba::BLACK);

        for y in 0..100 {
            for x in 0..100 {
                assert_eq!(fb.get_pixel(x, y), Some(Rgba::WHITE));
            }
        }
    }

    #[test]
    fn test_render_paints_raster_cells() {
        let canvas = GridCanvas::new(100, 100, 10).expect("canvas creation should succeed");
        let raster = bresenham(Line::from_coords(0, 0, 2, 0));
        let fb = canvas.render(&raster).expect("render should succeed");

        let theme = GridTheme::default();
        // Cells (0,0), (1,0), (2,0) sit just above the horizontal axis.
        assert_eq!(fb.get_pixel(55, 45), Some(theme.cell));
        assert_eq!(fb.get_pixel(65, 45), Some(theme.cell));
        assert_eq!(fb.get_pixel(75, 45), Some(theme.cell));
        // A cell off the segment keeps the background.
        assert_eq!(fb.get_pixel(35, 45), Some(theme.background));
    }

    #[test]
    fn test_custom_theme() {
        let theme = GridTheme {
            background: Rgba::BLACK,
            grid: Rgba::DARK_GRAY,
            axis: Rgba::LIGHT_GRAY,
            cell: Rgba::WHITE,
        };
        let canvas = GridCanvas::new(40, 40, 8)
            .expect("canvas creation should succeed")
            .theme(theme);
        let raster = bresenham(Line::from_coords(0, 0, 0, 0));
        let fb = canvas.render(&raster).expect("render should succeed");

        // Origin snaps to (16, 16); cell (0, 0) covers x 16..24, y 8..16.
        assert_eq!(fb.get_pixel(20, 12), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(4, 4), Some(Rgba::BLACK));
    }
}
