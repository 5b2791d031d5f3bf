//! Midpoint circle rasterization.

use crate::error::{Error, Result};
use crate::geometry::{Circle, Point};
use crate::raster::Raster;

/// Rasterize a circle outline with Bresenham's midpoint algorithm.
///
/// One octant arc is walked with an integer decision variable; each arc step
/// emits the 8 symmetric reflections about the center in a fixed order.
/// Cells on the axes and the diagonal are emitted more than once (a radius
/// of 0 emits the center 8 times); see [`Raster::deduplicated`] for callers
/// wanting unique cells.
///
/// # Errors
///
/// Returns [`Error::InvalidRadius`] for a negative radius, before any point
/// is emitted.
pub fn midpoint_circle(circle: Circle) -> Result<Raster> {
    if circle.radius < 0 {
        return Err(Error::InvalidRadius {
            radius: circle.radius,
        });
    }

    let (xc, yc) = (circle.center.x, circle.center.y);
    let r = circle.radius;

    let mut x = 0;
    let mut y = r;
    let mut d = 3 - 2 * r;
    let mut raster = Raster::new();

    while x <= y {
        raster.push(Point::new(xc + x, yc + y));
        raster.push(Point::new(xc - x, yc + y));
        raster.push(Point::new(xc + x, yc - y));
        raster.push(Point::new(xc - x, yc - y));
        raster.push(Point::new(xc + y, yc + x));
        raster.push(Point::new(xc - y, yc + x));
        raster.push(Point::new(xc + y, yc - x));
        raster.push(Point::new(xc - y, yc - x));

        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
    }

    Ok(raster)
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
