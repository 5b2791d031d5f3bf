//! Line rasterization algorithms.
//!
//! Three scan-conversion strategies with deliberately distinct policies:
//! step-by-step floors its minor coordinates while DDA rounds them, and
//! step-by-step normalizes each axis independently while DDA and Bresenham
//! follow the raw segment direction. The same endpoints can therefore
//! rasterize to different cell sequences per algorithm.

use crate::geometry::{Line, Point};
use crate::raster::Raster;

/// Rasterize a line by sampling the minor axis at each major-axis step.
///
/// Endpoints are normalized per axis (x0 <= x1 and y0 <= y1 independently),
/// so a falling segment is traversed as its mirrored rising counterpart.
/// The major axis is the strictly larger delta; ties go to y. Minor
/// coordinates are computed as `start + slope * step` in `f64` and floored,
/// biasing the result toward smaller cells where DDA would round up.
#[must_use]
pub fn step_by_step(line: Line) -> Raster {
    let (mut x0, mut x1) = (line.start.x, line.end.x);
    let (mut y0, mut y1) = (line.start.y, line.end.y);

    // Independent swaps: x and y are each put in ascending order without
    // keeping the endpoints paired.
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
    }
    if y0 > y1 {
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;

    let mut raster = Raster::with_capacity(dx.max(dy) as usize + 1);

    // Zero-length segment: the y-major slope below would be 0/0.
    if dx == 0 && dy == 0 {
        raster.push(Point::new(x0, y0));
        return raster;
    }

    if dx > dy {
        let slope = f64::from(dy) / f64::from(dx);
        for x in x0..=x1 {
            let y = f64::from(y0) + slope * f64::from(x - x0);
            raster.push(Point::new(x, y.floor() as i32));
        }
    } else {
        let slope = f64::from(dx) / f64::from(dy);
        for y in y0..=y1 {
            let x = f64::from(x0) + slope * f64::from(y - y0);
            raster.push(Point::new(x.floor() as i32, y));
        }
    }

    raster
}

/// Rasterize a line with the Digital Differential Analyzer.
///
/// Traversal follows the raw segment direction (no endpoint normalization).
/// Both coordinates accumulate a constant `f64` increment per step and are
/// rounded to the nearest integer at each emission; `max(|dx|, |dy|) + 1`
/// points are emitted.
#[must_use]
pub fn dda(line: Line) -> Raster {
    let dx = line.end.x - line.start.x;
    let dy = line.end.y - line.start.y;
    let steps = dx.abs().max(dy.abs());

    let mut raster = Raster::with_capacity(steps as usize + 1);

    // Zero-length segment: no steps, and the increments would be 0/0.
    if steps == 0 {
        raster.push(line.start);
        return raster;
    }

    let x_inc = f64::from(dx) / f64::from(steps);
    let y_inc = f64::from(dy) / f64::from(steps);

    let mut x = f64::from(line.start.x);
    let mut y = f64::from(line.start.y);
    for _ in 0..=steps {
        raster.push(Point::new(x.round() as i32, y.round() as i32));
        x += x_inc;
        y += y_inc;
    }

    raster
}

/// Rasterize a line with Bresenham's integer algorithm.
///
/// Integer-only: a running error term decides, per step, whether to advance
/// along x, y, or both. Emits exactly `max(|dx|, |dy|) + 1` points from start
/// to end inclusive, never overshooting the target.
///
/// # References
///
/// Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
#[must_use]
pub fn bresenham(line: Line) -> Raster {
    let dx = (line.end.x - line.start.x).abs();
    let dy = (line.end.y - line.start.y).abs();
    let sx = if line.start.x < line.end.x { 1 } else { -1 };
    let sy = if line.start.y < line.end.y { 1 } else { -1 };
    let mut err = dx - dy;

    let mut x = line.start.x;
    let mut y = line.start.y;
    let mut raster = Raster::with_capacity(dx.max(dy) as usize + 1);

    loop {
        raster.push(Point::new(x, y));

        if x == line.end.x && y == line.end.y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    raster
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================
