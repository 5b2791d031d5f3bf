//! Algorithm selection and dispatch.

use crate::error::Result;
use crate::geometry::{Circle, Line};
use crate::raster::{bresenham, dda, midpoint_circle, step_by_step, Raster};
use crate::trace::format_trace;

/// A rasterization request: one algorithm paired with its geometry.
///
/// The variant set is closed; callers select an algorithm by constructing
/// the matching variant and get the same `rasterize` capability from each.
///
/// # Example
///
/// ```
/// use rasterviz::geometry::Line;
/// use rasterviz::raster::Rasterizer;
///
/// let request = Rasterizer::Bresenham(Line::from_coords(0, 0, 4, 2));
/// let raster = request.rasterize().unwrap();
/// assert_eq!(raster.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rasterizer {
    /// Naive per-axis sampling with floored minor coordinates.
    StepByStep(Line),
    /// Digital Differential Analyzer with rounded accumulation.
    Dda(Line),
    /// Bresenham's integer error-term line.
    Bresenham(Line),
    /// Bresenham's midpoint circle.
    Circle(Circle),
}

impl Rasterizer {
    /// Name used as the trace header for this algorithm.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::StepByStep(_) => "step-by-step",
            Self::Dda(_) => "dda",
            Self::Bresenham(_) => "bresenham",
            Self::Circle(_) => "circle bresenham",
        }
    }

    /// Run the selected algorithm on its geometry.
    ///
    /// # Errors
    ///
    /// Returns an error for a circle with a negative radius; the line
    /// variants never fail.
    pub fn rasterize(&self) -> Result<Raster> {
        match *self {
            Self::StepByStep(line) => Ok(step_by_step(line)),
            Self::Dda(line) => Ok(dda(line)),
            Self::Bresenham(line) => Ok(bresenham(line)),
            Self::Circle(circle) => midpoint_circle(circle),
        }
    }

    /// Rasterize and render the textual trace in one step.
    ///
    /// # Errors
    ///
    /// Returns an error for a circle with a negative radius.
    pub fn trace(&self) -> Result<String> {
        let raster = self.rasterize()?;
        Ok(format_trace(self.name(), &raster))
    }
}
