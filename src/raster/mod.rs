//! Rasterization engine.
//!
//! Converts continuous geometric input (line endpoints, circle center and
//! radius) into ordered sequences of integer grid cells. Each algorithm has
//! its own normalization and rounding policy, so the same segment can
//! rasterize to different cell sequences; the differences are part of the
//! contract and covered by tests.
//!
//! # Algorithms
//!
//! - **Step-by-step**: naive per-axis sampling with floored minor coordinates
//! - **DDA**: incremental floating-point accumulation with rounding
//! - **Bresenham's Line**: integer-only error-term stepping
//! - **Midpoint Circle**: integer decision variable with 8-way symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

mod circle;
mod line;
mod rasterizer;
mod sequence;

pub use circle::midpoint_circle;
pub use line::{bresenham, dda, step_by_step};
pub use rasterizer::Rasterizer;
pub use sequence::Raster;
