//! # Rasterviz
//!
//! Visualizer for classic rasterization algorithms: converts continuous
//! geometric input (line endpoints, circle center and radius) into ordered
//! sequences of integer grid cells, then renders them as traces, grid
//! images, or terminal art.
//!
//! ## Features
//!
//! - **Four classic algorithms**: step-by-step sampling, DDA, Bresenham's
//!   line, and Bresenham's midpoint circle, each with its reference
//!   normalization and rounding policy
//! - **Ordered emission**: every run records cells in traversal order, so
//!   traces and tests see exactly what the algorithm visited
//! - **Grid rendering**: centered axes, cell grid, and filled cells to PNG
//!   or terminal output
//!
//! ## Quick Start
//!
//! ```rust
//! use rasterviz::prelude::*;
//!
//! // Rasterize a segment with Bresenham's algorithm
//! let request = Rasterizer::Bresenham(Line::from_coords(0, 0, 4, 2));
//! let raster = request.rasterize()?;
//! assert_eq!(raster.len(), 5);
//!
//! // Text trace of the visited cells
//! let trace = request.trace()?;
//! assert!(trace.starts_with("bresenham:\n"));
//!
//! // Paint the cells onto a centered grid
//! let canvas = GridCanvas::new(800, 800, 20)?;
//! let fb = canvas.render(&raster)?;
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert_eq!(&png[..4], &[137, 80, 78, 71]);
//! # Ok::<(), rasterviz::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." *IBM Systems Journal*, 4(1), 25-30.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types for grid rendering.
pub mod color;

/// Pixel surface shared by the canvas and the output encoders.
pub mod framebuffer;

/// Geometric primitives (points, lines, circles).
pub mod geometry;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Rasterization engine (step-by-step, DDA, Bresenham, midpoint circle).
pub mod raster;

/// Textual traces of rasterization runs.
pub mod trace;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Grid canvas rendering (cell transform, grid, axes).
pub mod canvas;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterviz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use rasterviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::canvas::{CellRect, CellTransform, GridCanvas, GridTheme};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, Line, Point};
    pub use crate::output::{PngEncoder, TerminalEncoder};
    pub use crate::raster::{
        bresenham, dda, midpoint_circle, step_by_step, Raster, Rasterizer,
    };
    pub use crate::trace::format_trace;
}
