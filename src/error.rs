//! Error types for rasterviz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying I/O failure while writing an output file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure inside the PNG encoder.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Rejected width.
        width: u32,
        /// Rejected height.
        height: u32,
    },

    /// Negative radius passed to the circle rasterizer.
    #[error("Invalid radius: {radius}")]
    InvalidRadius {
        /// Radius value.
        radius: i32,
    },

    /// Zero cell size for a grid transform.
    #[error("Invalid cell size: {cell_size}")]
    InvalidCellSize {
        /// Cell size value.
        cell_size: i32,
    },
}
