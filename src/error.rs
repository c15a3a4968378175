//! Error types for the render pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating, laying out, encoding or writing a graph image
#[derive(Error, Debug)]
pub enum Error {
    /// Edge endpoint out of range, or no vertices at all
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// Layout cannot be computed for this vertex count
    #[error("Degenerate layout: {0}")]
    DegenerateLayout(String),

    /// Canvas width produces rows that are not 4-byte aligned
    #[error("Encoding precondition failed: width {width} gives {row_bytes} bytes per row, not a multiple of 4")]
    EncodingPrecondition { width: usize, row_bytes: usize },

    /// Canvas dimensions unusable for drawing or for the image header
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: usize, height: usize },

    /// Layout parameters out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed graph source text
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Output destination could not be opened or written
    #[error("Output sink failed: {0}")]
    SinkFailure(#[from] std::io::Error),
}
