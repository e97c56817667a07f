// src/utils/error.rs

use crate::image::geom::Rect;
use thiserror::Error;

/// The error type for every fallible operation in the crate.
///
/// All variants except `Cancelled` are precondition violations: they are
/// reported before any pixel is touched, and no partial result accompanies them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlobError {
    #[error("Unsupported bit depth: {0} (expected 1, 8 or 32)")]
    UnsupportedBitDepth(u32),

    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Stride {stride} is smaller than the minimum row size {min}")]
    InvalidStride { stride: usize, min: usize },

    #[error("Area {area:?} lies outside the {width}x{height} buffer")]
    AreaOutOfBounds {
        area: Rect,
        width: usize,
        height: usize,
    },

    #[error("Point ({x}, {y}) lies outside the buffer")]
    PointOutOfBounds { x: usize, y: usize },

    #[error("Invalid detector configuration: {0}")]
    InvalidConfig(String),

    #[error("Detection was cancelled")]
    Cancelled,
}

/// A specialized `Result` type for blob detection.
pub type Result<T> = std::result::Result<T, BlobError>;
