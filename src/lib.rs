//! Blob detection for OCR box annotation.
//!
//! This crate finds the glyph-like ink marks on a binarized page so that each
//! can seed an editable training box. It works on decoded rasters only: pages
//! arrive as 8-bit indexed rows (or 1-bit rows unpacked on the way in) with a
//! 4-byte aligned stride.
//!
//! # Quick Start
//!
//! ```
//! use glyph_blobs::{BlobDetector, DetectorConfig, PixelBuffer};
//!
//! // A white page with one 3x6 ink mark
//! let mut page = PixelBuffer::filled(32, 32, 255);
//! for y in 4..10 {
//!     for x in 5..8 {
//!         page.set(x, y, 0);
//!     }
//! }
//!
//! let detector = BlobDetector::new(DetectorConfig::default())?;
//! let blobs = detector.detect_all(&page)?;
//! assert_eq!(blobs.len(), 1);
//! assert_eq!(blobs[0].mass, 18);
//! # Ok::<(), glyph_blobs::BlobError>(())
//! ```
//!
//! # Features
//!
//! - **Non-destructive**: detection runs on a private copy of the page
//! - **Reading order**: blobs come back top to bottom, then left to right
//! - **Configurable markers**: ink and "consumed" pixel values are settings
//! - **Optional parallelism**: enable `rayon` to detect pages in parallel

pub mod detect;
pub mod image;
pub mod utils;

pub use detect::{
    bounds_of_color, fill, Blob, BlobDetector, DetectorConfig, MassFilter, BLOB_MARGIN,
};
pub use image::{byte_count, stride, BitDepth, GrayPixel, PixelBuffer, Point, Rect};

// Error types
pub use utils::error::{BlobError, Result};
