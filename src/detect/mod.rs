//! Blob detection on binarized pages.
//!
//! ## Pipeline
//!
//! 1. **Bounds scan** (`bounds`) - find the rectangle still holding ink
//! 2. **Flood fill** (`fill`) - consume and measure one connected component
//! 3. **Detection loop** (`detector`) - repeat until no ink remains, filter by
//!    size, sort into reading order
//!
//! ## Module Map
//!
//! - `blob` - `Blob` and its derived measures
//! - `bounds` - `bounds_of_color`
//! - `config` - `DetectorConfig`, `MassFilter`
//! - `detector` - `BlobDetector`
//! - `fill` - scanline flood fill

pub mod blob;
pub mod bounds;
pub mod config;
pub mod detector;
pub mod fill;

pub use blob::Blob;
pub use bounds::bounds_of_color;
pub use config::{DetectorConfig, MassFilter};
pub use detector::BlobDetector;
pub use fill::fill;

/// Pixels added on every side of a detected blob's bounding box.
pub const BLOB_MARGIN: i32 = 2;
