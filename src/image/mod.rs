//! Raster primitives: geometry, row strides and the pixel buffer.

pub mod geom;
pub mod pixel_buffer;
pub mod stride;

pub use geom::{Point, Rect};
pub use pixel_buffer::{GrayPixel, PixelBuffer};
pub use stride::{byte_count, stride, BitDepth};
