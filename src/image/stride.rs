//! Row pitch arithmetic for byte-aligned rasters.
//!
//! Decoded page rasters pad every row to a 4-byte boundary, so the distance
//! between two rows (the *stride*) is usually larger than the bytes the
//! pixels actually need.

use crate::utils::error::{BlobError, Result};

/// The pixel depths a raster row can be laid out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    /// 1 bit per pixel, MSB first (bilevel pages).
    One,
    /// 1 byte per pixel (indexed or grayscale).
    Eight,
    /// 4 bytes per pixel (BGRA).
    ThirtyTwo,
}

impl BitDepth {
    pub fn from_bits(bits_per_pixel: u32) -> Result<Self> {
        match bits_per_pixel {
            1 => Ok(BitDepth::One),
            8 => Ok(BitDepth::Eight),
            32 => Ok(BitDepth::ThirtyTwo),
            other => Err(BlobError::UnsupportedBitDepth(other)),
        }
    }

    /// Bytes needed by `pixel_width` pixels, without padding.
    pub fn row_bytes(self, pixel_width: usize) -> usize {
        match self {
            BitDepth::One => pixel_width.div_ceil(8),
            BitDepth::Eight => pixel_width,
            BitDepth::ThirtyTwo => pixel_width * 4,
        }
    }

    /// Row size rounded up to the next multiple of 4 bytes.
    pub fn stride(self, pixel_width: usize) -> usize {
        (self.row_bytes(pixel_width) + 3) & !3
    }
}

/// Byte-aligned row pitch for `pixel_width` pixels of `bits_per_pixel` each.
pub fn stride(bits_per_pixel: u32, pixel_width: usize) -> Result<usize> {
    Ok(BitDepth::from_bits(bits_per_pixel)?.stride(pixel_width))
}

/// Total bytes of a `pixel_width` x `pixel_height` raster, padding included.
pub fn byte_count(bits_per_pixel: u32, pixel_width: usize, pixel_height: usize) -> Result<usize> {
    Ok(pixel_height * stride(bits_per_pixel, pixel_width)?)
}
