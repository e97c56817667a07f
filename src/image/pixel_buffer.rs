// src/image/pixel_buffer.rs

//! A stride-aware, single-byte-per-pixel raster.
//!
//! Every other part of the crate reads and writes pixels through
//! [`PixelBuffer::get`] and [`PixelBuffer::set`], which address the backing
//! bytes as `data[y * stride + x]`. Padding bytes at the end of each row are
//! carried along but never interpreted.

use crate::image::geom::Rect;
use crate::image::stride::BitDepth;
use crate::utils::error::{BlobError, Result};
use bitvec::order::Msb0;
use bitvec::view::BitView;
use bytemuck::{Pod, Zeroable};

/// A single grayscale or palette-index pixel.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct GrayPixel {
    pub y: u8,
}

impl GrayPixel {
    pub fn new(y: u8) -> Self {
        GrayPixel { y }
    }

    pub fn black() -> Self {
        GrayPixel { y: 0 }
    }

    pub fn white() -> Self {
        GrayPixel { y: 255 }
    }
}

/// An 8-bit raster whose rows are `stride` bytes apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw 8-bit rows. Fails if `stride` cannot hold a row or if
    /// `data` is not exactly `stride * height` bytes long.
    pub fn new(width: usize, height: usize, stride: usize, data: Vec<u8>) -> Result<Self> {
        if stride < width {
            return Err(BlobError::InvalidStride { stride, min: width });
        }
        let expected = stride * height;
        if data.len() != expected {
            return Err(BlobError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(PixelBuffer {
            width,
            height,
            stride,
            data,
        })
    }

    /// Creates a buffer with 4-byte aligned rows, every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: u8) -> Self {
        let stride = BitDepth::Eight.stride(width);
        PixelBuffer {
            width,
            height,
            stride,
            data: vec![color; stride * height],
        }
    }

    /// Builds an aligned buffer from tightly packed, row-major pixels.
    pub fn from_gray_pixels(width: usize, height: usize, pixels: &[GrayPixel]) -> Result<Self> {
        if pixels.len() != width * height {
            return Err(BlobError::BufferSizeMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        let bytes: &[u8] = bytemuck::cast_slice(pixels);
        let mut buffer = PixelBuffer::filled(width, height, 0);
        if width > 0 {
            for (y, src) in bytes.chunks_exact(width).enumerate() {
                buffer.row_mut(y).copy_from_slice(src);
            }
        }
        Ok(buffer)
    }

    /// Unpacks a 1-bit-per-pixel raster (MSB first, rows `stride` bytes
    /// apart) into an 8-bit buffer, writing `set` for 1-bits and `clear`
    /// for 0-bits.
    pub fn from_packed_bits(
        width: usize,
        height: usize,
        stride: usize,
        bytes: &[u8],
        set: u8,
        clear: u8,
    ) -> Result<Self> {
        let min = BitDepth::One.row_bytes(width);
        if stride < min {
            return Err(BlobError::InvalidStride { stride, min });
        }
        let expected = stride * height;
        if bytes.len() != expected {
            return Err(BlobError::BufferSizeMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        let mut buffer = PixelBuffer::filled(width, height, clear);
        if stride == 0 {
            return Ok(buffer);
        }
        for (y, packed) in bytes.chunks_exact(stride).enumerate() {
            let bits = packed.view_bits::<Msb0>();
            for (dst, bit) in buffer.row_mut(y).iter_mut().zip(bits.iter()) {
                if *bit {
                    *dst = set;
                }
            }
        }
        Ok(buffer)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the dimensions as a tuple (width, height).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The rectangle covering the whole buffer.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as u32, self.height as u32)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height);
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: u8) {
        assert!(x < self.width && y < self.height);
        self.data[y * self.stride + x] = color;
    }

    /// The `width` meaningful bytes of row `y`, padding excluded.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }

    /// Returns raw row data, padding included.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Fails unless `area` lies completely inside the buffer.
    pub fn check_area(&self, area: &Rect) -> Result<()> {
        if self.bounds().contains_rect(area) {
            Ok(())
        } else {
            Err(BlobError::AreaOutOfBounds {
                area: *area,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Copies `area` into a new, independently owned buffer whose origin is
    /// the area's top-left corner.
    pub fn crop(&self, area: &Rect) -> Result<PixelBuffer> {
        self.check_area(area)?;
        let (x0, y0) = (area.x as usize, area.y as usize);
        let (w, h) = (area.width as usize, area.height as usize);

        let mut out = PixelBuffer::filled(w, h, 0);
        for y in 0..h {
            let src = &self.row(y0 + y)[x0..x0 + w];
            out.row_mut(y).copy_from_slice(src);
        }
        Ok(out)
    }

    /// Number of pixels equal to `color`.
    pub fn count(&self, color: u8) -> usize {
        (0..self.height)
            .map(|y| self.row(y).iter().filter(|&&p| p == color).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_layout() {
        assert!(PixelBuffer::new(3, 2, 4, vec![0; 8]).is_ok());
        assert_eq!(
            PixelBuffer::new(3, 2, 4, vec![0; 7]),
            Err(BlobError::BufferSizeMismatch {
                expected: 8,
                actual: 7
            })
        );
        assert_eq!(
            PixelBuffer::new(5, 2, 4, vec![0; 8]),
            Err(BlobError::InvalidStride { stride: 4, min: 5 })
        );
    }

    #[test]
    fn test_get_set_use_stride_addressing() {
        let mut buf = PixelBuffer::filled(5, 3, 255);
        assert_eq!(buf.stride(), 8);
        buf.set(4, 2, 0);
        assert_eq!(buf.get(4, 2), 0);
        assert_eq!(buf.as_raw()[2 * 8 + 4], 0);
        assert_eq!(buf.row(2), &[255, 255, 255, 255, 0]);
        assert_eq!(buf.count(0), 1);
    }

    #[test]
    #[should_panic]
    fn test_get_in_padding_panics() {
        let buf = PixelBuffer::filled(5, 3, 255);
        buf.get(5, 0);
    }

    #[test]
    fn test_from_gray_pixels_realigns_rows() {
        let pixels: Vec<GrayPixel> = (0..6).map(|v| GrayPixel::new(v as u8)).collect();
        let buf = PixelBuffer::from_gray_pixels(3, 2, &pixels).unwrap();
        assert_eq!(buf.stride(), 4);
        assert_eq!(buf.row(0), &[0, 1, 2]);
        assert_eq!(buf.row(1), &[3, 4, 5]);
        assert!(PixelBuffer::from_gray_pixels(3, 3, &pixels).is_err());
    }

    #[test]
    fn test_from_packed_bits_msb_first() {
        // 10 pixels wide: 2 data bytes, padded to a 4-byte stride.
        let bytes = [
            0b1000_0001, 0b1100_0000, 0xFF, 0xFF, // row 0
            0b0000_0000, 0b0100_0000, 0x00, 0x00, // row 1
        ];
        let buf = PixelBuffer::from_packed_bits(10, 2, 4, &bytes, 0, 255).unwrap();
        assert_eq!(buf.row(0), &[0, 255, 255, 255, 255, 255, 255, 0, 0, 0]);
        assert_eq!(buf.row(1), &[255, 255, 255, 255, 255, 255, 255, 255, 255, 0]);
    }

    #[test]
    fn test_from_packed_bits_rejects_short_stride() {
        let bytes = [0u8; 2];
        assert_eq!(
            PixelBuffer::from_packed_bits(9, 2, 1, &bytes, 0, 255),
            Err(BlobError::InvalidStride { stride: 1, min: 2 })
        );
    }

    #[test]
    fn test_crop_copies_sub_rectangle() {
        let mut buf = PixelBuffer::filled(6, 6, 9);
        buf.set(3, 4, 1);
        let cropped = buf.crop(&Rect::new(2, 3, 3, 2)).unwrap();
        assert_eq!(cropped.dimensions(), (3, 2));
        assert_eq!(cropped.get(1, 1), 1);
        assert_eq!(cropped.count(9), 5);
        assert!(buf.crop(&Rect::new(4, 4, 3, 1)).is_err());
        assert!(buf.crop(&Rect::new(-1, 0, 2, 2)).is_err());
    }
}
