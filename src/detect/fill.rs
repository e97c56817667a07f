//! Column-scanline flood fill with an explicit seed stack.
//!
//! Each popped seed is walked up to the top of its vertical run, then the run
//! is repainted top to bottom. While walking down, the pixels immediately to
//! the left and right are watched: the first matching neighbor of every
//! contiguous side run is pushed as a new seed, and the watch re-arms as soon
//! as that side run ends. Every pixel is repainted exactly once, so the work
//! is proportional to the size of the region.

use crate::detect::blob::Blob;
use crate::image::geom::{Point, Rect};
use crate::image::pixel_buffer::PixelBuffer;
use crate::utils::error::{BlobError, Result};

struct Filler<'a> {
    buffer: &'a mut PixelBuffer,
    old_color: u8,
    new_color: u8,
    stack: Vec<Point>,
    bounds: Rect,
    mass: u64,
    sum_x: u64,
    sum_y: u64,
}

impl Filler<'_> {
    #[inline]
    fn matches(&self, x: usize, y: usize) -> bool {
        self.buffer.get(x, y) == self.old_color
    }

    fn repaint(&mut self, x: usize, y: usize) {
        self.buffer.set(x, y, self.new_color);
        self.sum_x += x as u64;
        self.sum_y += y as u64;
        self.bounds.grow_to(x as i32, y as i32);
        self.mass += 1;
    }

    /// Pushes a seed at the start of each matching side run.
    fn watch_side(&mut self, x: usize, y: usize, queued: &mut bool) {
        if self.matches(x, y) {
            if !*queued {
                self.stack.push(Point::new(x, y));
                *queued = true;
            }
        } else {
            *queued = false;
        }
    }

    fn fill_column(&mut self, seed: Point) {
        let x = seed.x;
        let width = self.buffer.width();
        let height = self.buffer.height();

        // One past the seed, so a seed that was repainted after being pushed
        // resumes directly below itself.
        let mut y = seed.y + 1;
        while y > 0 && self.matches(x, y - 1) {
            y -= 1;
        }

        let mut span_left = false;
        let mut span_right = false;
        while y < height && self.matches(x, y) {
            self.repaint(x, y);
            if x > 0 {
                self.watch_side(x - 1, y, &mut span_left);
            }
            if x + 1 < width {
                self.watch_side(x + 1, y, &mut span_right);
            }
            y += 1;
        }
    }

    fn run(mut self) -> Blob {
        while let Some(seed) = self.stack.pop() {
            self.fill_column(seed);
        }
        let mass = self.mass as f64;
        Blob {
            bounds: self.bounds,
            mass: self.mass,
            center_of_mass: (self.sum_x as f64 / mass, self.sum_y as f64 / mass),
        }
    }
}

/// Repaints the 4-connected region around `seed` with `new_color` and
/// measures it.
///
/// If the seed already has `new_color` nothing is painted and a zero-mass
/// blob comes back; check [`Blob::is_degenerate`] before using the result.
/// The returned bounds are tight, in buffer coordinates.
pub fn fill(buffer: &mut PixelBuffer, seed: Point, new_color: u8) -> Result<Blob> {
    if seed.x >= buffer.width() || seed.y >= buffer.height() {
        return Err(BlobError::PointOutOfBounds {
            x: seed.x,
            y: seed.y,
        });
    }
    Ok(fill_unchecked(buffer, seed, new_color))
}

/// `seed` must lie inside the buffer.
pub(crate) fn fill_unchecked(buffer: &mut PixelBuffer, seed: Point, new_color: u8) -> Blob {
    let old_color = buffer.get(seed.x, seed.y);
    if old_color == new_color {
        return Blob::degenerate();
    }

    let mut stack = Vec::with_capacity(32);
    stack.push(seed);
    Filler {
        buffer,
        old_color,
        new_color,
        stack,
        bounds: Rect::at(seed),
        mass: 0,
        sum_x: 0,
        sum_y: 0,
    }
    .run()
}
