// src/image/geom.rs

//! Geometric primitives: integer rectangles and pixel coordinates.
//!
//! "No rectangle" is spelled `Option<Rect>::None` throughout the crate, so a
//! positioned rectangle of zero size is never confused with "not found".

/// A 2D rectangle with integer coordinates.
///
/// The rectangle is defined by its top-left corner (`x`, `y`) and its `width` and `height`.
/// The origin may be negative: blob bounds inflated past the page edge are not clamped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// A 1x1 rectangle covering a single pixel.
    pub fn at(point: Point) -> Self {
        Rect::new(point.x as i32, point.y as i32, 1, 1)
    }

    /// Returns the x-coordinate of the right edge (`x + width`), exclusive,
    /// saturated to `i32::MAX`.
    pub fn x_max(&self) -> i32 {
        saturate(self.x_max_wide())
    }

    /// Returns the y-coordinate of the bottom edge (`y + height`), exclusive,
    /// saturated to `i32::MAX`.
    pub fn y_max(&self) -> i32 {
        saturate(self.y_max_wide())
    }

    fn x_max_wide(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    fn y_max_wide(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Checks if the rectangle has zero width or height.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Checks if a point is contained within the rectangle's bounds.
    /// The right and bottom edges are exclusive.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        !self.is_empty() && px >= self.x && px < self.x_max() && py >= self.y && py < self.y_max()
    }

    /// Whether `other` lies entirely inside `self`. An empty `other` is
    /// inside when its origin is.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x_max_wide() <= self.x_max_wide()
            && other.y_max_wide() <= self.y_max_wide()
    }

    /// Grows the rectangle just enough to cover pixel `(px, py)`.
    pub fn grow_to(&mut self, px: i32, py: i32) {
        if px < self.x {
            self.width += (self.x - px) as u32;
            self.x = px;
        }
        if py < self.y {
            self.height += (self.y - py) as u32;
            self.y = py;
        }
        if px >= self.x_max() {
            self.width = (px - self.x + 1) as u32;
        }
        if py >= self.y_max() {
            self.height = (py - self.y + 1) as u32;
        }
    }

    /// Returns a new rectangle translated by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Returns a new rectangle with size adjusted by `(dx, dy)` on each side.
    /// Negative amounts shrink it; a rectangle shrunk past zero collapses to
    /// an empty one at the adjusted origin.
    pub fn inflate(&self, dx: i32, dy: i32) -> Rect {
        let new_x = self.x.saturating_sub(dx);
        let new_y = self.y.saturating_sub(dy);
        let new_width = self.width as i64 + 2 * dx as i64;
        let new_height = self.height as i64 + 2 * dy as i64;

        Rect::new(
            new_x,
            new_y,
            new_width.clamp(0, u32::MAX as i64) as u32,
            new_height.clamp(0, u32::MAX as i64) as u32,
        )
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// A pixel coordinate inside a buffer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Point { x, y }
    }
}
