use crate::image::geom::Rect;

/// One connected region of foreground pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    /// Bounding box of the region. Boxes returned by the detector are
    /// offset to page coordinates and inflated by [`BLOB_MARGIN`](super::BLOB_MARGIN).
    pub bounds: Rect,
    /// Pixel count.
    pub mass: u64,
    /// Mean x and mean y of the region's pixels. Meaningless when `mass == 0`.
    /// For detector results it is in page coordinates, offset by the search
    /// area's origin like `bounds` (but without the margin).
    pub center_of_mass: (f64, f64),
}

impl Blob {
    /// The result of filling a seed that already had the target color.
    pub(crate) fn degenerate() -> Self {
        Blob {
            bounds: Rect::default(),
            mass: 0,
            center_of_mass: (0.0, 0.0),
        }
    }

    /// True for the zero-mass result of a no-op fill.
    pub fn is_degenerate(&self) -> bool {
        self.mass == 0
    }

    /// Mass divided by the area of `bounds`.
    pub fn fullness(&self) -> f64 {
        let area = self.bounds.area();
        if area == 0 {
            return 0.0;
        }
        self.mass as f64 / area as f64
    }

    /// Geometric midpoint of `bounds`, rounded towards the top-left.
    pub fn center(&self) -> (i32, i32) {
        (
            self.bounds.x + (self.bounds.width / 2) as i32,
            self.bounds.y + (self.bounds.height / 2) as i32,
        )
    }
}
