//! Locating the rectangle that still holds unprocessed ink.
//!
//! The scan works from the outside in: the first and last rows containing the
//! color fix `top` and `bottom`, and the leftmost hit seen in those two rows
//! (`left_max`) splits the column search in two. Columns left of `left_max`
//! are scanned rightwards and columns right of it leftwards, each only over
//! rows `top..=bottom`, so the interior of the area is rarely visited.

use crate::image::geom::Rect;
use crate::image::pixel_buffer::PixelBuffer;
use crate::utils::error::Result;

/// Returns the smallest rectangle holding every pixel of `color` inside
/// `area`, or `None` if there is none. `area == None` searches the whole
/// buffer; an area reaching outside the buffer is an error.
pub fn bounds_of_color(buffer: &PixelBuffer, area: Option<Rect>, color: u8) -> Result<Option<Rect>> {
    let area = match area {
        Some(area) => {
            buffer.check_area(&area)?;
            area
        }
        None => buffer.bounds(),
    };
    Ok(scan(buffer, &area, color))
}

/// `area` must already be validated against the buffer.
pub(crate) fn scan(buffer: &PixelBuffer, area: &Rect, color: u8) -> Option<Rect> {
    if area.is_empty() {
        return None;
    }
    let (x0, y0) = (area.x as usize, area.y as usize);
    let (x1, y1) = (area.x_max() as usize, area.y_max() as usize);

    let first_in_row = |y: usize| {
        buffer.row(y)[x0..x1]
            .iter()
            .position(|&p| p == color)
            .map(|i| x0 + i)
    };

    let (top, mut left_max) = (y0..y1).find_map(|y| first_in_row(y).map(|x| (y, x)))?;
    // `top` itself qualifies, so this always finds a row.
    let (bottom, x) = (top..y1)
        .rev()
        .find_map(|y| first_in_row(y).map(|x| (y, x)))?;
    left_max = left_max.min(x);

    let column_has = |x: usize| (top..=bottom).any(|y| buffer.get(x, y) == color);

    let left = (x0..=left_max).find(|&x| column_has(x))?;
    let right = (left_max..x1).rev().find(|&x| column_has(x))?;

    Some(Rect::new(
        left as i32,
        top as i32,
        (right - left + 1) as u32,
        (bottom - top + 1) as u32,
    ))
}
