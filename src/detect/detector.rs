//! The detection loop.
//!
//! Detection works on a private copy of the page. Each pass asks the bounds
//! scanner for the rectangle still holding ink, floods every ink pixel found
//! on that rectangle's left column (repainting it with the `completed`
//! marker), and narrows the next search to the rectangle just found. Ink only
//! ever disappears, so the narrowed area always contains what is left.
//! Every pass consumes at least the component owning the leftmost remaining
//! ink pixel, which bounds the number of passes by the number of components.

use crate::detect::blob::Blob;
use crate::detect::bounds::scan;
use crate::detect::config::DetectorConfig;
use crate::detect::fill::fill_unchecked;
use crate::detect::BLOB_MARGIN;
use crate::image::geom::{Point, Rect};
use crate::image::pixel_buffer::PixelBuffer;
use crate::utils::error::{BlobError, Result};
use log::{debug, trace};
use std::sync::atomic::{AtomicBool, Ordering};

/// Finds glyph-like blobs on binarized pages.
///
/// The detector holds only its configuration, so one instance can serve any
/// number of threads.
#[derive(Debug, Clone)]
pub struct BlobDetector {
    config: DetectorConfig,
}

impl Default for BlobDetector {
    fn default() -> Self {
        BlobDetector {
            config: DetectorConfig::default(),
        }
    }
}

impl BlobDetector {
    /// Creates a detector, rejecting inconsistent configurations.
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(BlobDetector { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detects blobs inside `area` of `image` (`None` = whole image).
    ///
    /// Returned bounds are in page coordinates, inflated by [`BLOB_MARGIN`]
    /// on every side and sorted top to bottom, then left to right. Ink
    /// outside `area` is ignored and components crossing its edge are
    /// clipped to it. `image` is never modified.
    pub fn detect(&self, image: &PixelBuffer, area: Option<Rect>) -> Result<Vec<Blob>> {
        self.run(image, area, None)
    }

    /// Detects blobs over the whole image.
    pub fn detect_all(&self, image: &PixelBuffer) -> Result<Vec<Blob>> {
        self.run(image, None, None)
    }

    /// Like [`detect`](Self::detect), but gives up with
    /// [`BlobError::Cancelled`] once `cancel` is set. The flag is polled
    /// between passes.
    pub fn detect_cancellable(
        &self,
        image: &PixelBuffer,
        area: Option<Rect>,
        cancel: &AtomicBool,
    ) -> Result<Vec<Blob>> {
        self.run(image, area, Some(cancel))
    }

    /// Runs [`detect_all`](Self::detect_all) on every page. Results are in
    /// page order; the first failing page fails the whole call.
    pub fn detect_pages(&self, pages: &[PixelBuffer]) -> Result<Vec<Vec<Blob>>> {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            pages.par_iter().map(|page| self.detect_all(page)).collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            pages.iter().map(|page| self.detect_all(page)).collect()
        }
    }

    fn run(
        &self,
        image: &PixelBuffer,
        area: Option<Rect>,
        cancel: Option<&AtomicBool>,
    ) -> Result<Vec<Blob>> {
        let (mut working, origin) = match area {
            Some(area) => (image.crop(&area)?, (area.x, area.y)),
            None => (image.clone(), (0, 0)),
        };
        let symbol = self.config.symbol;
        let completed = self.config.completed;

        debug!(
            "Detecting blobs in {}x{} region at ({}, {})",
            working.width(),
            working.height(),
            origin.0,
            origin.1
        );

        let mut blobs = Vec::new();
        let mut filtered = 0usize;
        let mut last_area = working.bounds();

        loop {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                debug!("Blob detection cancelled after {} blobs", blobs.len());
                return Err(BlobError::Cancelled);
            }

            let Some(main) = scan(&working, &last_area, symbol) else {
                break;
            };
            last_area = main;

            let x = main.x as usize;
            for y in main.y as usize..main.y_max() as usize {
                if working.get(x, y) != symbol {
                    continue;
                }
                let blob = fill_unchecked(&mut working, Point::new(x, y), completed);
                if blob.is_degenerate() {
                    continue;
                }

                let keep = self
                    .config
                    .accepts(blob.bounds.width, blob.bounds.height, blob.mass);
                trace!(
                    "Blob at ({}, {}): bounds {:?}, mass {}, {}",
                    x,
                    y,
                    blob.bounds,
                    blob.mass,
                    if keep { "kept" } else { "filtered" }
                );
                if keep {
                    blobs.push(to_page(blob, origin));
                } else {
                    filtered += 1;
                }
            }
        }

        // Stable, so blobs sharing a corner keep discovery order.
        blobs.sort_by_key(|b| (b.bounds.y, b.bounds.x));

        debug!("Found {} blobs ({} filtered by size)", blobs.len(), filtered);
        Ok(blobs)
    }
}

/// Moves a blob from working-buffer to page coordinates and adds the margin.
fn to_page(blob: Blob, origin: (i32, i32)) -> Blob {
    let (ox, oy) = origin;
    Blob {
        bounds: blob
            .bounds
            .translate(ox, oy)
            .inflate(BLOB_MARGIN, BLOB_MARGIN),
        mass: blob.mass,
        center_of_mass: (
            blob.center_of_mass.0 + ox as f64,
            blob.center_of_mass.1 + oy as f64,
        ),
    }
}
