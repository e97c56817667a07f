use glyph_blobs::{
    fill, stride, Blob, BlobDetector, DetectorConfig, GrayPixel, PixelBuffer, Point, Rect,
    BLOB_MARGIN,
};
use image::{GrayImage, Luma};
use tempfile::tempdir;

const INK: u8 = 0;
const PAPER: u8 = 255;

fn loose() -> DetectorConfig {
    DetectorConfig::default()
        .with_width_range(1, 10_000)
        .with_height_range(1, 10_000)
}

fn tight(blob: &Blob) -> Rect {
    blob.bounds.inflate(-BLOB_MARGIN, -BLOB_MARGIN)
}

fn draw_rect(img: &mut GrayImage, x: u32, y: u32, w: u32, h: u32) {
    for yy in y..y + h {
        for xx in x..x + w {
            img.put_pixel(xx, yy, Luma([0]));
        }
    }
}

/// Thresholds a decoded grayscale page into ink and paper.
fn to_buffer(img: &GrayImage) -> PixelBuffer {
    let pixels: Vec<GrayPixel> = img
        .pixels()
        .map(|p| GrayPixel::new(if p.0[0] < 128 { INK } else { PAPER }))
        .collect();
    PixelBuffer::from_gray_pixels(img.width() as usize, img.height() as usize, &pixels)
        .expect("page dimensions match pixel count")
}

/// Deterministic speckle page, roughly `percent`% ink.
fn speckle(width: usize, height: usize, percent: u64, seed: u64) -> PixelBuffer {
    let mut state = seed;
    let mut buf = PixelBuffer::filled(width, height, PAPER);
    for y in 0..height {
        for x in 0..width {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            if (state >> 33) % 100 < percent {
                buf.set(x, y, INK);
            }
        }
    }
    buf
}

#[test]
fn test_png_page_round_trip() {
    let mut img = GrayImage::from_pixel(200, 60, Luma([255]));
    // Solid bar
    draw_rect(&mut img, 10, 10, 6, 20);
    // "L"
    draw_rect(&mut img, 40, 10, 3, 20);
    draw_rect(&mut img, 43, 27, 12, 3);
    // Ring, two pixels thick
    draw_rect(&mut img, 70, 12, 12, 2);
    draw_rect(&mut img, 70, 22, 12, 2);
    draw_rect(&mut img, 70, 14, 2, 8);
    draw_rect(&mut img, 80, 14, 2, 8);
    // Speck, too small for the default filter
    draw_rect(&mut img, 100, 40, 1, 1);
    // Second line
    draw_rect(&mut img, 10, 40, 4, 10);

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("page.png");
    img.save(&path).expect("Failed to write page");
    let decoded = image::open(&path).expect("Failed to read page").into_luma8();

    let page = to_buffer(&decoded);
    let blobs = BlobDetector::default().detect_all(&page).unwrap();

    let found: Vec<(Rect, u64)> = blobs.iter().map(|b| (tight(b), b.mass)).collect();
    assert_eq!(
        found,
        vec![
            (Rect::new(10, 10, 6, 20), 120),
            (Rect::new(40, 10, 15, 20), 96),
            (Rect::new(70, 12, 12, 12), 80),
            (Rect::new(10, 40, 4, 10), 40),
        ]
    );
    // The ring's hole pulls its fullness well below a solid block's.
    assert!(blobs[2].fullness() < blobs[0].fullness());
}

#[test]
fn test_one_bit_page() {
    let art = [
        "................",
        ".##.....#.......",
        ".##.....#...###.",
        ".##.....#...#.#.",
        "........#...###.",
        "................",
        "..#######.......",
        "................",
    ];
    let width = 16;
    let row_stride = stride(1, width).unwrap();
    let mut packed = vec![0u8; row_stride * art.len()];
    for (y, line) in art.iter().enumerate() {
        for (x, c) in line.bytes().enumerate() {
            if c == b'#' {
                packed[y * row_stride + x / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    let page =
        PixelBuffer::from_packed_bits(width, art.len(), row_stride, &packed, INK, PAPER).unwrap();
    let blobs = BlobDetector::new(loose()).unwrap().detect_all(&page).unwrap();
    let found: Vec<(Rect, u64)> = blobs.iter().map(|b| (tight(b), b.mass)).collect();
    assert_eq!(
        found,
        vec![
            (Rect::new(1, 1, 2, 3), 6),
            (Rect::new(8, 1, 1, 4), 4),
            (Rect::new(12, 2, 3, 3), 8),
            (Rect::new(2, 6, 7, 1), 7),
        ]
    );
}

#[test]
fn test_fill_measurements_match_recount() {
    const DONE: u8 = 50;
    const SEEN: u8 = 100;

    let mut buf = speckle(64, 48, 45, 7);
    let total_ink = buf.count(INK) as u64;
    let mut consumed = 0u64;

    for y in 0..buf.height() {
        for x in 0..buf.width() {
            if buf.get(x, y) != INK {
                continue;
            }
            let blob = fill(&mut buf, Point::new(x, y), DONE).unwrap();

            let mut mass = 0u64;
            let mut bounds: Option<Rect> = None;
            for yy in 0..buf.height() {
                for xx in 0..buf.width() {
                    if buf.get(xx, yy) == DONE {
                        mass += 1;
                        match bounds.as_mut() {
                            Some(r) => r.grow_to(xx as i32, yy as i32),
                            None => bounds = Some(Rect::at(Point::new(xx, yy))),
                        }
                        buf.set(xx, yy, SEEN);
                    }
                }
            }
            assert_eq!(blob.mass, mass);
            assert_eq!(Some(blob.bounds), bounds);
            consumed += mass;
        }
    }
    assert_eq!(consumed, total_ink);
}

#[test]
fn test_detection_accounts_for_all_ink() {
    let page = speckle(80, 60, 40, 99);
    let blobs = BlobDetector::new(loose()).unwrap().detect_all(&page).unwrap();
    let total: u64 = blobs.iter().map(|b| b.mass).sum();
    assert_eq!(total, page.count(INK) as u64);

    // Reading order holds across the whole result.
    for pair in blobs.windows(2) {
        let (a, b) = (&pair[0].bounds, &pair[1].bounds);
        assert!((a.y, a.x) <= (b.y, b.x));
    }
}

#[test]
fn test_concurrent_detection_is_deterministic() {
    let page = speckle(120, 90, 35, 3);
    let detector = BlobDetector::new(loose()).unwrap();
    let expected = detector.detect_all(&page).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| detector.detect_all(&page).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_detect_pages_matches_single_page_calls() {
    let pages: Vec<PixelBuffer> = (0..6).map(|i| speckle(40, 30, 30, i)).collect();
    let detector = BlobDetector::new(loose()).unwrap();
    let batched = detector.detect_pages(&pages).unwrap();
    for (page, blobs) in pages.iter().zip(&batched) {
        assert_eq!(&detector.detect_all(page).unwrap(), blobs);
    }
}
