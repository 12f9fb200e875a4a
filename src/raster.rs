//! Solid-fill raster primitives on RGBA buffers.
//!
//! Polygon filling uses an even-odd scanline pass sampled at pixel centers,
//! which handles the non-convex heart outline (the cusp between the lobes)
//! without any winding bookkeeping. Translucency is not handled here; layers
//! are filled with solid colors and composited by the caller.

use image::{Rgba, RgbaImage};

/// Fill a closed polygon with a solid color.
///
/// The outline is implicitly closed (last point connects back to the first).
/// A pixel is filled when its center lies inside the polygon under the
/// even-odd rule. Outlines with fewer than three points are ignored.
pub fn fill_polygon(img: &mut RgbaImage, outline: &[(f64, f64)], color: Rgba<u8>) {
    if outline.len() < 3 {
        return;
    }

    let width = img.width();
    let height = img.height();
    let mut crossings: Vec<f64> = Vec::new();

    for row in 0..height {
        let sy = f64::from(row) + 0.5;
        crossings.clear();

        for i in 0..outline.len() {
            let (x0, y0) = outline[i];
            let (x1, y1) = outline[(i + 1) % outline.len()];
            // Half-open edge test avoids double-counting shared vertices.
            if (y0 <= sy) != (y1 <= sy) {
                crossings.push(x0 + (sy - y0) * (x1 - x0) / (y1 - y0));
            }
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        for pair in crossings.chunks_exact(2) {
            let (xa, xb) = (pair[0], pair[1]);
            if xb < 0.5 || xa > f64::from(width) - 0.5 {
                continue;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let start = (xa - 0.5).ceil().max(0.0) as u32;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let end = (xb - 0.5).floor().min(f64::from(width) - 1.0) as u32;
            for col in start..=end {
                img.put_pixel(col, row, color);
            }
        }
    }
}

/// Fill a circle of radius `r` centered at `(cx, cy)` with a solid color.
///
/// A pixel is filled when its center lies within the radius.
pub fn fill_circle(img: &mut RgbaImage, cx: f64, cy: f64, r: f64, color: Rgba<u8>) {
    if r <= 0.0 {
        return;
    }
    let r2 = r * r;
    for row in 0..img.height() {
        let dy = f64::from(row) + 0.5 - cy;
        for col in 0..img.width() {
            let dx = f64::from(col) + 0.5 - cx;
            if dx * dx + dy * dy <= r2 {
                img.put_pixel(col, row, color);
            }
        }
    }
}
