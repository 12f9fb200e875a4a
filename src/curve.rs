//! Parametric heart outline sampling and canvas fitting.

use std::f64::consts::PI;

/// Number of samples taken along the parametric curve.
pub const STEPS: usize = 500;

/// Fraction of the canvas left empty on each side.
pub const MARGIN_FRACTION: f64 = 0.1;

/// Sample the parametric heart curve.
///
/// For `t` sweeping `[0, 2π)` in `steps` increments:
/// `x = 16·sin³t`, `y = −(13·cos t − 5·cos 2t − 2·cos 3t − cos 4t)`.
/// The y axis is flipped so the curve is lobes-up in image coordinates.
#[must_use]
pub fn heart_outline(steps: usize) -> Vec<(f64, f64)> {
    let mut points = Vec::with_capacity(steps);
    for i in 0..steps {
        #[allow(clippy::cast_precision_loss)]
        let t = 2.0 * PI * (i as f64) / (steps as f64);
        let x = 16.0 * t.sin().powi(3);
        let y = -(13.0 * t.cos()
            - 5.0 * (2.0 * t).cos()
            - 2.0 * (3.0 * t).cos()
            - (4.0 * t).cos());
        points.push((x, y));
    }
    points
}

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    /// Minimum x coordinate.
    pub min_x: f64,
    /// Maximum x coordinate.
    pub max_x: f64,
    /// Minimum y coordinate.
    pub min_y: f64,
    /// Maximum y coordinate.
    pub max_y: f64,
}

impl Bounds {
    /// Compute the bounding box of `points`. Empty input yields a zero box.
    #[must_use]
    pub fn of(points: &[(f64, f64)]) -> Self {
        let mut b =
            Self { min_x: f64::MAX, max_x: f64::MIN, min_y: f64::MAX, max_y: f64::MIN };
        for &(x, y) in points {
            b.min_x = b.min_x.min(x);
            b.max_x = b.max_x.max(x);
            b.min_y = b.min_y.min(y);
            b.max_y = b.max_y.max(y);
        }
        if points.is_empty() {
            return Self { min_x: 0.0, max_x: 0.0, min_y: 0.0, max_y: 0.0 };
        }
        b
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Center of the drawable area for a square canvas of `size` pixels.
///
/// Horizontally centered; pushed down by 30% of the margin so the heart
/// sits slightly low in the frame.
#[must_use]
pub fn canvas_center(size: u32) -> (f64, f64) {
    let s = f64::from(size);
    let margin = s * MARGIN_FRACTION;
    (s / 2.0, s / 2.0 + margin * 0.3)
}

/// Map raw curve samples into pixel coordinates on a square canvas.
///
/// The outline is scaled uniformly so it fills the canvas minus the margin
/// (80% of the side length) and centered on [`canvas_center`].
#[must_use]
pub fn fit_to_canvas(points: &[(f64, f64)], size: u32) -> Vec<(f64, f64)> {
    let s = f64::from(size);
    let margin = s * MARGIN_FRACTION;
    let span = s - 2.0 * margin;

    let bounds = Bounds::of(points);
    let scale = (span / bounds.width()).min(span / bounds.height());
    let mid_x = (bounds.min_x + bounds.max_x) / 2.0;
    let mid_y = (bounds.min_y + bounds.max_y) / 2.0;
    let (cx, cy) = canvas_center(size);

    points.iter().map(|&(x, y)| (cx + (x - mid_x) * scale, cy + (y - mid_y) * scale)).collect()
}

/// Scale a point set toward the canvas center and shift it vertically.
///
/// Used for the overlay layers: a factor below 1.0 shrinks the outline
/// around `(cx, cy)`, and `dy` moves it up (negative) or down (positive).
#[must_use]
pub fn scale_about_center(
    points: &[(f64, f64)],
    center: (f64, f64),
    factor: f64,
    dy: f64,
) -> Vec<(f64, f64)> {
    let (cx, cy) = center;
    points.iter().map(|&(x, y)| (cx + (x - cx) * factor, cy + (y - cy) * factor + dy)).collect()
}
