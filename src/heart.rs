//! Shaded heart rendering: base fill plus translucent overlay layers.

use image::{imageops, Rgba, RgbaImage};

use crate::curve::{self, STEPS};
use crate::raster::{fill_circle, fill_polygon};

/// Solid pink base fill.
pub const BASE_FILL: Rgba<u8> = Rgba([236, 64, 122, 255]);

/// Translucent lighter pink, composited over the upper part of the heart.
pub const TOP_HIGHLIGHT: Rgba<u8> = Rgba([255, 120, 170, 80]);

/// Translucent dark red, composited over the lower part of the heart.
pub const BOTTOM_SHADOW: Rgba<u8> = Rgba([180, 20, 60, 60]);

/// Translucent white shine spot in the upper-left area.
pub const SHINE: Rgba<u8> = Rgba([255, 255, 255, 120]);

/// Render the shaded heart on a transparent square canvas.
///
/// The outline is sampled once, fitted to the canvas, and drawn four times:
/// the opaque base polygon, a shrunken highlight shifted up, a smaller shadow
/// shifted down, and a circular shine spot. Each translucent layer is filled
/// solid on its own buffer and alpha-composited onto the result, so the layer
/// colors blend with the base rather than overwriting it.
#[must_use]
pub fn render(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    let s = f64::from(size);

    let outline = curve::fit_to_canvas(&curve::heart_outline(STEPS), size);
    let center = curve::canvas_center(size);

    fill_polygon(&mut img, &outline, BASE_FILL);

    let highlight = curve::scale_about_center(&outline, center, 0.7, -s * 0.05);
    composite_polygon(&mut img, &highlight, TOP_HIGHLIGHT);

    let shadow = curve::scale_about_center(&outline, center, 0.5, s * 0.08);
    composite_polygon(&mut img, &shadow, BOTTOM_SHADOW);

    let mut shine = RgbaImage::new(size, size);
    let (cx, cy) = center;
    fill_circle(&mut shine, cx - s * 0.15, cy - s * 0.15, s * 0.08, SHINE);
    imageops::overlay(&mut img, &shine, 0, 0);

    img
}

/// Fill `outline` on a fresh transparent layer and alpha-blend it onto `img`.
fn composite_polygon(img: &mut RgbaImage, outline: &[(f64, f64)], color: Rgba<u8>) {
    let mut layer = RgbaImage::new(img.width(), img.height());
    fill_polygon(&mut layer, outline, color);
    imageops::overlay(img, &layer, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_is_square_with_alpha() {
        for size in [16, 32, 100, 512] {
            let img = render(size);
            assert_eq!(img.width(), size);
            assert_eq!(img.height(), size);
        }
    }

    #[test]
    fn corners_are_transparent() {
        let img = render(128);
        for (x, y) in [(0, 0), (127, 0), (0, 127), (127, 127)] {
            assert_eq!(img.get_pixel(x, y).0[3], 0, "corner ({x}, {y}) not transparent");
        }
    }

    #[test]
    fn interior_is_opaque() {
        let img = render(128);
        // Canvas center sits inside the heart body at every size.
        assert_eq!(img.get_pixel(64, 64).0[3], 255);
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render(48);
        let b = render(48);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn layer_colors_are_exact() {
        assert_eq!(BASE_FILL.0, [236, 64, 122, 255]);
        assert_eq!(TOP_HIGHLIGHT.0, [255, 120, 170, 80]);
        assert_eq!(BOTTOM_SHADOW.0, [180, 20, 60, 60]);
        assert_eq!(SHINE.0, [255, 255, 255, 120]);
    }

    #[test]
    fn overlays_tint_the_base_fill() {
        let img = render(256);
        // The canvas center is covered by both highlight and shadow layers,
        // so it must differ from the untinted base color.
        let center = *img.get_pixel(128, 140);
        assert_ne!(center.0[..3], BASE_FILL.0[..3]);
        assert_eq!(center.0[3], 255);
        // Near the bottom tip the heart is outside every overlay's reach
        // and keeps the exact base fill.
        assert_eq!(*img.get_pixel(128, 210), BASE_FILL);
    }
}
