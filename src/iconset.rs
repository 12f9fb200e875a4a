//! Staging of the macOS iconset: one PNG per resolution variant.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IconError;
use crate::heart;

/// Target icon sizes in pixels.
pub const SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Largest size saved as a standard-resolution variant.
const MAX_1X: u32 = 512;

/// Smallest size that gets a Retina (`@2x`) label.
const MIN_2X: u32 = 32;

/// Render every size in [`SIZES`] and write the iconset PNGs into `dir`.
///
/// Each size `s` is rendered once and saved as `icon_{s}x{s}.png` when
/// `s <= 512`. Sizes from 32 up are additionally saved at full resolution
/// under the half-size Retina name `icon_{s/2}x{s/2}@2x.png`, which is the
/// naming `iconutil` expects. The directory is created if it does not exist.
/// Returns the paths written, in generation order.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a PNG fails to
/// encode or write.
pub fn stage_iconset(dir: &Path) -> Result<Vec<PathBuf>, IconError> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    for size in SIZES {
        let img = heart::render(size);

        if size <= MAX_1X {
            let path = dir.join(format!("icon_{size}x{size}.png"));
            img.save(&path)?;
            written.push(path);
        }

        if size >= MIN_2X {
            let half = size / 2;
            let path = dir.join(format!("icon_{half}x{half}@2x.png"));
            img.save(&path)?;
            written.push(path);
        }
    }

    Ok(written)
}
