//! Alpha-thresholded average colour of a texture.
//!
//! Pixels with alpha below the threshold are ignored entirely; the rest are
//! averaged per channel with floor division.

use std::path::Path;

use image::{ImageReader, RgbaImage};

use crate::error::{MaterialsError, Result};
use crate::types::Colour;

/// Default minimum alpha for a pixel to contribute to the average.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 128;

/// Decode an image file and average its sufficiently opaque pixels.
///
/// Any pixel format is converted to RGBA first; formats without alpha are
/// treated as fully opaque. Fails with [`MaterialsError::ImageDecode`] when
/// the file cannot be read or decoded, and with
/// [`MaterialsError::NoOpaquePixels`] when no pixel reaches the threshold.
pub fn average_colour(path: &Path, threshold: u8) -> Result<Colour> {
    let image = load_rgba(path)?;

    average_pixels(&image, threshold).ok_or_else(|| MaterialsError::NoOpaquePixels {
        path: path.to_path_buf(),
        threshold,
    })
}

/// Decode an image file into RGBA8.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let decode_error = |message: String| MaterialsError::ImageDecode {
        path: path.to_path_buf(),
        message,
    };

    let image = ImageReader::open(path)
        .map_err(|e| decode_error(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))?;

    Ok(image.to_rgba8())
}

/// Average the pixels whose alpha is at least `threshold`.
///
/// Returns `None` when no pixel qualifies.
pub fn average_pixels(image: &RgbaImage, threshold: u8) -> Option<Colour> {
    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    let mut count = 0u64;

    for pixel in image.pixels() {
        let [pr, pg, pb, pa] = pixel.0;
        if pa < threshold {
            continue;
        }
        r += u64::from(pr);
        g += u64::from(pg);
        b += u64::from(pb);
        count += 1;
    }

    if count == 0 {
        return None;
    }

    // Each quotient is a mean of u8 values, so it fits in u8.
    Some(Colour::rgb(
        (r / count) as u8,
        (g / count) as u8,
        (b / count) as u8,
    ))
}
