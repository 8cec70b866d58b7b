//! Alpha channel normalisation.

use image::{DynamicImage, RgbaImage};

/// Check if an image has an alpha channel
pub fn has_alpha_channel(img: &DynamicImage) -> bool {
    matches!(
        img,
        DynamicImage::ImageRgba8(_)
            | DynamicImage::ImageRgba16(_)
            | DynamicImage::ImageRgba32F(_)
            | DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLumaA16(_)
    )
}

/// Convert any decoded image into an 8-bit RGBA buffer.
///
/// RGBA8 input is returned without copying. Everything else is converted,
/// keeping its color channels; sources without alpha come out fully opaque.
pub fn ensure_alpha(img: DynamicImage) -> RgbaImage {
    match img {
        DynamicImage::ImageRgba8(buffer) => buffer,
        other => {
            tracing::debug!(color = ?other.color(), "converting to rgba8");
            other.into_rgba8()
        }
    }
}
