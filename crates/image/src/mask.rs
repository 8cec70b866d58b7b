//! Brightness threshold masking.

use image::{Rgba, RgbaImage};
use std::fmt;

/// The pixel every masked pixel is replaced with.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Brightness cutoff below which a pixel counts as background.
///
/// Compared against the unrounded mean of the red, green and blue channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u8);

impl Threshold {
    /// Default cutoff for near-black backgrounds.
    pub const DEFAULT: Threshold = Threshold(30);

    /// Create a threshold.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw threshold value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Check whether the mean of `r`, `g` and `b` is strictly below this threshold.
    ///
    /// `(r + g + b) / 3 < t` over the reals is exactly `r + g + b < 3 * t`.
    #[inline]
    pub fn is_darker(self, r: u8, g: u8, b: u8) -> bool {
        let sum = r as u16 + g as u16 + b as u16;
        sum < 3 * self.0 as u16
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Options for background masking.
#[derive(Debug, Clone, Default)]
pub struct MaskOptions {
    /// Pixels darker than this become transparent
    pub threshold: Threshold,
}

impl MaskOptions {
    /// Options with a custom threshold.
    pub fn with_threshold(threshold: Threshold) -> Self {
        Self { threshold }
    }
}

/// Check if a single pixel is dark enough to be treated as background.
///
/// Alpha is ignored: only the color channels decide.
pub fn is_background(pixel: &Rgba<u8>, threshold: Threshold) -> bool {
    let Rgba([r, g, b, _]) = *pixel;
    threshold.is_darker(r, g, b)
}

/// Replace every background pixel with [`TRANSPARENT`], in place.
///
/// All other pixels are left untouched, alpha included.
/// Returns the number of pixels that were masked.
pub fn mask_dark_pixels(img: &mut RgbaImage, options: &MaskOptions) -> usize {
    let threshold = options.threshold;
    let mut masked = 0;

    for px in img.chunks_exact_mut(4) {
        if threshold.is_darker(px[0], px[1], px[2]) {
            px.copy_from_slice(&TRANSPARENT.0);
            masked += 1;
        }
    }

    tracing::debug!(%threshold, masked, "masked dark pixels");
    masked
}
