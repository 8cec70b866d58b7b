//! Dark background removal for raster images.
//!
//! This crate provides:
//! - Alpha channel normalisation to 8-bit RGBA
//! - Brightness threshold masking
//! - A file pipeline that writes the masked image as PNG, atomically

#![warn(missing_docs)]

mod alpha;
mod error;
mod mask;
mod process;

pub use alpha::{ensure_alpha, has_alpha_channel};
pub use error::{ImageError, Result};
pub use mask::{is_background, mask_dark_pixels, MaskOptions, Threshold, TRANSPARENT};
pub use process::{
    encode_png, open_image, process_image_file, remove_background, write_atomically,
    ProcessReport,
};
