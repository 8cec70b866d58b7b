//! File-level background removal pipeline.

use crate::alpha::{ensure_alpha, has_alpha_channel};
use crate::error::{ImageError, Result};
use crate::mask::{mask_dark_pixels, MaskOptions, Threshold};
use image::codecs::png::PngEncoder;
use image::io::Reader;
use image::{ColorType, DynamicImage, GenericImageView, ImageEncoder, RgbaImage};
use serde::{Deserialize, Serialize};
use std::fs::{self, Permissions};
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Pixels replaced with full transparency
    pub masked_pixels: usize,
    /// Whether the decoded input already had an alpha channel
    pub had_alpha: bool,
}

impl ProcessReport {
    /// Total number of pixels in the image.
    pub fn total_pixels(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Remove a dark background from the image at `input_path` and save the
/// result as a PNG at `output_path`.
///
/// Pixels whose red/green/blue mean is below `threshold` become
/// `(0, 0, 0, 0)`; every other pixel is written back unchanged. The output
/// is always PNG, whatever its extension, and replaces any existing file only
/// once it has been written completely.
pub fn remove_background(
    input_path: &Path,
    output_path: &Path,
    threshold: Threshold,
) -> Result<ProcessReport> {
    let options = MaskOptions::with_threshold(threshold);
    process_image_file(input_path, output_path, &options)
}

/// Same as [`remove_background`], driven by [`MaskOptions`].
pub fn process_image_file(
    input_path: &Path,
    output_path: &Path,
    options: &MaskOptions,
) -> Result<ProcessReport> {
    if !input_path.exists() {
        return Err(ImageError::NotFound(input_path.to_path_buf()));
    }

    let img = open_image(input_path)?;
    let (width, height) = img.dimensions();
    tracing::debug!(
        path = %input_path.display(),
        width,
        height,
        color = ?img.color(),
        "decoded input"
    );

    let had_alpha = has_alpha_channel(&img);
    let mut rgba = ensure_alpha(img);
    let masked_pixels = mask_dark_pixels(&mut rgba, options);

    let png = encode_png(&rgba)?;
    write_atomically(output_path, &png)?;
    tracing::debug!(path = %output_path.display(), bytes = png.len(), "wrote output");

    Ok(ProcessReport {
        width: rgba.width(),
        height: rgba.height(),
        masked_pixels,
        had_alpha,
    })
}

/// Decode an image, picking the decoder from the file contents.
///
/// The extension is only a fallback when the contents match no known format.
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    let read_failed = |e: io::Error| ImageError::Decode(image::ImageError::IoError(e));

    Reader::open(path)
        .map_err(read_failed)?
        .with_guessed_format()
        .map_err(read_failed)?
        .decode()
        .map_err(ImageError::Decode)
}

/// Encode an RGBA buffer as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .map_err(ImageError::Encode)?;
    Ok(buffer)
}

/// Write `bytes` to `path` through a temporary file in the same directory.
///
/// `path` either keeps its previous contents or holds all of `bytes`.
/// An existing file keeps its permissions; a new one is created `0644` on Unix.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = target_permissions(path)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions)?;
    }
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Permissions the written file should end up with.
fn target_permissions(path: &Path) -> Result<Option<Permissions>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.permissions())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(fresh_permissions()),
        Err(e) => Err(e.into()),
    }
}

// Temp files are created 0600.
#[cfg(unix)]
fn fresh_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn fresh_permissions() -> Option<Permissions> {
    None
}
