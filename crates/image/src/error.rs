//! Error types for the image crate.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;

/// Errors that can occur while removing a background.
#[derive(Debug, Error)]
pub enum ImageError {
    /// Input file does not exist
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input could not be opened or decoded
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// PNG encoding failed
    #[error("Failed to encode PNG: {0}")]
    Encode(#[source] image::ImageError),

    /// IO error while writing the output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
