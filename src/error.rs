//! Error types for scene loading, rendering and image output.

use thiserror::Error;

/// Errors that can occur outside the intersection core.
///
/// Misses, parallel rays and degenerate primitives are not errors; they show up as
/// an absent hit.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Reading or writing a file or stream failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Scene description could not be parsed.
    #[error("invalid scene file: {0}")]
    Json(#[from] serde_json::Error),

    /// PNG encoding failed.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// EXR encoding failed.
    #[error("exr encoding failed: {0}")]
    Exr(#[from] exr::error::Error),

    /// A primitive in the scene can never be hit.
    #[error("invalid primitive: {0}")]
    InvalidPrimitive(String),

    /// Output file extension is not one we can write.
    #[error("unsupported output format: {0:?}")]
    UnsupportedFormat(String),

    /// Image has no pixels along some axis.
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
