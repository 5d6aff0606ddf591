use thiserror::Error;

/// Errors raised by user-facing session operations.
///
/// Every variant is recoverable: the operation that produced it has left the
/// session exactly as it was.
#[derive(Debug, Error)]
pub enum PaintError {
    /// The imported bytes are not a supported raster image
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// The export target does not name a supported format
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// A canvas size, brush radius or color was rejected
    #[error("Invalid value: {0}")]
    Validation(String),

    #[error("File access failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type for session operations
pub type PaintResult<T> = Result<T, PaintError>;
