//! Error types for the qrlens scanner

use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while decoding or parsing payloads
#[derive(Error, Debug)]
pub enum ScanError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The image could not be opened or decoded
    #[error("Failed to read image: {0}")]
    Image(#[from] image::ImageError),

    /// The pixel buffer does not match the stated dimensions
    #[error("Invalid image buffer: expected {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// A Wi-Fi payload could not be parsed
    #[error("Invalid Wi-Fi payload: {0}")]
    InvalidWifi(String),

    /// A vCard payload could not be parsed
    #[error("Invalid contact card: {0}")]
    InvalidContact(String),
}
