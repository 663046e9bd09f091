//! Error types for the vectorizer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for user supplied paths.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// File exists but is not an image we accept
    #[error("Unsupported image file: {0}")]
    UnsupportedImage(PathBuf),
}

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// File does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a file
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
}

/// Main error type for the application.
///
/// Every error is converted to this type before being returned to the
/// frontend, which is why it derives `Serialize`.
#[derive(Error, Debug, Serialize)]
pub enum VectorizerError {
    /// Input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reading the source image failed
    #[error("IO error: {0}")]
    Io(String),

    /// The raster bytes could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// The tracing library rejected the image or parameters
    #[error("Tracing error: {0}")]
    Tracing(String),

    /// Convert was requested before an image was loaded
    #[error("No image loaded")]
    NoImage,

    /// A conversion is already in flight
    #[error("A conversion is already running (task {0})")]
    Busy(u64),

    /// The worker produced no terminal event in time
    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),

    /// The worker exited without reporting a result
    #[error("worker exited unexpectedly")]
    WorkerLost,

    /// Writing the SVG to disk failed
    #[error("Failed to save file: {0}")]
    Save(String),

    /// Shared state lock was poisoned
    #[error("State error: {0}")]
    State(String),
}

/// Convenience result type for vectorizer operations.
pub type VectorizerResult<T> = Result<T, VectorizerError>;

// Helper methods for error creation
impl VectorizerError {
    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::Io(msg.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn tracing<T: Into<String>>(msg: T) -> Self {
        Self::Tracing(msg.into())
    }

    pub fn save<T: Into<String>>(msg: T) -> Self {
        Self::Save(msg.into())
    }

    /// Message shown to the user when a conversion fails.
    pub fn conversion_message(&self) -> String {
        format!("Conversion error: {self}")
    }
}

// Helper methods for validation error creation
impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn unsupported_image(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedImage(path.into())
    }
}

// Convert std::io::Error to VectorizerError
impl From<io::Error> for VectorizerError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<image::ImageError> for VectorizerError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for VectorizerError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::State("application state is corrupted".to_string())
    }
}

// Convert PathError to VectorizerError
impl From<PathError> for VectorizerError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}
