//! Error types for layout-outline library.

use std::io;
use thiserror::Error;

/// Result type alias for layout-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, rendering or writing outlines.
///
/// Outline inference itself never fails; these errors come from the
/// I/O boundary around it.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Layout data could not be decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Layout data decoded but violates the span contract.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// No fragment source handles this input.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Error during rendering.
    #[error("Rendering error: {0}")]
    Render(String),
}
