//! Error types for ninepatch-stretch

use thiserror::Error;

/// Errors that can occur while analysing or rendering a nine-patch
#[derive(Debug, Error)]
pub enum StretchError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ninepatch_core::Error),

    /// Image I/O error
    #[error("I/O error: {0}")]
    Io(#[from] ninepatch_io::IoError),

    /// Degenerate input: border strip too short, zero target size, etc.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The image cannot carry a one-pixel marker border
    #[error("image of {width}x{height} is too small to hold a nine-patch border")]
    NotBordered { width: u32, height: u32 },
}

/// Result type for nine-patch operations
pub type StretchResult<T> = Result<T, StretchError>;
