//! Error types for PowerPoint package assembly.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or archiving a presentation package.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A slide was constructed without one of its required fields.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// A field was present but could not be used.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A directory the operation depends on does not exist.
    #[error("No such directory - {}", .0.display())]
    NotFound(PathBuf),

    /// The output path is already taken.
    #[error("{} already exists!", .0.display())]
    AlreadyExists(PathBuf),

    /// ZIP archive error (missing, corrupt, or unwritable container).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// Failed to render a package part from its view.
    #[error("Render error: {0}")]
    RenderError(String),
}
