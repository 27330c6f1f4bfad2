use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediasortError {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read modification time of {path}: {source}")]
    ModifiedTime {
        path: PathBuf,
        source: std::io::Error,
    },

    // Filesystem errors
    #[error("Directory walker error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Source directory not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Destination is a directory: {0}")]
    DestinationIsDirectory(PathBuf),

    #[error("No free file name left next to {0}")]
    NoFreeName(PathBuf),

    #[error("File has no name: {0}")]
    MissingFileName(PathBuf),

    // Metadata errors
    #[error("Date parsing error: {0}")]
    InvalidDateFormat(String),

    #[error("Failed to read metadata from {path}: {reason}")]
    MetadataExtraction { path: PathBuf, reason: String },
}

/// Result type for mediasort operations.
pub type Result<T> = std::result::Result<T, MediasortError>;
