//! Error types for kindling operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when persisting a note or loading settings.
///
/// Extraction itself never produces errors; see [`crate::extract`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured destination folder does not exist.
    #[error("destination folder does not exist: {0}")]
    DestinationMissing(PathBuf),

    /// A file already exists at the computed note path.
    #[error("a note already exists at {0}")]
    DestinationConflict(PathBuf),

    #[cfg(feature = "cli")]
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
