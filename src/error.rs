//! Error types for html-grader.
//!
//! This module defines the error types returned by loading and checking
//! operations. Library functions never terminate the process; the CLI maps
//! these errors to exit codes and messages.

use std::path::PathBuf;

/// Error type for loading and checking operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input path does not exist on disk.
    #[error("{} does not exist", .0.display())]
    NotFound(PathBuf),

    /// Reading a local file failed after the existence check.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The checks file is not a JSON array of selector strings.
    #[error("invalid checks file: {0}")]
    ChecksParse(#[from] serde_json::Error),

    /// The document URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Fetching the document over the network failed.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
}

/// Result type alias for loading and checking operations.
pub type Result<T> = std::result::Result<T, Error>;
