//! Error types for i18n-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in i18n-core
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("file '{path}' not found")]
    FileNotFound { path: PathBuf },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON
    #[error("invalid JSON in '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON that is not shaped like a document
    #[error("invalid document '{path}': {message}")]
    InvalidDocument { path: PathBuf, message: String },

    /// Failed to write the output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
