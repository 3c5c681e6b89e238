use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong during a single extraction call. Input
/// errors and service errors are kept distinct so callers can tell a bad
/// path from a failing collaborator; an empty recognition result is not an
/// error and never shows up here.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("image file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read image file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load credentials from {path}: {reason}")]
    Credential { path: PathBuf, reason: String },

    #[error("recognition request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("recognition service error: {message}")]
    RecognitionService { message: String },

    #[error("malformed recognition response: {reason}")]
    MalformedResponse { reason: String },
}
