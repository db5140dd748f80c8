//! Error types for catalog collaborators.

use thiserror::Error;

/// Errors surfaced by an external catalog provider.
///
/// The recommendation pipeline treats a failed per-genre fetch as zero
/// results for that genre; these errors never propagate past the pipeline
/// boundary.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The store request for one genre failed (network error, upstream 5xx, ...)
    #[error("catalog fetch failed for genre {genre}: {reason}")]
    FetchFailed { genre: String, reason: String },

    /// The upstream response could not be interpreted
    #[error("malformed catalog payload: {0}")]
    MalformedPayload(String),

    /// I/O error from a file-backed provider
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for provider results
pub type Result<T> = std::result::Result<T, CatalogError>;
