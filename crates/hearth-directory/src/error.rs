//! Directory error types.

use thiserror::Error;

/// Errors that can occur during a directory lookup.
///
/// "No matching devices" is not an error — a lookup for an unknown owner
/// returns an empty list.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("device directory query failed: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience alias for directory results.
pub type DirectoryResult<T> = Result<T, DirectoryError>;
