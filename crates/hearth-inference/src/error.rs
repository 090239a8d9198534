//! Inference error types.

use thiserror::Error;

/// Errors raised by a generate call against the inference backend.
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("inference request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("inference backend returned status {status}")]
    Backend { status: reqwest::StatusCode },
}

/// Convenience alias for gateway results.
pub type InferenceResult<T> = Result<T, InferenceError>;
