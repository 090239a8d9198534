//! The closed error-kind enumeration for the request pipeline.
//!
//! Every externally triggered failure is caught at the component boundary
//! that invoked the risky operation and mapped to exactly one user-visible
//! string via [`AssistantError::user_message`].

use thiserror::Error;

use hearth_directory::DirectoryError;
use hearth_inference::InferenceError;

/// Everything that can end a pipeline request without a reply.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The directory has no devices for the owner identifier.
    #[error("no devices registered for the requested owner")]
    EmptyDirectory,

    /// The inference backend call failed.
    #[error("inference backend call failed: {0}")]
    Inference(#[from] InferenceError),

    /// The model returned empty or whitespace-only text.
    #[error("model returned empty text")]
    EmptyCompletion,

    /// The model returned text that is not valid JSON where JSON was
    /// expected. The raw text is kept for the diagnostic aside.
    #[error("model output was not valid JSON")]
    MalformedOutput { raw: String },

    /// The directory lookup itself failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Persisting the routine artifact failed.
    #[error("failed to persist routine artifact: {0}")]
    Artifact(#[from] std::io::Error),
}

impl AssistantError {
    /// The display string shown to the user for this error kind.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyDirectory => "No devices found for the given Hashid.".into(),
            Self::Inference(_) => "No response from the model due to an error.".into(),
            Self::EmptyCompletion => "No response from the model.".into(),
            Self::MalformedOutput { .. } => "Unexpected response format from the model.".into(),
            Self::Directory(err) => format!("Unexpected error occurred: {err}"),
            Self::Artifact(err) => format!("Unexpected error occurred: {err}"),
        }
    }

    /// Raw model text associated with the failure, if any.
    pub fn raw_model_text(&self) -> Option<&str> {
        match self {
            Self::MalformedOutput { raw } => Some(raw),
            _ => None,
        }
    }
}

/// Convenience alias for pipeline results.
pub type AssistantResult<T> = Result<T, AssistantError>;
