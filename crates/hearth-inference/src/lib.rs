//! Inference gateway for the Hearth assistant.
//!
//! Calls the Ollama HTTP API (`/api/generate`) with a prompt string and
//! returns the raw textual completion. Two fixed model roles exist — the
//! structured generator (routine synthesis) and the conversational
//! responder (free-form answering) — each bound to exactly one model name
//! for the lifetime of the gateway. No retries, no health checks, and no
//! request timeout: a generate call blocks until the backend answers or
//! fails.

pub mod error;
mod gateway;

pub use error::{InferenceError, InferenceResult};
pub use gateway::{InferenceConfig, InferenceGateway, ModelRole};
