//! Hearth assistant core — prompt construction, response interpretation,
//! and the sequential request pipeline.
//!
//! Two user-facing operations exist: routine generation (structured JSON
//! synthesized by the model, persisted as an artifact) and general query
//! answering (fixed keyword-to-action matching over the device list, with
//! the model text kept as a diagnostic aside). Every failure is converted
//! to a user-visible string at this boundary; nothing propagates to the
//! presentation shell as a fault.

pub mod actions;
pub mod artifact;
pub mod error;
pub mod pipeline;
pub mod prompt;

pub use artifact::RoutineArtifactStore;
pub use error::{AssistantError, AssistantResult};
pub use pipeline::{Assistant, PipelineReply};
