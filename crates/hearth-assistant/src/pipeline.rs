//! The sequential request pipeline: directory lookup → prompt → generate →
//! interpret. One request at a time; each call blocks until the backend
//! answers or fails.

use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use hearth_directory::devices_for_owner;
use hearth_inference::{InferenceGateway, ModelRole};
use hearth_protocol::DeviceRecord;

use crate::actions::identify_actions;
use crate::artifact::RoutineArtifactStore;
use crate::error::{AssistantError, AssistantResult};
use crate::prompt;

/// Fallback reply when no keyword rule fires for a general query.
const NO_ACTIONS_MESSAGE: &str =
    "No relevant actions identified based on the available devices.";

/// What a completed pipeline request hands back to the shell.
#[derive(Debug, Clone)]
pub struct PipelineReply {
    /// The display string (pretty-printed JSON or a fixed message).
    pub reply: String,
    /// Raw model completion, surfaced as a diagnostic aside.
    pub raw_model_text: Option<String>,
}

/// The assistant pipeline. Holds the directory path, the process-scoped
/// inference gateway, and the routine artifact store.
pub struct Assistant {
    db_path: PathBuf,
    gateway: Arc<InferenceGateway>,
    artifacts: RoutineArtifactStore,
}

impl Assistant {
    pub fn new(
        db_path: impl Into<PathBuf>,
        gateway: Arc<InferenceGateway>,
        artifacts: RoutineArtifactStore,
    ) -> Self {
        Self {
            db_path: db_path.into(),
            gateway,
            artifacts,
        }
    }

    /// Generate a routine of the given type for an owner and persist it.
    pub async fn create_routine(
        &self,
        hashid: &str,
        routine_type: &str,
    ) -> AssistantResult<PipelineReply> {
        let devices = self.lookup(hashid).await?;

        let prompt = prompt::routine_prompt(routine_type, hashid, &devices);
        let raw = self
            .gateway
            .generate(ModelRole::StructuredGenerator, &prompt)
            .await?;

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AssistantError::EmptyCompletion);
        }

        // Strict decode of the full completion. Any valid JSON shape is
        // accepted and persisted as-is; a decode failure leaves any prior
        // artifact untouched.
        let parsed: Value = serde_json::from_str(trimmed)
            .map_err(|_| AssistantError::MalformedOutput { raw: raw.clone() })?;

        self.artifacts.save(routine_type, &parsed)?;

        let pretty = serde_json::to_string_pretty(&parsed).map_err(std::io::Error::from)?;
        tracing::info!(hashid = %hashid, routine_type = %routine_type, "routine generated");
        Ok(PipelineReply {
            reply: pretty,
            raw_model_text: Some(raw),
        })
    }

    /// Answer a free-form query about the home.
    ///
    /// The model reply is surfaced only as a diagnostic; the actionable
    /// part of the answer comes from keyword matching over the query and
    /// the device list.
    pub async fn answer_query(&self, hashid: &str, query: &str) -> AssistantResult<PipelineReply> {
        let devices = self.lookup(hashid).await?;

        let prompt = prompt::query_prompt(query, &devices);
        let raw = self
            .gateway
            .generate(ModelRole::ConversationalResponder, &prompt)
            .await?;

        if raw.trim().is_empty() {
            return Err(AssistantError::EmptyCompletion);
        }

        let suggestions = identify_actions(query, &devices);
        let reply = if suggestions.is_empty() {
            NO_ACTIONS_MESSAGE.into()
        } else {
            serde_json::to_string_pretty(&suggestions).map_err(std::io::Error::from)?
        };

        tracing::info!(
            hashid = %hashid,
            suggestion_count = suggestions.len(),
            "query answered"
        );
        Ok(PipelineReply {
            reply,
            raw_model_text: Some(raw),
        })
    }

    async fn lookup(&self, hashid: &str) -> AssistantResult<Vec<DeviceRecord>> {
        let devices = devices_for_owner(&self.db_path, hashid).await?;
        if devices.is_empty() {
            return Err(AssistantError::EmptyDirectory);
        }
        Ok(devices)
    }
}
