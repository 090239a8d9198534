//! Ollama generate client with fixed per-role model bindings.

use serde::{Deserialize, Serialize};

use crate::error::{InferenceError, InferenceResult};

/// The two logical model roles used by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelRole {
    /// Routine synthesis — expected to emit a JSON routine payload.
    StructuredGenerator,
    /// Free-form answering for general home queries.
    ConversationalResponder,
}

/// Configuration for the Ollama inference endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct InferenceConfig {
    /// Ollama HTTP API base URL.
    #[serde(default = "default_host")]
    pub host: String,
    /// Model bound to [`ModelRole::StructuredGenerator`].
    #[serde(default = "default_structured_model")]
    pub structured_model: String,
    /// Model bound to [`ModelRole::ConversationalResponder`].
    #[serde(default = "default_responder_model")]
    pub responder_model: String,
}

fn default_host() -> String {
    "http://localhost:11434".into()
}
fn default_structured_model() -> String {
    "gemma:7b".into()
}
fn default_responder_model() -> String {
    "mistral:7b-instruct-q6_K".into()
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            structured_model: default_structured_model(),
            responder_model: default_responder_model(),
        }
    }
}

/// Ollama generate API request body.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Ollama generate API response (only the field we need).
#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Process-scoped gateway to the Ollama backend.
///
/// Construct once at startup and share by reference; the role-to-model
/// binding never changes for the lifetime of the gateway. The underlying
/// HTTP client has no request timeout — a generate call blocks until the
/// backend returns or the connection fails.
pub struct InferenceGateway {
    client: reqwest::Client,
    config: InferenceConfig,
}

impl InferenceGateway {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// The model name bound to a role.
    pub fn model_for(&self, role: ModelRole) -> &str {
        match role {
            ModelRole::StructuredGenerator => &self.config.structured_model,
            ModelRole::ConversationalResponder => &self.config.responder_model,
        }
    }

    /// Submit a prompt to the model bound to `role` and return the raw
    /// completion text.
    pub async fn generate(&self, role: ModelRole, prompt: &str) -> InferenceResult<String> {
        let model = self.model_for(role);
        let url = format!("{}/api/generate", self.config.host);

        let body = GenerateRequest {
            model,
            prompt,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, model = %model, "inference backend returned non-success");
            return Err(InferenceError::Backend { status });
        }

        let generated: GenerateResponse = response.json().await?;
        tracing::debug!(
            model = %model,
            completion_len = generated.response.len(),
            "generate completed"
        );
        Ok(generated.response)
    }
}
