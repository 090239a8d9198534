//! Hearth API — HTTP shell for the home routine assistant.
//!
//! Wires the device directory, the prompt/interpretation pipeline, and the
//! Ollama gateway into a single Axum server.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use hearth_api::config::ServerConfig;
use hearth_api::routes::build_router;
use hearth_api::state::AppState;
use hearth_assistant::{Assistant, RoutineArtifactStore};
use hearth_inference::{InferenceGateway, ModelRole};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "hearth-api starting");

    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_file(&path)?,
        None => {
            tracing::warn!("no config file given — using defaults");
            ServerConfig::default()
        }
    };
    tracing::info!(
        database_path = %config.database_path.display(),
        artifact_dir = %config.artifact_dir.display(),
        "config loaded"
    );

    // ── Inference gateway ───────────────────────────────────────
    // Built once per process; both model roles stay bound to the same
    // handles for the lifetime of the server.
    let gateway = Arc::new(InferenceGateway::new(config.inference.clone()));
    tracing::info!(
        host = %config.inference.host,
        structured_model = gateway.model_for(ModelRole::StructuredGenerator),
        responder_model = gateway.model_for(ModelRole::ConversationalResponder),
        "inference gateway initialized"
    );

    // ── Pipeline + state ────────────────────────────────────────
    let assistant = Assistant::new(
        config.database_path.clone(),
        gateway,
        RoutineArtifactStore::new(config.artifact_dir.clone()),
    );
    let state = AppState::new(Arc::new(assistant), config.database_path.clone());

    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
