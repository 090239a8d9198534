//! API route definitions and router builder.

pub mod devices;
pub mod health;
pub mod queries;
pub mod requests;
pub mod routines;

use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

use hearth_assistant::{AssistantError, PipelineReply};

/// Body returned by both pipeline endpoints: the display string plus the
/// raw model text as a diagnostic aside.
#[derive(Debug, Serialize)]
pub struct AssistReply {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_model_text: Option<String>,
}

impl AssistReply {
    /// A pipeline outcome always becomes a displayable reply; errors are
    /// mapped to their fixed user message here, never surfaced as faults.
    pub fn from_outcome(outcome: Result<PipelineReply, AssistantError>) -> Self {
        match outcome {
            Ok(reply) => Self {
                reply: reply.reply,
                raw_model_text: reply.raw_model_text,
            },
            Err(err) => Self {
                reply: err.user_message(),
                raw_model_text: err.raw_model_text().map(str::to_owned),
            },
        }
    }
}

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/routines", post(routines::create_routine))
        .route("/queries", post(queries::answer_query))
        .route("/devices/{hashid}", get(devices::list_devices))
        .route("/requests", get(requests::list_requests));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
