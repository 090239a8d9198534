//! Routine generation endpoint.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::routes::AssistReply;
use crate::state::{AppState, RequestMode};

/// Request body for generating a routine.
#[derive(Debug, Deserialize)]
pub struct CreateRoutineRequest {
    /// Owner identifier (opaque string).
    pub hashid: String,
    /// Routine type (e.g. "morning", "party time").
    pub routine_type: String,
}

/// POST /api/v1/routines — run the routine pipeline for an owner.
pub async fn create_routine(
    State(state): State<AppState>,
    Json(req): Json<CreateRoutineRequest>,
) -> ApiResult<Json<AssistReply>> {
    if req.hashid.trim().is_empty() {
        return Err(ApiError::BadRequest("hashid is required".into()));
    }
    if req.routine_type.trim().is_empty() {
        return Err(ApiError::BadRequest("routine_type is required".into()));
    }

    let outcome = state
        .assistant
        .create_routine(&req.hashid, &req.routine_type)
        .await;
    let reply = AssistReply::from_outcome(outcome);

    state
        .record(RequestMode::Routine, &req.hashid, &req.routine_type, &reply.reply)
        .await;
    Ok(Json(reply))
}
