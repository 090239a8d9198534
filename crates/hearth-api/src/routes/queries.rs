//! General query endpoint.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::routes::AssistReply;
use crate::state::{AppState, RequestMode};

/// Request body for a free-form home query.
#[derive(Debug, Deserialize)]
pub struct AnswerQueryRequest {
    /// Owner identifier (opaque string).
    pub hashid: String,
    /// Free-form query text.
    pub query: String,
}

/// POST /api/v1/queries — run the general-query pipeline for an owner.
pub async fn answer_query(
    State(state): State<AppState>,
    Json(req): Json<AnswerQueryRequest>,
) -> ApiResult<Json<AssistReply>> {
    if req.hashid.trim().is_empty() {
        return Err(ApiError::BadRequest("hashid is required".into()));
    }
    if req.query.trim().is_empty() {
        return Err(ApiError::BadRequest("query is required".into()));
    }

    let outcome = state.assistant.answer_query(&req.hashid, &req.query).await;
    let reply = AssistReply::from_outcome(outcome);

    state
        .record(RequestMode::Query, &req.hashid, &req.query, &reply.reply)
        .await;
    Ok(Json(reply))
}
