//! Request history endpoint.

use axum::Json;
use axum::extract::State;

use crate::state::{AppState, RequestRecord};

/// GET /api/v1/requests — list recent handled requests, newest first.
pub async fn list_requests(State(state): State<AppState>) -> Json<Vec<RequestRecord>> {
    let requests = state.requests.read().await;
    let recent: Vec<RequestRecord> = requests.iter().rev().take(50).cloned().collect();
    Json(recent)
}
