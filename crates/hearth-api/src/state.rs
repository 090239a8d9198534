//! Shared application state for the Axum server.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use hearth_assistant::Assistant;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// The request pipeline (directory → prompts → gateway → interpreter).
    pub assistant: Arc<Assistant>,
    /// Device directory path, used by the diagnostic devices route.
    pub database_path: PathBuf,
    /// In-memory log of handled requests, newest last.
    pub requests: Arc<RwLock<Vec<RequestRecord>>>,
}

/// Which pipeline operation a request invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestMode {
    Routine,
    Query,
}

/// One handled request, kept in memory only.
#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    /// UUIDv7 for time-sortability.
    pub id: Uuid,
    pub mode: RequestMode,
    pub hashid: String,
    /// Routine type or query text, as submitted.
    pub input: String,
    /// The display string handed back to the user.
    pub reply: String,
    pub created_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(assistant: Arc<Assistant>, database_path: PathBuf) -> Self {
        Self {
            assistant,
            database_path,
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a request record to the in-memory log.
    pub async fn record(&self, mode: RequestMode, hashid: &str, input: &str, reply: &str) {
        let mut requests = self.requests.write().await;
        requests.push(RequestRecord {
            id: Uuid::now_v7(),
            mode,
            hashid: hashid.to_string(),
            input: input.to_string(),
            reply: reply.to_string(),
            created_at: Utc::now(),
        });
    }
}
