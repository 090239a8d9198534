//! Shared test harness for E2E integration tests.
//!
//! Wires a temporary SQLite directory, a wiremock Ollama backend, and the
//! real Axum router, exercising actual code paths across every crate
//! boundary.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::Connection;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hearth_api::routes::build_router;
use hearth_api::state::AppState;
use hearth_assistant::{Assistant, RoutineArtifactStore};
use hearth_inference::{InferenceConfig, InferenceGateway};

/// End-to-end test harness: seeded directory + mock Ollama + real router.
pub struct TestHarness {
    /// Owns the SQLite file and artifact directory for the test's lifetime.
    #[allow(dead_code)]
    dir: TempDir,
    /// Mock Ollama backend.
    pub ollama: MockServer,
    /// Axum router for HTTP requests via `tower::oneshot`.
    pub router: Router,
    /// Artifact store pointed at the harness's artifact directory.
    pub artifacts: RoutineArtifactStore,
}

impl TestHarness {
    /// Create a harness with the standard sample home for owner `h-1`:
    /// a light, a thermostat, a motion sensor (malformed cluster column),
    /// and smart blinds.
    pub async fn with_sample_home() -> Self {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("home_details.db");
        seed_sample_home(&db_path).await;

        let ollama = MockServer::start().await;
        let gateway = Arc::new(InferenceGateway::new(InferenceConfig {
            host: ollama.uri(),
            ..InferenceConfig::default()
        }));

        let artifact_dir = dir.path().join("routines");
        let assistant = Assistant::new(
            db_path.clone(),
            gateway,
            RoutineArtifactStore::new(artifact_dir.clone()),
        );
        let state = AppState::new(Arc::new(assistant), db_path);
        let router = build_router(state);

        Self {
            dir,
            ollama,
            router,
            artifacts: RoutineArtifactStore::new(artifact_dir),
        }
    }

    /// Replace all mounted Ollama mocks with one returning `completion`.
    pub async fn mock_completion(&self, completion: &str) {
        self.ollama.reset().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "gemma:7b",
                "response": completion,
                "done": true
            })))
            .mount(&self.ollama)
            .await;
    }

    /// Replace all mounted Ollama mocks with a failing backend.
    pub async fn mock_backend_failure(&self) {
        self.ollama.reset().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&self.ollama)
            .await;
    }

    /// POST /api/v1/routines. Returns (status, response JSON).
    pub async fn create_routine(
        &self,
        hashid: &str,
        routine_type: &str,
    ) -> (StatusCode, serde_json::Value) {
        self.post_json(
            "/api/v1/routines",
            serde_json::json!({"hashid": hashid, "routine_type": routine_type}),
        )
        .await
    }

    /// POST /api/v1/queries. Returns (status, response JSON).
    pub async fn answer_query(
        &self,
        hashid: &str,
        query: &str,
    ) -> (StatusCode, serde_json::Value) {
        self.post_json(
            "/api/v1/queries",
            serde_json::json!({"hashid": hashid, "query": query}),
        )
        .await
    }

    /// GET /api/v1/devices/{hashid}. Returns (status, response JSON).
    pub async fn list_devices(&self, hashid: &str) -> (StatusCode, serde_json::Value) {
        self.get_json(&format!("/api/v1/devices/{hashid}")).await
    }

    /// GET /api/v1/requests. Returns (status, response JSON).
    pub async fn list_requests(&self) -> (StatusCode, serde_json::Value) {
        self.get_json("/api/v1/requests").await
    }

    async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }
}

/// Create and populate the `home_details` table for owner `h-1`.
async fn seed_sample_home(db_path: &std::path::Path) {
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);
    let mut conn = SqliteConnection::connect_with(&options).await.unwrap();

    sqlx::query(
        "CREATE TABLE home_details (
            hashid TEXT NOT NULL,
            location_name TEXT NOT NULL,
            friendly_name TEXT NOT NULL,
            mac_id TEXT NOT NULL,
            cluster_ids TEXT NOT NULL,
            device_type TEXT NOT NULL
        )",
    )
    .execute(&mut conn)
    .await
    .unwrap();

    for (location, name, mac, clusters, device_type) in [
        ("bed room", "bedside lamp", "23213234", "[6,8,787]", "light"),
        ("bed room", "nest", "232132378", "[6]", "thermostat"),
        ("hallway", "sensor", "23213237", "not-json", "motion sensor"),
        ("living room", "blinds", "232132399", "[6]", "smart blinds"),
    ] {
        sqlx::query(
            "INSERT INTO home_details
             (hashid, location_name, friendly_name, mac_id, cluster_ids, device_type)
             VALUES ('h-1', ?, ?, ?, ?, ?)",
        )
        .bind(location)
        .bind(name)
        .bind(mac)
        .bind(clusters)
        .bind(device_type)
        .execute(&mut conn)
        .await
        .unwrap();
    }

    conn.close().await.unwrap();
}
