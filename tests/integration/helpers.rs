//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use grantflow_core::config::AppConfig;
use grantflow_core::types::{ProgramId, UserId};
use grantflow_entity::program::Program;
use grantflow_store::memory::{
    MemoryApplicationStore, MemoryMessageStore, MemoryNotificationStore, MemoryProgramStore,
};
use grantflow_store::ProgramStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Program store for seeding fixtures directly
    pub program_store: Arc<MemoryProgramStore>,
}

impl TestApp {
    /// Create a new test application over fresh in-memory stores
    pub fn new() -> Self {
        let program_store = Arc::new(MemoryProgramStore::new());

        let state = grantflow_api::AppState::new(
            Arc::new(AppConfig::default()),
            Arc::new(MemoryApplicationStore::new()),
            Arc::new(MemoryMessageStore::new()),
            Arc::new(MemoryNotificationStore::new()),
            Arc::clone(&program_store) as _,
        );

        let router = grantflow_api::router::build_router(state);

        Self {
            router,
            program_store,
        }
    }

    /// Seed a program owned by the given user and return its id
    pub async fn create_program(&self, owner: Uuid, title: &str) -> ProgramId {
        let program = self
            .program_store
            .create(Program::new(UserId::from(owner), title))
            .await
            .expect("Failed to seed program");
        program.id
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        user: Option<Uuid>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(user) = user {
            req = req.header("x-user-id", user.to_string());
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Extract the `data` field of a success envelope
    pub fn data(&self) -> &Value {
        self.body.get("data").expect("No data in response body")
    }
}
