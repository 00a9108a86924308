// tests/common/mod.rs
// Shared test utilities: in-memory database, stub providers, router setup

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

use gemchat_backend::api::http::{create_auth_router, create_chat_router};
use gemchat_backend::llm::{CompletionProvider, LlmError};
use gemchat_backend::state::AppState;

/// Provider that always answers with a fixed reply
pub struct StubProvider {
    pub reply: String,
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Ok(self.reply.clone())
    }
}

/// Provider that simulates an upstream outage
pub struct FailingProvider;

#[async_trait]
impl CompletionProvider for FailingProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(LlmError::Api {
            status: 500,
            body: "upstream down".to_string(),
        })
    }
}

pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Build the app the way main does, with an injected completion provider
pub async fn create_test_app_with(provider: Arc<dyn CompletionProvider>) -> Router {
    let pool = setup_test_db().await;
    let app_state = Arc::new(AppState::new(pool, provider));

    Router::new()
        .nest("/auth", create_auth_router())
        .nest("/chat", create_chat_router())
        .with_state(app_state)
}

pub async fn create_test_app() -> Router {
    create_test_app_with(Arc::new(StubProvider {
        reply: "hi there".to_string(),
    }))
    .await
}

/// Fire a request and return (status, parsed JSON body)
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Register a user and return their session token
pub async fn register_user(app: &Router, username: &str, email: &str, password: &str) -> String {
    let (status, body) = request(
        app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "username": username,
            "email": email,
            "password": password,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

/// Create a chat and return its id
pub async fn create_chat(app: &Router, token: &str, name: Option<&str>) -> String {
    let body = match name {
        Some(name) => serde_json::json!({ "chatName": name }),
        None => serde_json::json!({}),
    };

    let (status, body) = request(app, "POST", "/chat/new", Some(token), Some(body)).await;

    assert_eq!(status, StatusCode::CREATED, "create chat failed: {}", body);
    body["id"].as_str().unwrap().to_string()
}
