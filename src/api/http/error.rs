// src/api/http/error.rs
// HTTP error taxonomy and status mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::auth::service::AuthError;
use crate::chat::store::ChatStoreError;
use crate::llm::LlmError;

/// Request-level error. Every handler is a single unit of failure: the
/// first error aborts the remaining steps and becomes the response.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("AI service is unavailable")]
    Upstream,
    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            // Duplicate email/username stays at 400, the contract clients
            // already handle.
            ApiError::InvalidInput(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream => StatusCode::BAD_GATEWAY,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidInput(msg) => ApiError::InvalidInput(msg),
            AuthError::EmailTaken => ApiError::Conflict("Email is already in use".to_string()),
            AuthError::UsernameTaken => {
                ApiError::Conflict("Username is already taken".to_string())
            }
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::UserNotFound => ApiError::NotFound("User not found".to_string()),
            AuthError::Database(err) => {
                error!("Auth database error: {}", err);
                ApiError::Internal
            }
            AuthError::Credential(msg) => {
                error!("Credential processing error: {}", msg);
                ApiError::Internal
            }
        }
    }
}

impl From<ChatStoreError> for ApiError {
    fn from(e: ChatStoreError) -> Self {
        match e {
            ChatStoreError::ChatNotFound => ApiError::NotFound("Chat not found".to_string()),
            ChatStoreError::Database(err) => {
                error!("Chat database error: {}", err);
                ApiError::Internal
            }
        }
    }
}

impl From<LlmError> for ApiError {
    fn from(e: LlmError) -> Self {
        // The real cause stays server-side; clients get a generic message.
        error!("AI gateway error: {}", e);
        ApiError::Upstream
    }
}
