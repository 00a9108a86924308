// src/auth/extractor.rs
// Bearer-token extractor for authenticated routes

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::debug;

use super::jwt::verify_token;
use crate::api::http::error::ApiError;

/// Identity decoded from a valid session token. Extracting this
/// authenticates the request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub email: String,
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(ApiError::Unauthenticated)?;

        let claims = verify_token(&token).map_err(|e| {
            debug!("Rejected session token: {}", e);
            ApiError::Unauthenticated
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get("authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|t| t.trim().to_string())
}
