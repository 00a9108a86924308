// src/api/http/auth.rs
// Registration, login, and profile endpoints

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use super::error::ApiError;
use crate::auth::models::{LoginRequest, RegisterRequest, User};
use crate::auth::AuthUser;
use crate::state::AppState;

pub fn create_auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/profile", get(profile))
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.auth_service.register(req).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Registration successful",
            "token": session.token,
            "user": session.user,
        })),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.auth_service.login(req).await?;

    Ok(Json(serde_json::json!({
        "message": "Login successful",
        "token": session.token,
        "user": session.user,
    })))
}

async fn profile(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> Result<Json<User>, ApiError> {
    let profile = state.auth_service.profile(&user.user_id).await?;

    Ok(Json(profile))
}
