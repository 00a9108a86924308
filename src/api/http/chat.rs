// src/api/http/chat.rs
// Chat endpoints, including the message exchange flow

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;

use super::error::ApiError;
use crate::auth::AuthUser;
use crate::state::AppState;

pub fn create_chat_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/new", post(create_chat))
        .route("/history", get(history))
        .route("/delete", delete(delete_chat))
        .route("/gemini", post(send_message))
}

#[derive(Debug, Deserialize)]
struct CreateChatRequest {
    #[serde(rename = "chatName", default)]
    chat_name: Option<String>,
}

async fn create_chat(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<CreateChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let chat = state
        .chat_store
        .create_chat(&user.user_id, req.chat_name.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(chat)))
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    #[serde(rename = "chatId")]
    chat_id: Option<String>,
}

/// With a `chatId`, the messages of that chat in chronological order;
/// without one, the caller's chats ordered by recent activity.
async fn history(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(query): Query<HistoryQuery>,
) -> Result<Response, ApiError> {
    match query.chat_id {
        Some(chat_id) => {
            let messages = state.chat_store.list_messages(&chat_id).await?;
            Ok(Json(messages).into_response())
        }
        None => {
            let chats = state.chat_store.list_chats(&user.user_id).await?;
            Ok(Json(chats).into_response())
        }
    }
}

#[derive(Debug, Deserialize)]
struct DeleteQuery {
    #[serde(rename = "chatId")]
    chat_id: Option<String>,
}

async fn delete_chat(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let chat_id = query
        .chat_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::InvalidInput("chatId is required".to_string()))?;

    state.chat_store.delete_chat(&chat_id, &user.user_id).await?;

    Ok(Json(serde_json::json!({ "message": "Chat deleted" })))
}

#[derive(Debug, Deserialize)]
struct SendMessageRequest {
    #[serde(rename = "chatId", default)]
    chat_id: String,
    #[serde(default)]
    message: String,
}

/// One message exchange: persist the user's turn, ask the model, persist
/// the reply, bump the chat. The user's turn is durable before the
/// upstream call, so a Gemini failure leaves it in place without a paired
/// reply; a client retry appends a fresh user turn.
async fn send_message(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if req.chat_id.trim().is_empty() || req.message.trim().is_empty() {
        return Err(ApiError::InvalidInput(
            "chatId and message are required".to_string(),
        ));
    }

    state
        .chat_store
        .append_message(&req.chat_id, &user.user_id, &req.message, false)
        .await?;

    let reply = state.completion_provider.complete(&req.message).await?;

    state
        .chat_store
        .append_message(&req.chat_id, &user.user_id, &reply, true)
        .await?;
    state.chat_store.touch_chat(&req.chat_id).await?;

    Ok(Json(serde_json::json!({ "message": reply })))
}
