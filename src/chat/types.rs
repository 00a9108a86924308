// src/chat/types.rs
// Chat and message rows

use serde::Serialize;

/// A named conversation owned by a single user
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    #[serde(skip_serializing)]
    pub user_id: String,
    #[serde(rename = "chatName")]
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// A single turn in a chat. Immutable once created.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i64,
    pub chat_id: String,
    #[serde(skip_serializing)]
    pub user_id: String,
    pub text: String,
    pub is_bot: bool,
    pub created_at: i64,
}
