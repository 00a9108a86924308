// src/chat/store.rs
// Chat and message persistence

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use super::types::{Chat, ChatMessage};

pub const DEFAULT_CHAT_NAME: &str = "New chat";

#[derive(Debug, Error)]
pub enum ChatStoreError {
    #[error("Chat not found")]
    ChatNotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub struct ChatStore {
    db: SqlitePool,
}

impl ChatStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Create a chat for a user. The name falls back to a placeholder when
    /// omitted or blank.
    pub async fn create_chat(
        &self,
        owner_id: &str,
        name: Option<&str>,
    ) -> Result<Chat, ChatStoreError> {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(DEFAULT_CHAT_NAME);
        let id = Uuid::new_v4().to_string();
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO chats (id, user_id, name, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(owner_id)
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(&self.db)
        .await?;

        debug!("Created chat {} for user {}", id, owner_id);

        Ok(Chat {
            id,
            user_id: owner_id.to_string(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// All chats owned by a user, most recently active first.
    pub async fn list_chats(&self, owner_id: &str) -> Result<Vec<Chat>, ChatStoreError> {
        let chats = sqlx::query_as::<_, Chat>(
            "SELECT * FROM chats WHERE user_id = ? ORDER BY updated_at DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.db)
        .await?;

        Ok(chats)
    }

    /// Messages of a chat in chronological order.
    pub async fn list_messages(&self, chat_id: &str) -> Result<Vec<ChatMessage>, ChatStoreError> {
        let messages = sqlx::query_as::<_, ChatMessage>(
            "SELECT * FROM messages WHERE chat_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(chat_id)
        .fetch_all(&self.db)
        .await?;

        Ok(messages)
    }

    /// Delete a chat and its messages. Ownership is enforced by the query:
    /// a chat owned by someone else looks the same as a missing chat.
    pub async fn delete_chat(&self, chat_id: &str, owner_id: &str) -> Result<(), ChatStoreError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = ? AND user_id = ?")
            .bind(chat_id)
            .bind(owner_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ChatStoreError::ChatNotFound);
        }

        // Best-effort after the chat row; not wrapped in a transaction.
        sqlx::query("DELETE FROM messages WHERE chat_id = ?")
            .bind(chat_id)
            .execute(&self.db)
            .await?;

        debug!("Deleted chat {} and its messages", chat_id);

        Ok(())
    }

    /// Append a message row. The chat is not re-checked here; callers
    /// establish ownership before writing.
    pub async fn append_message(
        &self,
        chat_id: &str,
        user_id: &str,
        text: &str,
        is_bot: bool,
    ) -> Result<ChatMessage, ChatStoreError> {
        let now = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO messages (chat_id, user_id, text, is_bot, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(chat_id)
        .bind(user_id)
        .bind(text)
        .bind(is_bot)
        .bind(now)
        .execute(&self.db)
        .await?;

        Ok(ChatMessage {
            id: result.last_insert_rowid(),
            chat_id: chat_id.to_string(),
            user_id: user_id.to_string(),
            text: text.to_string(),
            is_bot,
            created_at: now,
        })
    }

    /// Bump a chat's updated timestamp to now.
    pub async fn touch_chat(&self, chat_id: &str) -> Result<(), ChatStoreError> {
        let now = chrono::Utc::now().timestamp();

        sqlx::query("UPDATE chats SET updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(chat_id)
            .execute(&self.db)
            .await?;

        Ok(())
    }
}
