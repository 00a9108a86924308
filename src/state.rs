// src/state.rs
// Application state shared across handlers

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::AuthService;
use crate::chat::ChatStore;
use crate::llm::CompletionProvider;

/// Application state shared across handlers. Constructed once at startup
/// and injected into the router; nothing here is reachable as a global.
pub struct AppState {
    pub sqlite_pool: SqlitePool,
    pub auth_service: Arc<AuthService>,
    pub chat_store: Arc<ChatStore>,
    pub completion_provider: Arc<dyn CompletionProvider>,
}

impl AppState {
    pub fn new(pool: SqlitePool, completion_provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            auth_service: Arc::new(AuthService::new(pool.clone())),
            chat_store: Arc::new(ChatStore::new(pool.clone())),
            sqlite_pool: pool,
            completion_provider,
        }
    }
}
