// src/api/http/mod.rs

pub mod auth;
pub mod chat;
pub mod error;
pub mod health;

pub use auth::create_auth_router;
pub use chat::create_chat_router;
pub use error::ApiError;
pub use health::{health_check, liveness_check};
