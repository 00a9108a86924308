// src/chat/mod.rs

pub mod store;
pub mod types;

pub use store::{ChatStore, ChatStoreError};
pub use types::{Chat, ChatMessage};
