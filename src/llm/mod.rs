// src/llm/mod.rs
// Completion provider trait - the seam between the chat flow and the
// external generation API

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;

pub use gemini::GeminiProvider;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to generation endpoint failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("generation endpoint returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("generation response missing completion text")]
    MalformedResponse,
}

/// Synchronous single-turn completion: one prompt in, one reply out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
