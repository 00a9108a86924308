// src/config/llm.rs
// Gemini API configuration

use serde::{Deserialize, Serialize};

/// Gemini generation endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: super::helpers::env_or("GEMINI_API_KEY", ""),
            model: super::helpers::env_or("GEMINI_MODEL", "gemini-2.0-flash"),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api_key.is_empty() {
            return Err(anyhow::anyhow!("GEMINI_API_KEY is required"));
        }

        Ok(())
    }
}
