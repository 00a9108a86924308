// src/config/mod.rs
// Central configuration for the GemChat backend

pub mod auth;
pub mod helpers;
pub mod llm;
pub mod server;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref CONFIG: GemChatConfig = GemChatConfig::from_env();
}

/// Main configuration structure - composes all domain configs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GemChatConfig {
    pub server: server::ServerConfig,
    pub database: server::DatabaseConfig,
    pub logging: server::LoggingConfig,
    pub auth: auth::AuthConfig,
    pub gemini: llm::GeminiConfig,
}

impl GemChatConfig {
    pub fn from_env() -> Self {
        // Load .env file; don't panic if it doesn't exist (for production)
        dotenv::dotenv().ok();

        Self {
            server: server::ServerConfig::from_env(),
            database: server::DatabaseConfig::from_env(),
            logging: server::LoggingConfig::from_env(),
            auth: auth::AuthConfig::from_env(),
            gemini: llm::GeminiConfig::from_env(),
        }
    }

    /// Validate configuration at startup
    pub fn validate(&self) -> anyhow::Result<()> {
        self.auth.validate()?;
        self.gemini.validate()?;
        Ok(())
    }
}
