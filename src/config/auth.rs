// src/config/auth.rs
// Session token configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEV_JWT_SECRET: &str = "gemchat-jwt-secret-change-in-production";

/// Session token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub session_expire_days: i64,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: super::helpers::env_or("JWT_SECRET", DEV_JWT_SECRET),
            session_expire_days: super::helpers::env_parsed("SESSION_EXPIRE_DAYS", 7),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.jwt_secret == DEV_JWT_SECRET {
            warn!("JWT_SECRET is not set; using the development default");
        }

        if self.session_expire_days <= 0 {
            return Err(anyhow::anyhow!(
                "SESSION_EXPIRE_DAYS must be a positive number of days"
            ));
        }

        Ok(())
    }
}
