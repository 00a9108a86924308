// src/auth/jwt.rs
// Signed session tokens (HS256)

use anyhow::{anyhow, Result};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CONFIG;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub sub: String, // user_id
    pub email: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at timestamp
}

/// Why a token was rejected. The HTTP contract only needs valid/invalid,
/// but the distinction is worth logging.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token signature invalid")]
    InvalidSignature,
    #[error("token malformed")]
    Malformed,
}

/// Issue a session token for a user. No side effects.
pub fn create_token(user_id: &str, email: &str) -> Result<String> {
    build_token(
        user_id,
        email,
        chrono::Duration::days(CONFIG.auth.session_expire_days),
        CONFIG.auth.jwt_secret.as_bytes(),
    )
}

fn build_token(user_id: &str, email: &str, ttl: chrono::Duration, secret: &[u8]) -> Result<String> {
    let now = chrono::Utc::now();
    let expiration = now
        .checked_add_signed(ttl)
        .ok_or_else(|| anyhow!("Failed to calculate expiration"))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        exp: expiration,
        iat: now.timestamp() as usize,
    };

    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .map_err(|e| anyhow!("Failed to create token: {}", e))
}

/// Check signature and expiry; returns the decoded claims on success.
pub fn verify_token(token: &str) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(CONFIG.auth.jwt_secret.as_bytes());
    let validation = Validation::default();

    decode::<Claims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        })
}
