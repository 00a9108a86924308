// src/auth/mod.rs

pub mod extractor;
pub mod jwt;
pub mod models;
pub mod password;
pub mod service;

pub use extractor::AuthUser;
pub use jwt::{create_token, verify_token, Claims, TokenError};
pub use models::{AuthSession, LoginRequest, RegisterRequest, User};
pub use service::{AuthError, AuthService};
