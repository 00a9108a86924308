// src/auth/service.rs

use sqlx::SqlitePool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use super::jwt::create_token;
use super::models::{AuthSession, LoginRequest, RegisterRequest, User, UserRecord};
use super::password::{hash_password, verify_password};

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("Email is already in use")]
    EmailTaken,
    #[error("Username is already taken")]
    UsernameTaken,
    // One message for unknown email and wrong password, so responses
    // don't reveal which accounts exist.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("credential error: {0}")]
    Credential(String),
}

pub struct AuthService {
    db: SqlitePool,
}

impl AuthService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Create a user account and issue its first session token.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthSession, AuthError> {
        if req.username.is_empty() || req.email.is_empty() || req.password.is_empty() {
            return Err(AuthError::InvalidInput(
                "Username, email and password are required".to_string(),
            ));
        }

        if req.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::InvalidInput(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        if self.email_exists(&req.email).await? {
            return Err(AuthError::EmailTaken);
        }

        if self.username_exists(&req.username).await? {
            return Err(AuthError::UsernameTaken);
        }

        let user_id = Uuid::new_v4().to_string();
        let password_hash =
            hash_password(&req.password).map_err(|e| AuthError::Credential(e.to_string()))?;
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user_id)
        .bind(&req.username)
        .bind(&req.email)
        .bind(&password_hash)
        .bind(now)
        .bind(now)
        .execute(&self.db)
        .await?;

        let user = self.get_user_by_id(&user_id).await?;
        let token = create_token(&user.id, &user.email)
            .map_err(|e| AuthError::Credential(e.to_string()))?;

        info!("Registered user {}", user.username);

        Ok(AuthSession { user, token })
    }

    /// Verify credentials and issue a session token.
    pub async fn login(&self, req: LoginRequest) -> Result<AuthSession, AuthError> {
        if req.email.is_empty() || req.password.is_empty() {
            return Err(AuthError::InvalidInput(
                "Email and password are required".to_string(),
            ));
        }

        let record = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE email = ?")
            .bind(&req.email)
            .fetch_optional(&self.db)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = verify_password(&req.password, &record.password_hash)
            .map_err(|e| AuthError::Credential(e.to_string()))?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        let token = create_token(&record.id, &record.email)
            .map_err(|e| AuthError::Credential(e.to_string()))?;

        Ok(AuthSession {
            user: record.into(),
            token,
        })
    }

    /// Fetch a user's public profile (password hash omitted).
    pub async fn profile(&self, user_id: &str) -> Result<User, AuthError> {
        self.get_user_by_id(user_id).await
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<User, AuthError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, email, created_at FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AuthError::UserNotFound)
    }

    async fn email_exists(&self, email: &str) -> Result<bool, AuthError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.db)
            .await?;

        Ok(count.0 > 0)
    }

    async fn username_exists(&self, username: &str) -> Result<bool, AuthError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.db)
            .await?;

        Ok(count.0 > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        pool
    }

    fn register_req(username: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn register_then_login() {
        let service = AuthService::new(setup_test_db().await);

        let session = service
            .register(register_req("alice", "a@x.com", "secret1"))
            .await
            .unwrap();
        assert_eq!(session.user.username, "alice");
        assert!(!session.token.is_empty());

        let session = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(session.user.email, "a@x.com");
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let service = AuthService::new(setup_test_db().await);

        let err = service
            .register(register_req("alice", "a@x.com", "12345"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn register_rejects_duplicates() {
        let service = AuthService::new(setup_test_db().await);

        service
            .register(register_req("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let err = service
            .register(register_req("bob", "a@x.com", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::EmailTaken));

        let err = service
            .register(register_req("alice", "b@x.com", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UsernameTaken));
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let service = AuthService::new(setup_test_db().await);

        service
            .register(register_req("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let unknown_email = service
            .login(LoginRequest {
                email: "nobody@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap_err();
        let wrong_password = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "wrong-password".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert_eq!(unknown_email.to_string(), wrong_password.to_string());
    }

    #[tokio::test]
    async fn profile_omits_password_and_errors_on_missing_user() {
        let service = AuthService::new(setup_test_db().await);

        let session = service
            .register(register_req("alice", "a@x.com", "secret1"))
            .await
            .unwrap();

        let user = service.profile(&session.user.id).await.unwrap();
        assert_eq!(user.username, "alice");

        let err = service.profile("no-such-id").await.unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }
}
