//! Login service
//!
//! A placeholder credential check: username lookup plus a bcrypt verify of
//! the stored hash. No tokens or sessions are issued.

use bcrypt::verify;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::User;

/// Auth service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
}

/// Input for logging in
#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// User row including the stored hash; never leaves this module
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    display_name: String,
    role: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Look up a user by username and verify the password
    pub async fn login(&self, input: LoginInput) -> AppResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, display_name, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(&input.username)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        let password_ok = verify(&input.password, &row.password_hash)
            .map_err(|e| AppError::Internal(format!("password verification failed: {}", e)))?;

        if !password_ok {
            return Err(AppError::InvalidCredentials);
        }

        Ok(User {
            id: row.id,
            username: row.username,
            display_name: row.display_name,
            role: row.role,
            created_at: row.created_at,
        })
    }
}
