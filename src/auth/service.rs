//! Account service
//!
//! Registration, credential verification and user lookup. Passwords are
//! bcrypt-hashed; a failed lookup and a failed password check collapse into
//! the same error so responses don't leak which usernames exist.

use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::User;

/// Account service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("account already exists")]
    AccountExists,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("user not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        AuthError::DatabaseError(e.to_string())
    }
}

/// Account management service
#[derive(Clone)]
pub struct AuthService {
    db_pool: PgPool,
}

impl AuthService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Create a new account with a bcrypt-hashed password
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (id, username, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(username)
        .bind(email)
        .bind(&password_hash)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AuthError::AccountExists,
            _ => AuthError::DatabaseError(e.to_string()),
        })?;

        Ok(user)
    }

    /// Verify a username/password pair and return the matching user
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db_pool)
        .await?;

        let user = user.ok_or(AuthError::InvalidCredentials)?;

        let valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| AuthError::PasswordHash(e.to_string()))?;
        if !valid {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Fetch a user by id
    pub async fn get_user_by_id(&self, id: Uuid) -> Result<User, AuthError> {
        sqlx::query_as(
            r#"
            SELECT id, username, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or(AuthError::UserNotFound)
    }
}
