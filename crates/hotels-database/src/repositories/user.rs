//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use hotels_core::error::{AppError, ErrorKind};
use hotels_core::result::AppResult;
use hotels_entity::user::{CreateUser, User};

use crate::store::UserStore;

/// Name of the unique constraint guarding usernames.
const USERNAME_CONSTRAINT: &str = "users_username_key";

/// PostgreSQL-backed credential store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    async fn insert(&self, data: CreateUser) -> AppResult<User> {
        // The unique constraint makes this an atomic insert-if-absent.
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash, role) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some(USERNAME_CONSTRAINT)
                    || db_err.is_unique_violation() =>
            {
                AppError::conflict(format!("Username '{}' already exists", data.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }
}
