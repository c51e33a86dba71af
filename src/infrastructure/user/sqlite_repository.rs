//! SQLite user repository implementation

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// SQLite implementation of UserRepository
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    username: String,
    password: String,
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT username, password FROM user WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user by username: {}", e)))?;

        Ok(row.map(|row| User::new(row.username, row.password)))
    }
}
