//! SQLite store connection
//!
//! The whole application shares one connection to a file-backed database.
//! The pool is capped at a single connection that is opened eagerly and
//! never recycled, so a missing or unreadable database fails at startup.

use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::domain::DomainError;

/// SQLite store configuration
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Path of the database file
    pub path: PathBuf,
    /// Create an empty database when the file does not exist
    pub create_if_missing: bool,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("covid19IndiaPortal.db"),
            create_if_missing: false,
        }
    }
}

impl SqliteConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

/// Open the shared store connection
pub async fn connect(config: &SqliteConfig) -> Result<SqlitePool, DomainError> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(config.create_if_missing);

    let pool = open(options).await.map_err(|e| {
        DomainError::storage(format!(
            "Failed to open database '{}': {}",
            config.path.display(),
            e
        ))
    })?;

    info!("Opened database at {}", config.path.display());
    Ok(pool)
}

/// Districts may reference a state id that has no row, so foreign keys
/// stay unenforced
pub(crate) async fn open(options: SqliteConnectOptions) -> Result<SqlitePool, sqlx::Error> {
    let options = options.foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}
