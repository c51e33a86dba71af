//! COVID-19 Portal API
//!
//! A REST API over a SQLite store of Indian states and districts:
//! - Public reads of states and a district's owning state
//! - Token-gated district CRUD and per-state case totals
//! - Username/password login issuing JWT bearer tokens

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::storage::{self, SqliteConfig};
use tracing::info;

/// Validate the configuration, open the store and wire the services
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    config.validate()?;

    let pool = storage::connect(&SqliteConfig::new(&config.database.path)).await?;

    let token_service = JwtService::new(JwtConfig::new(
        &config.auth.jwt_secret,
        config.auth.token_ttl_hours,
    ));
    info!(
        "Token service ready (tokens valid for {}h)",
        config.auth.token_ttl_hours
    );

    Ok(AppState::with_sqlite(pool, Arc::new(token_service)))
}
