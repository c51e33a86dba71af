//! SQLite state repository implementation

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::domain::state::{State, StateId, StateRepository, StateStats};
use crate::domain::DomainError;

/// SQLite implementation of StateRepository
#[derive(Debug, Clone)]
pub struct SqliteStateRepository {
    pool: SqlitePool,
}

impl SqliteStateRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct StateRow {
    state_id: i64,
    state_name: String,
    population: i64,
}

impl From<StateRow> for State {
    fn from(row: StateRow) -> Self {
        Self {
            id: row.state_id,
            name: row.state_name,
            population: row.population,
        }
    }
}

#[derive(Debug, FromRow)]
struct StatsRow {
    total_cases: i64,
    total_cured: i64,
    total_active: i64,
    total_deaths: i64,
}

#[async_trait]
impl StateRepository for SqliteStateRepository {
    async fn list(&self) -> Result<Vec<State>, DomainError> {
        let rows = sqlx::query_as::<_, StateRow>(
            "SELECT state_id, state_name, population FROM state ORDER BY state_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list states: {}", e)))?;

        Ok(rows.into_iter().map(State::from).collect())
    }

    async fn get(&self, id: StateId) -> Result<Option<State>, DomainError> {
        let row = sqlx::query_as::<_, StateRow>(
            "SELECT state_id, state_name, population FROM state WHERE state_id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get state: {}", e)))?;

        Ok(row.map(State::from))
    }

    async fn stats(&self, id: StateId) -> Result<StateStats, DomainError> {
        // SUM over no rows is NULL, hence the COALESCE
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT COALESCE(SUM(cases), 0) AS total_cases,
                   COALESCE(SUM(cured), 0) AS total_cured,
                   COALESCE(SUM(active), 0) AS total_active,
                   COALESCE(SUM(deaths), 0) AS total_deaths
            FROM district
            WHERE state_id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to aggregate state stats: {}", e)))?;

        debug!(state_id = id, ?row, "Aggregated state stats");

        Ok(StateStats {
            total_cases: row.total_cases,
            total_cured: row.total_cured,
            total_active: row.total_active,
            total_deaths: row.total_deaths,
        })
    }
}
