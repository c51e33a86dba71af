//! SQLite district repository implementation

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use tracing::debug;

use crate::domain::district::{District, DistrictFields, DistrictId, DistrictRepository};
use crate::domain::DomainError;

/// SQLite implementation of DistrictRepository
#[derive(Debug, Clone)]
pub struct SqliteDistrictRepository {
    pool: SqlitePool,
}

impl SqliteDistrictRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DistrictRow {
    district_id: i64,
    district_name: String,
    state_id: i64,
    cases: i64,
    cured: i64,
    active: i64,
    deaths: i64,
}

impl From<DistrictRow> for District {
    fn from(row: DistrictRow) -> Self {
        District::new(
            row.district_id,
            DistrictFields {
                name: row.district_name,
                state_id: row.state_id,
                cases: row.cases,
                cured: row.cured,
                active: row.active,
                deaths: row.deaths,
            },
        )
    }
}

#[async_trait]
impl DistrictRepository for SqliteDistrictRepository {
    async fn create(&self, fields: &DistrictFields) -> Result<DistrictId, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO district (district_name, state_id, cases, cured, active, deaths)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&fields.name)
        .bind(fields.state_id)
        .bind(fields.cases)
        .bind(fields.cured)
        .bind(fields.active)
        .bind(fields.deaths)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create district: {}", e)))?;

        Ok(result.last_insert_rowid())
    }

    async fn get(&self, id: DistrictId) -> Result<Option<District>, DomainError> {
        let row = sqlx::query_as::<_, DistrictRow>(
            r#"
            SELECT district_id, district_name, state_id, cases, cured, active, deaths
            FROM district
            WHERE district_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get district: {}", e)))?;

        Ok(row.map(District::from))
    }

    async fn update(&self, id: DistrictId, fields: &DistrictFields) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE district
            SET district_name = ?, state_id = ?, cases = ?, cured = ?, active = ?, deaths = ?
            WHERE district_id = ?
            "#,
        )
        .bind(&fields.name)
        .bind(fields.state_id)
        .bind(fields.cases)
        .bind(fields.cured)
        .bind(fields.active)
        .bind(fields.deaths)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update district: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: DistrictId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM district WHERE district_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete district: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn state_names(&self, id: DistrictId) -> Result<Vec<String>, DomainError> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT state.state_name
            FROM district
            JOIN state ON state.state_id = district.state_id
            WHERE district.district_id = ?
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get district state: {}", e)))?;

        debug!(district_id = id, ?names, "Resolved owning state");

        Ok(names)
    }
}
