//! District repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{District, DistrictFields, DistrictId};
use crate::domain::DomainError;

/// Repository trait for district storage
#[async_trait]
pub trait DistrictRepository: Send + Sync + Debug {
    /// Insert a district and return the identifier the store assigned
    async fn create(&self, fields: &DistrictFields) -> Result<DistrictId, DomainError>;

    /// Get a district by its identifier
    async fn get(&self, id: DistrictId) -> Result<Option<District>, DomainError>;

    /// Overwrite every mutable column. Returns false if no row matched.
    async fn update(&self, id: DistrictId, fields: &DistrictFields) -> Result<bool, DomainError>;

    /// Delete a district. Returns false if no row matched.
    async fn delete(&self, id: DistrictId) -> Result<bool, DomainError>;

    /// Names of the state owning the district (at most one in practice)
    async fn state_names(&self, id: DistrictId) -> Result<Vec<String>, DomainError>;
}
