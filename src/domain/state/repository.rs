//! State repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{State, StateId, StateStats};
use crate::domain::DomainError;

/// Read access to states and their aggregated district counters
#[async_trait]
pub trait StateRepository: Send + Sync + Debug {
    /// List every state
    async fn list(&self) -> Result<Vec<State>, DomainError>;

    /// Get a state by its identifier
    async fn get(&self, id: StateId) -> Result<Option<State>, DomainError>;

    /// Sum the counters of all districts owned by the state
    async fn stats(&self, id: StateId) -> Result<StateStats, DomainError>;
}
