//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::User;
use crate::domain::DomainError;

/// Repository trait for user lookup
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by their username (for login)
    async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user repository for testing
    #[derive(Debug, Default)]
    pub struct MockUserRepository {
        users: Arc<RwLock<HashMap<String, User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn insert(&self, user: User) {
            self.users
                .write()
                .await
                .insert(user.username().to_string(), user);
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn get_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(self.users.read().await.get(username).cloned())
        }
    }
}
