//! Application state for shared services

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::domain::district::DistrictRepository;
use crate::domain::state::StateRepository;
use crate::domain::user::UserRepository;
use crate::domain::DomainError;
use crate::infrastructure::auth::TokenService;
use crate::infrastructure::district::SqliteDistrictRepository;
use crate::infrastructure::state::SqliteStateRepository;
use crate::infrastructure::user::{
    Argon2Hasher, LoginOutcome, PasswordHasher, SqliteUserRepository, UserService,
};

/// Application state containing shared services using dynamic dispatch
///
/// Every repository holds a handle to the same store connection.
#[derive(Clone)]
pub struct AppState {
    pub state_repository: Arc<dyn StateRepository>,
    pub district_repository: Arc<dyn DistrictRepository>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub token_service: Arc<dyn TokenService>,
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn authenticate(&self, username: &str, password: &str)
        -> Result<LoginOutcome, DomainError>;
}

#[async_trait::async_trait]
impl<R, H> UserServiceTrait for UserService<R, H>
where
    R: UserRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, DomainError> {
        UserService::authenticate(self, username, password).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        state_repository: Arc<dyn StateRepository>,
        district_repository: Arc<dyn DistrictRepository>,
        user_service: Arc<dyn UserServiceTrait>,
        token_service: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            state_repository,
            district_repository,
            user_service,
            token_service,
        }
    }

    /// Wire the SQLite repositories around one store handle
    pub fn with_sqlite(pool: SqlitePool, token_service: Arc<dyn TokenService>) -> Self {
        let user_service = UserService::new(
            Arc::new(SqliteUserRepository::new(pool.clone())),
            Arc::new(Argon2Hasher::new()),
        );

        Self::new(
            Arc::new(SqliteStateRepository::new(pool.clone())),
            Arc::new(SqliteDistrictRepository::new(pool)),
            Arc::new(user_service),
            token_service,
        )
    }
}
