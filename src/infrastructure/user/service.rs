//! User service for login

use std::sync::Arc;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

use super::password::PasswordHasher;

/// Result of checking a username and password
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    Authenticated(User),
    UnknownUser,
    WrongPassword,
}

/// User service for authentication
#[derive(Debug)]
pub struct UserService<R: UserRepository, H: PasswordHasher> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: PasswordHasher> UserService<R, H> {
    pub fn new(repository: Arc<R>, hasher: Arc<H>) -> Self {
        Self { repository, hasher }
    }

    /// Authenticate a user with username and password
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, DomainError> {
        let user = match self.repository.get_by_username(username).await? {
            Some(u) => u,
            None => return Ok(LoginOutcome::UnknownUser),
        };

        if !self.hasher.verify(password, user.password_hash())? {
            return Ok(LoginOutcome::WrongPassword);
        }

        Ok(LoginOutcome::Authenticated(user))
    }
}
