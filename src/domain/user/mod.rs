//! User domain
//!
//! Users are provisioned out of band and only read here, for login.

mod entity;
mod repository;

pub use entity::User;
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::mock::MockUserRepository;
