//! User infrastructure module
//!
//! Password hashing with Argon2, the SQLite user lookup, and the login
//! service combining the two.

mod password;
mod service;
mod sqlite_repository;

pub use password::{Argon2Hasher, PasswordHasher};
pub use service::{LoginOutcome, UserService};
pub use sqlite_repository::SqliteUserRepository;
