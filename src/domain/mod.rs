//! Domain layer - entities and repository traits

pub mod district;
pub mod error;
pub mod state;
pub mod user;

pub use error::DomainError;
