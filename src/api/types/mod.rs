//! Shared API types

pub mod error;
pub mod json;

pub use error::{ApiError, INTERNAL_ERROR, INVALID_JWT_TOKEN};
pub use json::Json;
