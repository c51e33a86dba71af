//! State domain
//!
//! States are read-only reference rows; their case statistics are derived
//! from the districts that belong to them.

mod entity;
mod repository;

pub use entity::{State, StateId, StateStats};
pub use repository::StateRepository;
