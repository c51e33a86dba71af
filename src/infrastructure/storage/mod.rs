//! Storage infrastructure - the shared SQLite store

mod sqlite;

#[cfg(test)]
pub mod fixtures;

pub use sqlite::{connect, SqliteConfig};
