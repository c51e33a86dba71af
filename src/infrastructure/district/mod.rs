//! District infrastructure module

mod sqlite_repository;

pub use sqlite_repository::SqliteDistrictRepository;
