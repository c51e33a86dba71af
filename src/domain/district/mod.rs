//! District domain

mod entity;
mod repository;

pub use entity::{District, DistrictFields, DistrictId};
pub use repository::DistrictRepository;
