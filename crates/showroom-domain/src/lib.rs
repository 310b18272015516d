//! Showroom domain: vehicle model, catalog snapshot, search and repository traits

pub mod catalog;
pub mod model;
pub mod repository;
pub mod route;
pub mod service;

#[cfg(test)]
mod fixtures;

pub use catalog::Catalog;
pub use model::{PricePreset, PriceRange, SearchFilters, Vehicle, VehicleRecord};
pub use repository::CatalogRepository;
