//! Application Layer
//!
//! This module provides the application layer that sits between the CLI
//! and the domain/infrastructure layers.
//!
//! - `query_service`: catalog queries for the listing, detail and home views

pub mod query_service;

// Re-export main types for convenience
pub use query_service::{
    build_filters, facet_options, featured_vehicles, get_vehicle, list_vehicles,
    related_vehicles, search_vehicles, vehicle_detail, QueryServiceError, VehicleDetail,
};
