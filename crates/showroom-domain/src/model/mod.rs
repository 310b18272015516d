//! Domain model types

pub mod filter;
pub mod vehicle;

pub use filter::{PricePreset, PriceRange, SearchFilters};
pub use vehicle::{format_price, Vehicle, VehicleRecord};
