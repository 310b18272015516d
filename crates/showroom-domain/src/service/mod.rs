//! Domain services

pub mod carousel;
pub mod facets;
pub mod related;
pub mod search;

pub use carousel::ImageCarousel;
pub use facets::FacetOptions;
pub use related::{
    featured_vehicles, related_vehicles, VehicleSummary, DEFAULT_FEATURED_LIMIT,
    DEFAULT_RELATED_LIMIT,
};
pub use search::search;
