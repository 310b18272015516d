//! Query Service - Read-only access to the catalog
//!
//! This service backs the listing, detail and home views:
//! - Listing: all vehicles, filtered search, facet options
//! - Detail: lookup by id or path, related vehicles, image position
//! - Home: featured strip

use serde::Serialize;
use showroom_domain::route::parse_vehicle_path;
use showroom_domain::service::{self, FacetOptions, ImageCarousel, VehicleSummary};
use showroom_domain::{CatalogRepository, PriceRange, SearchFilters, Vehicle};
use showroom_types::{CatalogError, FilterError};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors specific to the query service
#[derive(Debug, Error)]
pub enum QueryServiceError {
    #[error("Store not accessible: {0}")]
    StoreError(String),

    #[error("Vehicle not found: {0}")]
    NotFound(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] FilterError),
}

impl From<showroom_types::Error> for QueryServiceError {
    fn from(err: showroom_types::Error) -> Self {
        QueryServiceError::StoreError(err.to_string())
    }
}

impl From<QueryServiceError> for showroom_types::Error {
    fn from(err: QueryServiceError) -> Self {
        match err {
            QueryServiceError::StoreError(msg) => showroom_types::Error::CatalogLoad(msg),
            QueryServiceError::NotFound(id) => CatalogError::NotFound(id).into(),
            QueryServiceError::InvalidFilter(e) => e.into(),
        }
    }
}

pub type QueryResult<T> = std::result::Result<T, QueryServiceError>;

/// Everything the detail view renders for one vehicle
#[derive(Debug, Clone, Serialize)]
pub struct VehicleDetail {
    pub vehicle: Vehicle,
    pub related: Vec<Vehicle>,
    pub image_index: usize,
    pub current_image: Option<String>,
    pub has_carousel_controls: bool,
}

// ============================================================================
// Filters
// ============================================================================

/// Build search filters from raw facet strings, failing on malformed values
pub fn build_filters(
    category: Option<&str>,
    fuel_type: Option<&str>,
    status: Option<&str>,
    price_range: Option<&str>,
) -> std::result::Result<SearchFilters, FilterError> {
    let mut filters = SearchFilters::new();
    if let Some(category) = category {
        filters = filters.with_category(category)?;
    }
    if let Some(fuel_type) = fuel_type {
        filters = filters.with_fuel_type(fuel_type)?;
    }
    if let Some(status) = status {
        filters = filters.with_status(status)?;
    }
    if let Some(range) = price_range {
        filters = filters.with_price_range(range.parse::<PriceRange>()?);
    }
    Ok(filters)
}

// ============================================================================
// Listing Queries
// ============================================================================

/// Get every vehicle in catalog order
pub fn list_vehicles<R: CatalogRepository + ?Sized>(repo: &R) -> QueryResult<Vec<Vehicle>> {
    Ok(repo.find_all()?)
}

/// Search by free text and facets, keeping catalog order
pub fn search_vehicles<R: CatalogRepository + ?Sized>(
    repo: &R,
    query: &str,
    filters: &SearchFilters,
) -> QueryResult<Vec<Vehicle>> {
    let catalog = repo.snapshot()?;
    Ok(catalog.search(query, filters).into_iter().cloned().collect())
}

/// Get facet values present in the catalog plus the price presets
pub fn facet_options<R: CatalogRepository + ?Sized>(repo: &R) -> QueryResult<FacetOptions> {
    let catalog = repo.snapshot()?;
    Ok(FacetOptions::from_vehicles(catalog.list_all()))
}

// ============================================================================
// Detail Queries
// ============================================================================

/// Get a vehicle by id (exact match)
pub fn get_vehicle<R: CatalogRepository + ?Sized>(repo: &R, id: &str) -> QueryResult<Vehicle> {
    match repo.find_by_id(id)? {
        Some(vehicle) => Ok(vehicle),
        None => {
            warn!(id, "vehicle not found");
            Err(QueryServiceError::NotFound(id.to_string()))
        }
    }
}

/// Get other vehicles to show next to `current_id`
pub fn related_vehicles<R: CatalogRepository + ?Sized>(
    repo: &R,
    current_id: &str,
    limit: usize,
) -> QueryResult<Vec<Vehicle>> {
    let catalog = repo.snapshot()?;
    Ok(catalog.related(current_id, limit).into_iter().cloned().collect())
}

/// Get the vehicle, its related vehicles and the selected image.
///
/// `reference` is either a bare id or a detail page path ("/vehicles/{id}").
pub fn vehicle_detail<R: CatalogRepository + ?Sized>(
    repo: &R,
    reference: &str,
    image: usize,
    related_limit: usize,
) -> QueryResult<VehicleDetail> {
    let id = parse_vehicle_path(reference).unwrap_or(reference);
    let catalog = repo.snapshot()?;
    let vehicle = match catalog.get_by_id(id) {
        Some(vehicle) => vehicle.clone(),
        None => {
            warn!(id, "vehicle not found");
            return Err(QueryServiceError::NotFound(id.to_string()));
        }
    };

    let mut carousel = ImageCarousel::new(vehicle.images.len());
    carousel.select(image);

    let related: Vec<Vehicle> = catalog
        .related(&vehicle.id, related_limit)
        .into_iter()
        .cloned()
        .collect();
    debug!(id, related = related.len(), image = carousel.index(), "vehicle detail");

    Ok(VehicleDetail {
        current_image: carousel.current(&vehicle.images).map(str::to_string),
        image_index: carousel.index(),
        has_carousel_controls: carousel.has_controls(),
        related,
        vehicle,
    })
}

// ============================================================================
// Home Queries
// ============================================================================

/// Get the featured strip
pub fn featured_vehicles<R: CatalogRepository + ?Sized>(
    repo: &R,
    limit: usize,
) -> QueryResult<Vec<VehicleSummary>> {
    let catalog = repo.snapshot()?;
    Ok(service::featured_vehicles(catalog.list_all(), limit))
}
