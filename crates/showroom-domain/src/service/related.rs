//! Related vehicles on the detail page and the featured strip on the home page

use serde::Serialize;

use crate::model::Vehicle;

/// Related vehicles shown under a detail page
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Vehicles in the home page featured strip
pub const DEFAULT_FEATURED_LIMIT: usize = 5;

/// Other vehicles to show next to `current_id`.
///
/// Catalog order, current vehicle excluded, first `limit` taken. No ranking.
pub fn related_vehicles<'a>(vehicles: &'a [Vehicle], current_id: &str, limit: usize) -> Vec<&'a Vehicle> {
    vehicles
        .iter()
        .filter(|v| v.id != current_id)
        .take(limit)
        .collect()
}

/// Card data for the featured strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleSummary {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub primary_image: Option<String>,
    pub link: String,
}

impl From<&Vehicle> for VehicleSummary {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id.clone(),
            brand: vehicle.brand.clone(),
            model: vehicle.model.clone(),
            primary_image: vehicle.primary_image().map(str::to_string),
            link: vehicle.path(),
        }
    }
}

pub fn featured_vehicles(vehicles: &[Vehicle], limit: usize) -> Vec<VehicleSummary> {
    vehicles.iter().take(limit).map(VehicleSummary::from).collect()
}
