//! Values offered by the listing filter panel

use serde::Serialize;

use crate::model::{PricePreset, PriceRange, Vehicle};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub fuel_types: Vec<String>,
    pub statuses: Vec<String>,
    pub price_presets: Vec<PricePreset>,
}

fn push_distinct(values: &mut Vec<String>, value: &str) {
    let value = value.trim().to_lowercase();
    if !values.contains(&value) {
        values.push(value);
    }
}

impl FacetOptions {
    /// Distinct trimmed, lowercase facet values in first-seen order
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Self {
        let mut categories = Vec::new();
        let mut fuel_types = Vec::new();
        let mut statuses = Vec::new();
        for v in vehicles {
            push_distinct(&mut categories, &v.category);
            push_distinct(&mut fuel_types, &v.fuel_type);
            push_distinct(&mut statuses, &v.status);
        }
        Self {
            categories,
            fuel_types,
            statuses,
            price_presets: PriceRange::presets(),
        }
    }
}
