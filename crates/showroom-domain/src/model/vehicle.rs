//! Vehicle record type definitions

use chrono::{Datelike, Local};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use showroom_types::CatalogError;

use crate::route::vehicle_path;

/// First production automobile year; anything earlier is a data error
pub const EARLIEST_MODEL_YEAR: i64 = 1886;

/// A vehicle listed in the showroom catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// URL-safe slug (e.g., "hyundai-ioniq-6se")
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: u16,
    /// Price in whole dollars
    pub price: u64,
    /// Formatted price (e.g., "$45,000")
    pub price_display: String,
    /// sedan, suv, coupe, ...
    pub category: String,
    /// electric, gasoline, diesel, hybrid
    pub fuel_type: String,
    /// New or Used
    pub status: String,
    pub color: String,
    /// Display text only (e.g., "12,500 miles")
    pub mileage: String,
    /// Image references, first one is the primary thumbnail
    pub images: Vec<String>,
    /// Spec label to value, in display order
    pub specs: IndexMap<String, String>,
    pub features: Vec<String>,
    pub description: String,
}

impl Vehicle {
    /// Primary thumbnail, if the vehicle has any images
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// "Brand Model"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// Detail page path for this vehicle
    pub fn path(&self) -> String {
        vehicle_path(&self.id)
    }
}

/// Raw vehicle record as it appears in a catalog file.
///
/// Accepts both snake_case and the camelCase keys used by the web data files.
/// Convert with `Vehicle::try_from`, which validates every field.
#[derive(Debug, Clone, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub price: u64,
    #[serde(default, alias = "priceDisplay")]
    pub price_display: Option<String>,
    pub category: String,
    #[serde(alias = "fuelType")]
    pub fuel_type: String,
    pub status: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub mileage: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub specs: IndexMap<String, String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: String,
}

impl TryFrom<VehicleRecord> for Vehicle {
    type Error = CatalogError;

    fn try_from(record: VehicleRecord) -> Result<Self, Self::Error> {
        record.validate(Local::now().year() as i64)
    }
}

impl VehicleRecord {
    /// Validate against a given calendar year and build the typed vehicle
    pub fn validate(self, current_year: i64) -> Result<Vehicle, CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidRecord {
            id: self.id.clone(),
            reason,
        };

        if self.id.is_empty() {
            return Err(invalid("id is empty".to_string()));
        }
        if self.id.contains('/') || self.id.chars().any(char::is_whitespace) {
            return Err(invalid(
                "id must not contain '/' or whitespace".to_string(),
            ));
        }

        for (field, value) in [
            ("brand", &self.brand),
            ("model", &self.model),
            ("category", &self.category),
            ("fuel_type", &self.fuel_type),
            ("status", &self.status),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{} is empty", field)));
            }
        }

        let latest_year = current_year + 1;
        if !(EARLIEST_MODEL_YEAR..=latest_year).contains(&self.year) {
            return Err(invalid(format!(
                "year {} outside {}..={}",
                self.year, EARLIEST_MODEL_YEAR, latest_year
            )));
        }

        if let Some(pos) = self.images.iter().position(|i| i.trim().is_empty()) {
            return Err(invalid(format!("image #{} is empty", pos + 1)));
        }

        let price_display = match self.price_display {
            Some(ref display) if !display.trim().is_empty() => display.clone(),
            _ => format_price(self.price),
        };

        Ok(Vehicle {
            year: self.year as u16,
            price_display,
            id: self.id,
            brand: self.brand,
            model: self.model,
            price: self.price,
            category: self.category,
            fuel_type: self.fuel_type,
            status: self.status,
            color: self.color,
            mileage: self.mileage,
            images: self.images,
            specs: self.specs,
            features: self.features,
            description: self.description,
        })
    }
}

/// Format whole dollars with thousands separators: 45000 -> "$45,000"
pub fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
