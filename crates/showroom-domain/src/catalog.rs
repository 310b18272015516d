//! Immutable catalog snapshot
//!
//! A `Catalog` is built once, then shared by cloning (the vehicle list and
//! the id index sit behind `Arc`). Nothing hands out mutable access.

use std::collections::HashMap;
use std::sync::Arc;

use showroom_types::CatalogError;
use tracing::debug;

use crate::model::{SearchFilters, Vehicle, VehicleRecord};
use crate::service::{related_vehicles, search};

#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: Arc<[Vehicle]>,
    index: Arc<HashMap<String, usize>>,
}

impl Catalog {
    /// Build a snapshot, rejecting empty and duplicate ids
    pub fn new(vehicles: Vec<Vehicle>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(vehicles.len());
        for (pos, vehicle) in vehicles.iter().enumerate() {
            if vehicle.id.is_empty() {
                return Err(CatalogError::InvalidRecord {
                    id: String::new(),
                    reason: format!("id is empty (position {})", pos + 1),
                });
            }
            if index.insert(vehicle.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(vehicle.id.clone()));
            }
        }
        debug!(vehicles = vehicles.len(), "catalog snapshot built");
        Ok(Self {
            vehicles: Arc::from(vehicles),
            index: Arc::new(index),
        })
    }

    /// Validate raw records and build a snapshot
    pub fn from_records(records: Vec<VehicleRecord>) -> Result<Self, CatalogError> {
        let vehicles = records
            .into_iter()
            .map(Vehicle::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(vehicles)
    }

    /// Every vehicle in catalog order
    pub fn list_all(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Exact, case-sensitive id lookup. An empty id never matches.
    pub fn get_by_id(&self, id: &str) -> Option<&Vehicle> {
        if id.is_empty() {
            return None;
        }
        self.index.get(id).map(|&pos| &self.vehicles[pos])
    }

    pub fn search(&self, query: &str, filters: &SearchFilters) -> Vec<&Vehicle> {
        search(&self.vehicles, query, filters)
    }

    pub fn related(&self, current_id: &str, limit: usize) -> Vec<&Vehicle> {
        related_vehicles(&self.vehicles, current_id, limit)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
