//! Repository trait definitions for catalog access

use showroom_types::Error;

use crate::catalog::Catalog;
use crate::model::Vehicle;

/// Read-only source of catalog snapshots
pub trait CatalogRepository {
    /// Current immutable snapshot
    fn snapshot(&self) -> Result<Catalog, Error>;

    /// Find all vehicles, in catalog order
    fn find_all(&self) -> Result<Vec<Vehicle>, Error> {
        Ok(self.snapshot()?.list_all().to_vec())
    }

    /// Find a vehicle by its id
    fn find_by_id(&self, id: &str) -> Result<Option<Vehicle>, Error> {
        Ok(self.snapshot()?.get_by_id(id).cloned())
    }
}

impl CatalogRepository for Catalog {
    fn snapshot(&self) -> Result<Catalog, Error> {
        Ok(self.clone())
    }
}
