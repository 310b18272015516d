//! File-based implementation of CatalogRepository

use std::path::{Path, PathBuf};

use showroom_domain::{Catalog, CatalogRepository};
use showroom_types::Error;
use tracing::info;

use crate::catalog_loader;

/// Catalog repository backed by a TOML or JSON file
pub struct FileCatalogRepository {
    path: PathBuf,
    catalog: Catalog,
}

impl FileCatalogRepository {
    /// Load the catalog file once
    pub fn open(path: PathBuf) -> Result<Self, Error> {
        let catalog = catalog_loader::load_from_file(&path)?;
        Ok(Self { path, catalog })
    }

    /// Get the catalog file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file and swap in a new snapshot.
    ///
    /// Snapshots handed out earlier keep their data. On error the current
    /// snapshot is kept.
    pub fn reload(&mut self) -> Result<(), Error> {
        self.catalog = catalog_loader::load_from_file(&self.path)?;
        info!(path = %self.path.display(), vehicles = self.catalog.len(), "catalog reloaded");
        Ok(())
    }
}

impl CatalogRepository for FileCatalogRepository {
    fn snapshot(&self) -> Result<Catalog, Error> {
        Ok(self.catalog.clone())
    }
}
