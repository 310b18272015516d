//! Built-in showroom inventory, embedded at compile time

use showroom_domain::Catalog;
use showroom_types::Result;
use tracing::debug;

use crate::catalog_loader::{load_from_str, CatalogFormat};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Parse the embedded inventory into a fresh snapshot
pub fn builtin_catalog() -> Result<Catalog> {
    let catalog = load_from_str(BUILTIN_CATALOG, CatalogFormat::Toml)?;
    debug!(vehicles = catalog.len(), "built-in catalog loaded");
    Ok(catalog)
}
