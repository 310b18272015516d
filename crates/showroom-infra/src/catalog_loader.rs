//! Catalog loading from TOML or JSON files
//!
//! TOML files hold a `[[vehicles]]` array. JSON files hold either a bare
//! array of records or an object with a `vehicles` array, using the
//! camelCase keys of the web data files.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use showroom_domain::{Catalog, VehicleRecord};
use showroom_types::{Error, Result};
use tracing::info;

/// Container for parsing catalog files
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    vehicles: Vec<VehicleRecord>,
}

/// On-disk catalog format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => Ok(CatalogFormat::Toml),
            Some("json") => Ok(CatalogFormat::Json),
            _ => Err(Error::CatalogLoad(format!(
                "Unsupported catalog file extension: {}",
                path.display()
            ))),
        }
    }
}

/// Load and validate a catalog file
pub fn load_from_file(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let format = CatalogFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let catalog = load_from_str(&content, format)?;
    info!(path = %path.display(), vehicles = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// A top-level array is a bare record list, anything else is parsed as
/// the `{"vehicles": [...]}` container so serde reports the real error.
fn parse_json_records(content: &str) -> serde_json::Result<Vec<VehicleRecord>> {
    if content.trim_start().starts_with('[') {
        serde_json::from_str(content)
    } else {
        let file: CatalogFile = serde_json::from_str(content)?;
        Ok(file.vehicles)
    }
}

/// Parse and validate catalog content
pub fn load_from_str(content: &str, format: CatalogFormat) -> Result<Catalog> {
    let records = match format {
        CatalogFormat::Toml => {
            let file: CatalogFile = toml::from_str(content).map_err(|e| {
                Error::CatalogLoad(format!("Failed to parse catalog TOML: {}", e))
            })?;
            file.vehicles
        }
        CatalogFormat::Json => parse_json_records(content).map_err(|e| {
            Error::CatalogLoad(format!("Failed to parse catalog JSON: {}", e))
        })?,
    };

    Ok(Catalog::from_records(records)?)
}
