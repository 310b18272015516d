//! Repository adapters for the catalog

use std::path::PathBuf;

use showroom_domain::Catalog;
use showroom_domain::CatalogRepository;
use showroom_infra::builtin_catalog;
use showroom_infra::persistence::FileCatalogRepository;
use showroom_types::Result;

use crate::config::Config;

/// Open file-based catalog repository
pub fn open_catalog_repo(path: PathBuf) -> Result<FileCatalogRepository> {
    FileCatalogRepository::open(path)
}

/// Snapshot of the configured catalog: the configured file, else the built-in inventory
pub fn open_catalog(config: &Config) -> Result<Catalog> {
    match config.catalog_path {
        Some(ref path) => open_catalog_repo(path.clone())?.snapshot(),
        None => builtin_catalog(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_opens_builtin() {
        let catalog = open_catalog(&Config::default()).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            catalog_path: Some(dir.path().join("missing.toml")),
            ..Config::default()
        };
        assert!(open_catalog(&config).is_err());
    }
}
