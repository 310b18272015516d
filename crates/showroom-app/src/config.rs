//! Configuration management for the showroom catalog
//!
//! Config stored at: ~/.config/showroom/config.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use showroom_domain::service::{DEFAULT_FEATURED_LIMIT, DEFAULT_RELATED_LIMIT};
use showroom_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file (TOML or JSON). The built-in inventory is used when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Related vehicles shown on a detail page
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    /// Vehicles in the featured strip
    #[serde(default = "default_featured_limit")]
    pub featured_limit: usize,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

fn default_featured_limit() -> usize {
    DEFAULT_FEATURED_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            output_format: default_output_format(),
            related_limit: default_related_limit(),
            featured_limit: default_featured_limit(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("showroom");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or fall back to defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)).into())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Showroom Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Catalog:        {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Related limit:  {}", self.related_limit)?;
        writeln!(f, "Featured limit: {}", self.featured_limit)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.related_limit, 3);
        assert_eq!(config.featured_limit, 5);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str(r#"{"output_format": "json"}"#).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.related_limit, 3);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            catalog_path: Some(PathBuf::from("/srv/stock.toml")),
            output_format: OutputFormat::Json,
            related_limit: 4,
            featured_limit: 2,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration"));
    }
}
