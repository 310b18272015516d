//! Error types for the showroom catalog

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Catalog lookup and construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No vehicle carries the requested id. Expected, never fatal.
    #[error("Vehicle not found: {0}")]
    NotFound(String),

    #[error("Duplicate vehicle id: {0}")]
    DuplicateId(String),

    #[error("Invalid vehicle record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },
}

/// Filter configuration errors, raised when the filters are built
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid price range: {0}")]
    InvalidPriceRange(String),

    #[error("Price range minimum {min} exceeds maximum {max}")]
    InvertedPriceRange { min: u64, max: u64 },

    #[error("Empty value for {0} filter")]
    EmptyFacet(&'static str),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Catalog load error: {0}")]
    CatalogLoad(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
