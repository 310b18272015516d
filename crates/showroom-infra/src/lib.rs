//! Infrastructure layer - catalog loaders, built-in dataset, file repositories

pub mod builtin;
pub mod catalog_loader;
pub mod persistence;

pub use builtin::builtin_catalog;
