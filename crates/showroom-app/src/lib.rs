//! Application service layer - config, repository wiring, catalog queries

pub mod app;
pub mod config;
pub mod repository;
