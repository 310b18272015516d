//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{
    output_detail, output_facets, output_featured, output_not_found, output_search,
    output_vehicles,
};
use showroom_app::app::query_service::{self, QueryServiceError};
use showroom_app::config::Config;
use showroom_app::repository::open_catalog;
use showroom_domain::Catalog;
use showroom_types::{OutputFormat, Result};
use tracing::debug;

/// Load the configured catalog snapshot
fn load_catalog(config: &Config) -> Result<Catalog> {
    let catalog = open_catalog(config)?;
    debug!(vehicles = catalog.len(), "catalog ready");
    Ok(catalog)
}

pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    // Config edits must not persist a one-off --catalog override
    if !matches!(cli.command, Commands::Config { .. }) {
        if let Some(path) = cli.catalog {
            config.catalog_path = Some(path);
        }
    }

    match cli.command {
        Commands::List => {
            let catalog = load_catalog(&config)?;
            let vehicles = query_service::list_vehicles(&catalog)?;
            output_vehicles(output_format, &vehicles)
        }
        Commands::Show { vehicle, image } => {
            let catalog = load_catalog(&config)?;
            match query_service::vehicle_detail(&catalog, &vehicle, image, config.related_limit) {
                Ok(detail) => output_detail(output_format, &detail),
                Err(QueryServiceError::NotFound(id)) => {
                    output_not_found(&id);
                    Err(QueryServiceError::NotFound(id).into())
                }
                Err(e) => Err(e.into()),
            }
        }
        Commands::Search {
            query,
            category,
            fuel,
            status,
            price,
        } => {
            // Reject malformed filters before touching the catalog
            let filters = query_service::build_filters(
                category.as_deref(),
                fuel.as_deref(),
                status.as_deref(),
                price.as_deref(),
            )?;
            let catalog = load_catalog(&config)?;
            let vehicles = query_service::search_vehicles(&catalog, &query, &filters)?;
            output_search(output_format, &query, &filters, &vehicles)
        }
        Commands::Related { id, limit } => {
            let catalog = load_catalog(&config)?;
            query_service::get_vehicle(&catalog, &id)?;
            let limit = limit.unwrap_or(config.related_limit);
            let vehicles = query_service::related_vehicles(&catalog, &id, limit)?;
            output_vehicles(output_format, &vehicles)
        }
        Commands::Featured { limit } => {
            let catalog = load_catalog(&config)?;
            let limit = limit.unwrap_or(config.featured_limit);
            let featured = query_service::featured_vehicles(&catalog, limit)?;
            output_featured(output_format, &featured)
        }
        Commands::Facets => {
            let catalog = load_catalog(&config)?;
            let options = query_service::facet_options(&catalog)?;
            output_facets(output_format, &options)
        }
        Commands::Config {
            show,
            set_catalog,
            clear_catalog,
            set_output,
            set_related_limit,
            set_featured_limit,
        } => cmd_config(
            config,
            show,
            set_catalog,
            clear_catalog,
            set_output,
            set_related_limit,
            set_featured_limit,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_config(
    mut config: Config,
    show: bool,
    set_catalog: Option<std::path::PathBuf>,
    clear_catalog: bool,
    set_output: Option<OutputFormat>,
    set_related_limit: Option<usize>,
    set_featured_limit: Option<usize>,
) -> Result<()> {
    let mut modified = false;

    if let Some(path) = set_catalog {
        // Validate before saving so a broken path never lands in the config
        let repo = showroom_app::repository::open_catalog_repo(path)?;
        config.catalog_path = Some(repo.path().to_path_buf());
        modified = true;
    }

    if clear_catalog {
        config.catalog_path = None;
        modified = true;
    }

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if let Some(limit) = set_related_limit {
        config.related_limit = limit;
        modified = true;
    }

    if let Some(limit) = set_featured_limit {
        config.featured_limit = limit;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
