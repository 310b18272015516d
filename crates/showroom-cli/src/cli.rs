//! CLI definition using clap

use clap::{Parser, Subcommand};
use showroom_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showroom")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Browse and search the dealership vehicle catalog")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog file (TOML or JSON). Uses config value, then the built-in inventory.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every vehicle
    List,

    /// Show one vehicle with its related vehicles
    Show {
        /// Vehicle id or detail path (e.g., "bmw-x5-m50i", "/vehicles/bmw-x5-m50i")
        vehicle: String,

        /// Image to select (wraps around the image count)
        #[arg(long, default_value_t = 0)]
        image: usize,
    },

    /// Search by text and facets
    Search {
        /// Text matched against brand, model, color and year
        #[arg(default_value = "")]
        query: String,

        /// Category (e.g., sedan, suv, coupe)
        #[arg(long)]
        category: Option<String>,

        /// Fuel type (e.g., electric, gasoline, diesel, hybrid)
        #[arg(long)]
        fuel: Option<String>,

        /// Status (new, used)
        #[arg(long)]
        status: Option<String>,

        /// Price range key: "MIN-MAX" (inclusive) or "MIN" (no upper bound)
        #[arg(long)]
        price: Option<String>,
    },

    /// Vehicles related to a given vehicle
    Related {
        /// Vehicle id
        id: String,

        /// Number of vehicles. Uses config value if not specified.
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Featured strip for the home page
    Featured {
        /// Number of vehicles. Uses config value if not specified.
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Filter values available in the catalog
    Facets,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set catalog file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Go back to the built-in inventory
        #[arg(long)]
        clear_catalog: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set number of related vehicles
        #[arg(long)]
        set_related_limit: Option<usize>,

        /// Set number of featured vehicles
        #[arg(long)]
        set_featured_limit: Option<usize>,
    },
}
