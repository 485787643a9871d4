//! CLI command implementations.

pub mod catalogue;
pub mod config;
pub mod contact;
pub mod fit;
pub mod product;

use clap::{Args, Subcommand};
use muse_catalog::prelude::SortDirection;

/// Arguments for the catalogue command.
#[derive(Args, Default)]
pub struct CatalogueArgs {
    /// Only products whose name contains this text (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only products offered in this color. Repeat for any of several.
    #[arg(long = "color")]
    pub colors: Vec<String>,

    /// Only products with this size tag. Repeat for any of several.
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Minimum price in Rupiah.
    #[arg(long)]
    pub min: Option<u64>,

    /// Maximum price in Rupiah.
    #[arg(long)]
    pub max: Option<u64>,

    /// Sort by price (asc, desc, low-to-high, high-to-low).
    #[arg(long, value_name = "DIR")]
    pub sort_price: Option<SortDirection>,

    /// Sort by units sold. Ignored when --sort-price is given.
    #[arg(long, value_name = "DIR")]
    pub sort_popularity: Option<SortDirection>,

    /// List the available colors, sizes, and price range instead of products.
    #[arg(long)]
    pub facets: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product slug.
    pub slug: String,

    /// Skip the reviews section.
    #[arg(long)]
    pub no_reviews: bool,
}

/// Arguments for the fit command.
#[derive(Args)]
pub struct FitArgs {
    /// Height in cm.
    #[arg(long)]
    pub height: String,

    /// Weight in kg.
    #[arg(long)]
    pub weight: String,

    /// Slug of the product being checked.
    #[arg(short, long)]
    pub product: Option<String>,

    /// Show the reference model photos.
    #[arg(long)]
    pub models: bool,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// First name (prompted for when omitted).
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name (prompted for when omitted).
    #[arg(long)]
    pub last_name: Option<String>,

    /// Reply-to email address (prompted for when omitted).
    #[arg(long)]
    pub email: Option<String>,

    /// Message body (prompted for when omitted).
    #[arg(short, long)]
    pub message: Option<String>,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the subscribe command.
#[derive(Args)]
pub struct SubscribeArgs {
    /// Email address to subscribe.
    pub email: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration, secrets masked.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
