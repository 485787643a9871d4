//! Muse CLI - Command line front end for the Muse storefront.
//!
//! Commands:
//! - `muse catalogue` - Search, filter and sort the product catalogue
//! - `muse product` - Show a product with its reviews
//! - `muse fit` - Check measurements against the All Size fit guide
//! - `muse contact` - Send a message through the contact form
//! - `muse subscribe` - Sign up for the newsletter
//! - `muse config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CatalogueArgs, ConfigArgs, ContactArgs, FitArgs, ProductArgs, SubscribeArgs};

/// Muse CLI - Browse the catalogue and check your fit
#[derive(Parser)]
#[command(name = "muse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, with optional search, filters and sorting
    #[command(alias = "catalog")]
    Catalogue(CatalogueArgs),

    /// Show product details and reviews
    Product(ProductArgs),

    /// Check whether All Size garments fit your measurements
    Fit(FitArgs),

    /// Send a message to the Muse team
    Contact(ContactArgs),

    /// Subscribe to the Muse newsletter
    Subscribe(SubscribeArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Catalogue(args) => commands::catalogue::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Fit(args) => commands::fit::run(args, &ctx).await,
        Commands::Contact(args) => commands::contact::run(args, &ctx).await,
        Commands::Subscribe(args) => commands::contact::subscribe(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
