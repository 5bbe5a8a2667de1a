//! Price-Scout main entry point
//!
//! This is the command-line interface that starts the Price-Scout JSON API.

use anyhow::Context;
use clap::Parser;
use price_scout::config::{load_config_with_hash, Config};
use price_scout::server::{serve, AppState};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Price-Scout: price comparison with link verification
///
/// Serves a small JSON API that builds retailer listings for a product
/// query, verifies each retailer is reachable, and reports the best deal.
#[derive(Parser, Debug)]
#[command(name = "price-scout")]
#[command(version = "1.0.0")]
#[command(about = "Price comparison API with link verification", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults if omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the config file
    #[arg(short, long)]
    port: Option<u16>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show the effective settings without serving
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match load(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {:#}", e);
            return Err(e);
        }
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_serve(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("price_scout=info,warn"),
            1 => EnvFilter::new("price_scout=debug,info"),
            2 => EnvFilter::new("price_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if one was given, otherwise the defaults
fn load(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles the --dry-run mode: shows the effective settings
fn handle_dry_run(config: &Config) {
    println!("=== Price-Scout Dry Run ===\n");

    println!("Server:");
    println!("  Bind: {}:{}", config.server.host, config.server.port);

    println!("\nVerifier:");
    println!("  Timeout: {}s", config.verifier.timeout_secs);
    println!("  Max redirects: {}", config.verifier.max_redirects);
    println!("  User agent: {}", config.verifier.user_agent);

    println!("\nPricing:");
    println!(
        "  {} + index * {} - index * {} ({})",
        config.pricing.base_price,
        config.pricing.step_up,
        config.pricing.step_down,
        config.pricing.currency
    );

    println!("\nRetailers ({}):", config.retailers.len());
    for (index, retailer) in config.retailers.iter().enumerate() {
        println!(
            "  {}. {} - {}{}",
            index, retailer.name, retailer.base_url, retailer.search_path
        );
    }

    println!("\n✓ Configuration is valid");
}

/// Builds the shared state and serves the API
async fn handle_serve(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Verifier timeout: {}s, retailers: {}",
        config.verifier.timeout_secs,
        config.retailers.len()
    );

    let state = AppState::from_config(&config).context("building HTTP client")?;

    match serve(&config.server, state).await {
        Ok(()) => Ok(()),
        Err(e) => {
            tracing::error!("Server failed: {}", e);
            Err(e.into())
        }
    }
}
