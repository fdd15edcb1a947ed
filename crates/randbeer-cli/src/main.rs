use std::sync::Arc;

use clap::{Parser, Subcommand};
use randbeer_catalog::CatalogClient;
use randbeer_cli::session;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "randbeer")]
#[command(about = "Show a random beer from the brewery catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse random beers interactively (n = new beer, b = brewery, r = retry, q = quit)
    Browse,
    /// Fetch a single random beer, print it and exit
    Show {
        /// Show the beer's brewery instead of the beer
        #[arg(long)]
        brewery: bool,

        /// Print the normalized record as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = randbeer_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let client = CatalogClient::new(
        config.catalog_url.as_str(),
        config.api_key.as_deref(),
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => session::run_interactive(Arc::new(client)).await,
        Commands::Show { brewery, json } => session::run_show(&client, brewery, json).await,
    }
}

#[cfg(test)]
mod tests;
