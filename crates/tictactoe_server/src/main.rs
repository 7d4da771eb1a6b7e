//! Tic-tac-toe server binary.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_server::{GameRepository, GameStore, InMemoryGameStore, ServerConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_server=debug")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Serve {
            port,
            host,
            in_memory,
        } => {
            let config = config.with_overrides(host, port, None);
            run_server(config, in_memory).await
        }
        Command::Migrate => run_migrations(&config),
    }
}

/// Resolves configuration: file, then environment, then global flags.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<ServerConfig> {
    let config = match &cli.config {
        Some(path) => ServerConfig::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            ServerConfig::default()
        }
    };

    let config = config
        .apply_env()?
        .with_overrides(None, None, cli.database_url.clone());
    Ok(config)
}

/// Applies pending migrations to the configured database.
#[instrument(skip(config), fields(database_url = %config.database_url()))]
fn run_migrations(config: &ServerConfig) -> Result<()> {
    let repo = GameRepository::new(config.database_url().clone())?;
    let applied = repo.run_migrations()?;
    info!(applied, "Migrations complete");
    Ok(())
}

/// Runs the HTTP server against the configured store.
#[instrument(skip(config))]
async fn run_server(config: ServerConfig, in_memory: bool) -> Result<()> {
    let store: Arc<dyn GameStore> = if in_memory {
        info!("Keeping games in memory");
        Arc::new(InMemoryGameStore::new())
    } else {
        let repo = GameRepository::new(config.database_url().clone())?;
        repo.run_migrations()?;
        info!(database_url = %config.database_url(), "Database ready");
        Arc::new(repo)
    };

    tictactoe_server::serve(&config, store).await
}
