//! Command-line interface for the tic-tac-toe server.

use clap::{Parser, Subcommand};

/// Tic-tac-toe REST server
#[derive(Parser, Debug)]
#[command(name = "tictactoe_server")]
#[command(about = "Tic-tac-toe REST API against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// SQLite database path (overrides config and DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Keep games in memory instead of the database
        #[arg(long)]
        in_memory: bool,
    },

    /// Apply pending database migrations and exit
    Migrate,
}
