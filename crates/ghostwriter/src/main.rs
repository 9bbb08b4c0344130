//! Ghostwriter binary entry point.

mod cli;

use clap::Parser;
use cli::{Cli, Commands, handle_migrate_command, handle_serve_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { config } => handle_serve_command(config).await,
        Commands::Migrate { config } => handle_migrate_command(config).await,
    }
}
