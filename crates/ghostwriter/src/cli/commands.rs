//! Clap command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ghostwriter content generation and personalization service.
#[derive(Debug, Parser)]
#[command(name = "ghostwriter", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP service
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Apply pending database migrations and exit
    Migrate {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
