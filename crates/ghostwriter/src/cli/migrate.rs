//! Migration command handler.

use ghostwriter_database::{create_pool, run_migrations};
use ghostwriter_server::GhostwriterConfig;
use std::path::PathBuf;

/// Handle the `migrate` command.
pub async fn handle_migrate_command(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = GhostwriterConfig::load(config_path.as_deref())?;

    let pool = create_pool(
        config.database().url(),
        *config.database().max_connections(),
    )?;
    run_migrations(&pool)?;

    tracing::info!("Migrations applied");
    Ok(())
}
