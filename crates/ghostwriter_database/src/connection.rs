//! Connection pool construction and embedded migrations.
//!
//! The pool is built once at process start from configuration and injected
//! into the stores; no module-level connection state exists.

use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use ghostwriter_error::{DatabaseError, DatabaseErrorKind};
use tracing::instrument;

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Shared PostgreSQL connection pool.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// One checked-out pool connection.
pub type PgPooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Create a bounded connection pool for the given database URL.
///
/// # Errors
///
/// Returns an error if pool construction fails (bad URL, unreachable
/// server).
#[instrument(name = "database.create_pool", skip(database_url))]
pub fn create_pool(database_url: &str, max_size: u32) -> Result<PgPool, DatabaseError> {
    tracing::debug!(max_size, "Creating PostgreSQL connection pool");
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    Pool::builder().max_size(max_size).build(manager).map_err(|e| {
        tracing::error!(error = %e, "Failed to create connection pool");
        DatabaseError::new(DatabaseErrorKind::Connection(e.to_string()))
    })
}

/// Run all pending embedded migrations.
///
/// # Errors
///
/// Returns an error if a connection cannot be checked out or a migration
/// fails to apply.
#[instrument(name = "database.run_migrations", skip(pool))]
pub fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    let mut conn = checkout(pool)?;
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
        tracing::error!(error = %e, "Migration failed");
        DatabaseError::new(DatabaseErrorKind::Migration(e.to_string()))
    })?;
    tracing::info!(count = applied.len(), "Applied pending migrations");
    Ok(())
}

/// Check a connection out of the pool.
pub(crate) fn checkout(pool: &PgPool) -> Result<PgPooledConnection, DatabaseError> {
    pool.get().map_err(|e| {
        tracing::error!(error = %e, "Failed to check out pooled connection");
        DatabaseError::new(DatabaseErrorKind::Connection(e.to_string()))
    })
}
