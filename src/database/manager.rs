use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{Executor, SqlitePool};
use thiserror::Error;
use tracing::info;

/// Embedded table definitions, executed at startup.
const SCHEMA: &str = include_str!("schema.sql");

/// Errors surfaced by the data-access layer.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("profile row is missing")]
    MissingProfile,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open the SQLite pool for the given connection URL.
///
/// Foreign-key enforcement is off by default in SQLite and the skill-delete
/// guard depends on it, so it is switched on for every connection here.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!("opened database pool for {}", url);
    Ok(pool)
}

/// Create any missing tables. Safe to run on every startup.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DatabaseError> {
    pool.execute(SCHEMA).await?;
    Ok(())
}

/// Pings the store to confirm connectivity.
pub async fn health_check(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// True when the error is a UNIQUE constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// True when the error is a FOREIGN KEY constraint violation.
pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
