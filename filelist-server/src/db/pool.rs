//! Database connection pool management
//!
//! Uses sqlx SqlitePool with explicit connection limits.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

/// Default maximum connections for the pool.
/// Kept low: SQLite serializes writers anyway.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a SQLite connection pool for a database file.
///
/// The file is created if missing.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("./files.db").await?;
/// ```
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a SQLite connection pool with custom options.
///
/// # Arguments
///
/// * `path` - Database file path
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    path: impl AsRef<Path>,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT)
        .synchronous(SqliteSynchronous::Normal);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create a pool over a private in-memory database.
///
/// Every SQLite connection to `:memory:` opens its own database, so the pool
/// holds exactly one connection and never recycles it.
pub async fn create_memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}
