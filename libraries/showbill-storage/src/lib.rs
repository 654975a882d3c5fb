//! Showbill Storage
//!
//! `SQLite` database layer for the Showbill booking directory.
//!
//! This crate provides persistent storage for venues, artists, and shows,
//! together with the derived past/upcoming show views the directory pages
//! are built from.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each entity owns its own queries and logic
//! - **Derived Views**: Past/upcoming classification is computed against
//!   "now" at query time, never stored
//! - **Explicit Handles**: The pool and the clock are arguments, not globals
//!
//! # Example
//!
//! ```rust,no_run
//! use showbill_storage::{LocalStorageContext, create_pool, run_migrations};
//! use showbill_core::storage::StorageContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://showbill.db").await?;
//! run_migrations(&pool).await?;
//!
//! // Create storage context
//! let storage = LocalStorageContext::new(pool);
//!
//! // Get all venues
//! let venues = storage.get_all_venues().await?;
//! # Ok(())
//! # }
//! ```

mod context;

// Vertical slices
pub mod artists;
pub mod shows;
pub mod venues;

pub use context::LocalStorageContext;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://showbill.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("creating pool for {}", database_url);

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
        .busy_timeout(std::time::Duration::from_secs(30)) // Wait up to 30s for locks
        .foreign_keys(true); // shows.venue_id/artist_id must stay valid

    // Create pool with the configured options
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("pool created");

    Ok(pool)
}
