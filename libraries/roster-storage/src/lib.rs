//! Roster Storage
//!
//! `SQLite` persistence layer for Roster user records.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: the `users` module owns its queries
//! - **Storage-Enforced Uniqueness**: the `email` unique index lives in the
//!   migrations, so concurrent writers cannot both claim one address
//! - **Single Round-Trip Writes**: updates and deletes use `RETURNING` so the
//!   affected row comes back from the same statement
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::{NewUser, UserStore};
//! use roster_storage::SqliteUserStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteUserStore::connect("sqlite://roster.db").await?;
//!
//! let user = store
//!     .create(NewUser::new("Pradeep Raj", "pradeep@example.com", "12345"))
//!     .await?;
//! assert_eq!(store.find_by_id(&user.id).await?, Some(user));
//! # Ok(())
//! # }
//! ```

mod context;

// Vertical slices
pub mod users;

pub use context::SqliteUserStore;

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
    MIGRATOR.run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://roster.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        // Concurrent writers wait for the lock instead of failing
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("SQLite pool created");

    Ok(pool)
}
