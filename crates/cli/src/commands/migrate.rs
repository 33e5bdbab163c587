//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! warden migrate
//! ```
//!
//! # Environment Variables
//!
//! - `WARDEN_DATABASE_URL` - `PostgreSQL` connection string
//!
//! # Migration Files
//!
//! Migrations live in `crates/admin/migrations/` and are embedded at
//! compile time.

use super::{CliError, connect};

/// Run admin database migrations.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), CliError> {
    let (_, pool) = connect().await?;

    tracing::info!("Running admin migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Admin migrations complete!");
    Ok(())
}
