//! Record store for admin records.
//!
//! # Database: `warden` schema
//!
//! ## Tables
//!
//! - `admin` - One row per administrator, keyed by external identity
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p warden-cli -- migrate
//! ```
//!
//! # Stores
//!
//! - [`AdminRepository`] - `PostgreSQL`-backed store
//! - [`MemoryAdminStore`] - In-process store for tests

pub mod admins;
pub mod memory;

use std::future::Future;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use warden_core::{AdminIdentity, AdminRole};

use crate::models::{AdminChanges, AdminRecord, NewAdmin};

pub use admins::AdminRepository;
pub use memory::MemoryAdminStore;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate identity).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Keyed storage of admin records.
///
/// Implementations must report a duplicate identity on [`AdminStore::create`]
/// as [`RepositoryError::Conflict`], and a missing identity on
/// [`AdminStore::update`] / [`AdminStore::delete`] as
/// [`RepositoryError::NotFound`]. Lookups report absence as `Ok(None)`.
pub trait AdminStore: Send + Sync {
    /// Point lookup by identity.
    fn find_by_identity(
        &self,
        identity: &AdminIdentity,
    ) -> impl Future<Output = Result<Option<AdminRecord>, RepositoryError>> + Send;

    /// Point lookup projecting only the role.
    fn find_role(
        &self,
        identity: &AdminIdentity,
    ) -> impl Future<Output = Result<Option<AdminRole>, RepositoryError>> + Send;

    /// Insert a new record.
    fn create(
        &self,
        admin: &NewAdmin,
    ) -> impl Future<Output = Result<AdminRecord, RepositoryError>> + Send;

    /// Apply `changes` to an existing record.
    fn update(
        &self,
        identity: &AdminIdentity,
        changes: &AdminChanges,
    ) -> impl Future<Output = Result<AdminRecord, RepositoryError>> + Send;

    /// Remove a record, returning its prior state.
    fn delete(
        &self,
        identity: &AdminIdentity,
    ) -> impl Future<Output = Result<AdminRecord, RepositoryError>> + Send;

    /// All records, most recently created first.
    fn list_all(&self) -> impl Future<Output = Result<Vec<AdminRecord>, RepositoryError>> + Send;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(
    database_url: &secrecy::SecretString,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
