//! `PostgreSQL` admin record repository.
//!
//! Queries are checked at runtime; the schema lives in
//! `crates/admin/migrations/`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use warden_core::{AdminIdentity, AdminRole};

use super::{AdminStore, RepositoryError};
use crate::models::{AdminChanges, AdminRecord, NewAdmin};

const ADMIN_COLUMNS: &str = "identity, display_name, role, can_add_admin, can_delete_content, \
                             created_by, created_at, updated_at";

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` admin queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    identity: String,
    display_name: Option<String>,
    role: AdminRole,
    can_add_admin: bool,
    can_delete_content: bool,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for AdminRecord {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let identity = AdminIdentity::parse(&row.identity).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid identity in database: {e}"))
        })?;
        let created_by = AdminIdentity::parse(&row.created_by).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid created_by in database: {e}"))
        })?;

        Ok(Self {
            identity,
            display_name: row.display_name,
            role: row.role,
            can_add_admin: row.can_add_admin,
            can_delete_content: row.can_delete_content,
            created_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for admin record database operations.
#[derive(Debug, Clone, Copy)]
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

impl AdminStore for AdminRepository<'_> {
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    async fn find_by_identity(
        &self,
        identity: &AdminIdentity,
    ) -> Result<Option<AdminRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM warden.admin WHERE identity = $1"
        ))
        .bind(identity)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_role(
        &self,
        identity: &AdminIdentity,
    ) -> Result<Option<AdminRole>, RepositoryError> {
        let role = sqlx::query_scalar::<_, AdminRole>(
            "SELECT role FROM warden.admin WHERE identity = $1",
        )
        .bind(identity)
        .fetch_optional(self.pool)
        .await?;

        Ok(role)
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the identity already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    async fn create(&self, admin: &NewAdmin) -> Result<AdminRecord, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            r"
            INSERT INTO warden.admin
                (identity, display_name, role, can_add_admin, can_delete_content, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {ADMIN_COLUMNS}
            "
        ))
        .bind(&admin.identity)
        .bind(admin.display_name.as_deref())
        .bind(admin.role)
        .bind(admin.flags.can_add_admin)
        .bind(admin.flags.can_delete_content)
        .bind(&admin.created_by)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("identity already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.try_into()
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has this identity.
    /// Returns `RepositoryError::Database` for other database errors.
    async fn update(
        &self,
        identity: &AdminIdentity,
        changes: &AdminChanges,
    ) -> Result<AdminRecord, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            r"
            UPDATE warden.admin
            SET display_name = COALESCE($2, display_name),
                role = $3,
                can_add_admin = $4,
                can_delete_content = $5,
                updated_at = clock_timestamp()
            WHERE identity = $1
            RETURNING {ADMIN_COLUMNS}
            "
        ))
        .bind(identity)
        .bind(changes.display_name.as_deref())
        .bind(changes.role)
        .bind(changes.flags.can_add_admin)
        .bind(changes.flags.can_delete_content)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no record has this identity.
    /// Returns `RepositoryError::Database` for other database errors.
    async fn delete(&self, identity: &AdminIdentity) -> Result<AdminRecord, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(&format!(
            "DELETE FROM warden.admin WHERE identity = $1 RETURNING {ADMIN_COLUMNS}"
        ))
        .bind(identity)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        row.try_into()
    }

    async fn list_all(&self) -> Result<Vec<AdminRecord>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminRow>(&format!(
            "SELECT {ADMIN_COLUMNS} FROM warden.admin ORDER BY created_at DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
