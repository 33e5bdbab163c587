//! Admin identity and permission resolution.
//!
//! [`AdminService`] answers "is this identity an admin, with which role, and
//! may it do X" on top of any [`AdminStore`], and owns the upsert policy for
//! admin records.
//!
//! # Permission precedence
//!
//! 1. No record: denied.
//! 2. `superadmin`: allowed, whatever the action.
//! 3. `manager`: `MANAGE_FIELDS`, `MANAGE_CHANNELS`, `UPLOAD_CONTENT`, `DELETE_CONTENT`.
//! 4. Otherwise: `UPLOAD_CONTENT`.
//!
//! The `can_add_admin` / `can_delete_content` flags are stored by the upsert
//! path but are not consulted here.

mod error;

pub use error::AdminError;

use tracing::instrument;

use warden_core::{AdminIdentity, AdminRole};

use crate::db::{AdminStore, RepositoryError};
use crate::models::{AdminChanges, AdminInput, AdminRecord, NewAdmin};

/// Permission resolver and admin record manager.
///
/// Holds no state besides its store; every call is one store round trip
/// (two when an upsert falls back to update).
#[derive(Debug, Clone)]
pub struct AdminService<S> {
    store: S,
}

impl<S: AdminStore> AdminService<S> {
    /// Create a new admin service over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying record store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Whether any admin record exists for `identity`.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the store fails.
    #[instrument(skip_all, fields(identity = %identity))]
    pub async fn is_admin(&self, identity: &AdminIdentity) -> Result<bool, AdminError> {
        Ok(self.store.find_by_identity(identity).await?.is_some())
    }

    /// Whether `identity` is an admin with the `superadmin` role.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the store fails.
    #[instrument(skip_all, fields(identity = %identity))]
    pub async fn is_super_admin(&self, identity: &AdminIdentity) -> Result<bool, AdminError> {
        let admin = self.store.find_by_identity(identity).await?;
        Ok(admin.is_some_and(|a| a.role == AdminRole::SuperAdmin))
    }

    /// The role of `identity`, or `None` if it is not an admin.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the store fails.
    #[instrument(skip_all, fields(identity = %identity))]
    pub async fn get_role(&self, identity: &AdminIdentity) -> Result<Option<AdminRole>, AdminError> {
        Ok(self.store.find_role(identity).await?)
    }

    /// The full admin record, or `None` if it is not an admin.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the store fails.
    #[instrument(skip_all, fields(identity = %identity))]
    pub async fn get_admin_by_identity(
        &self,
        identity: &AdminIdentity,
    ) -> Result<Option<AdminRecord>, AdminError> {
        Ok(self.store.find_by_identity(identity).await?)
    }

    /// Whether `identity` may perform `action`.
    ///
    /// Unknown identities are denied. See the module docs for precedence.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the store fails.
    #[instrument(skip_all, fields(identity = %identity, action = %action))]
    pub async fn has_permission(
        &self,
        identity: &AdminIdentity,
        action: &str,
    ) -> Result<bool, AdminError> {
        let Some(admin) = self.store.find_by_identity(identity).await? else {
            tracing::debug!("permission denied: not an admin");
            return Ok(false);
        };

        let allowed = admin.allows(action);
        tracing::debug!(role = %admin.role, allowed, "permission resolved");
        Ok(allowed)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Create the admin record, or update it if the identity already exists.
    ///
    /// Role-implied flags are applied before anything is written:
    /// superadmins always get both flags, managers always get
    /// `can_delete_content`. The update path changes display name (when
    /// given), role and flags, and never touches `created_by`.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` for any store failure other than the
    /// duplicate-identity conflict, which is handled here.
    #[instrument(skip_all, fields(identity = %input.identity, role = %input.role))]
    pub async fn create_or_update_admin(
        &self,
        input: &AdminInput,
    ) -> Result<AdminRecord, AdminError> {
        match self.store.create(&NewAdmin::from(input)).await {
            Ok(admin) => {
                tracing::info!(created_by = %admin.created_by, "admin created");
                Ok(admin)
            }
            Err(RepositoryError::Conflict(_)) => {
                let admin = self
                    .store
                    .update(&input.identity, &AdminChanges::from(input))
                    .await?;
                tracing::info!("admin already existed, updated instead");
                Ok(admin)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to create admin");
                Err(e.into())
            }
        }
    }

    /// Remove the admin record for `identity`, returning its prior state.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::NotFound` if `identity` is not an admin.
    /// Returns `AdminError::Repository` for other store failures.
    #[instrument(skip_all, fields(identity = %identity))]
    pub async fn delete_admin(&self, identity: &AdminIdentity) -> Result<AdminRecord, AdminError> {
        match self.store.delete(identity).await {
            Ok(admin) => {
                tracing::info!(role = %admin.role, "admin deleted");
                Ok(admin)
            }
            Err(RepositoryError::NotFound) => Err(AdminError::NotFound(identity.clone())),
            Err(e) => Err(e.into()),
        }
    }

    /// Ensure every identity in `identities` is a superadmin.
    ///
    /// Each identity is upserted as its own creator. Already-registered
    /// identities are promoted; their `created_by` is kept.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first store failure.
    #[instrument(skip_all, fields(count = identities.len()))]
    pub async fn bootstrap_superadmins(
        &self,
        identities: &[AdminIdentity],
    ) -> Result<Vec<AdminRecord>, AdminError> {
        let mut admins = Vec::with_capacity(identities.len());
        for identity in identities {
            let input = AdminInput::new(identity.clone(), AdminRole::SuperAdmin, identity.clone());
            admins.push(self.create_or_update_admin(&input).await?);
        }
        Ok(admins)
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// All admins, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the store fails.
    #[instrument(skip(self))]
    pub async fn list_admins(&self) -> Result<Vec<AdminRecord>, AdminError> {
        Ok(self.store.list_all().await?)
    }

    /// Alias of [`Self::list_admins`].
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the store fails.
    pub async fn get_all_admins(&self) -> Result<Vec<AdminRecord>, AdminError> {
        self.list_admins().await
    }

    /// Alias of [`Self::list_admins`].
    ///
    /// # Errors
    ///
    /// Returns `AdminError::Repository` if the store fails.
    pub async fn find_all(&self) -> Result<Vec<AdminRecord>, AdminError> {
        self.list_admins().await
    }
}
