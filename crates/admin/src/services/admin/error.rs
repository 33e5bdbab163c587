//! Admin service error types.

use thiserror::Error;

use warden_core::AdminIdentity;

use crate::db::RepositoryError;

/// Errors surfaced by [`super::AdminService`].
///
/// Lookups never produce [`AdminError::NotFound`]; they return `false` or
/// `None` instead. Only deletion treats a missing record as an error.
#[derive(Debug, Error)]
pub enum AdminError {
    /// No admin record exists for the identity.
    #[error("admin not found: {0}")]
    NotFound(AdminIdentity),

    /// Any other record store failure, passed through unchanged.
    #[error("record store error: {0}")]
    Repository(#[from] RepositoryError),
}
